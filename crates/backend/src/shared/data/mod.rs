pub mod mock;
pub mod seed;
pub mod source;

pub use source::{get_data_source, initialize_data_source, DataSourceError, SupplierDataSource};
