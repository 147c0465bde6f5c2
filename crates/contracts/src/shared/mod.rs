pub mod list_utils;
pub mod pagination;
pub mod serde_utils;
