pub mod category_chart;
pub mod dashboard;
pub mod recent_activity;
pub mod sales_chart;

pub use dashboard::SupplierDashboard;
