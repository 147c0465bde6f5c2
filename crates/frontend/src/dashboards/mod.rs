pub mod d100_supplier_overview;

pub use d100_supplier_overview::ui::SupplierDashboard;
