pub mod a101_supplier_message;
pub mod a102_supplier_order;
pub mod a103_activity;
