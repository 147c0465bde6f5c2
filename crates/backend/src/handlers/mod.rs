pub mod a101_supplier_message;
pub mod a102_supplier_order;
pub mod a103_activity;
pub mod d100_supplier_overview;

use axum::http::StatusCode;
use std::sync::Arc;

use crate::shared::data::{get_data_source, SupplierDataSource};

/// Источник данных для обработчика; без инициализации — 500
pub(crate) fn data_source() -> Result<Arc<dyn SupplierDataSource>, StatusCode> {
    get_data_source().map_err(|e| {
        tracing::error!("{}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
