use axum::{http::StatusCode, Json};
use contracts::dashboards::d100_supplier_overview::{ChartData, DashboardStats};

use super::data_source;
use crate::dashboards::d100_supplier_overview::service;

/// GET /api/supplier/stats
pub async fn get_stats() -> Result<Json<DashboardStats>, StatusCode> {
    let source = data_source()?;

    match service::get_stats(source.as_ref()).await {
        Ok(stats) => {
            tracing::info!(
                "D100 Dashboard: {} orders, {} unread messages",
                stats.total_orders,
                stats.unread_messages
            );
            Ok(Json(stats))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to get stats: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/supplier/charts
pub async fn get_charts() -> Result<Json<ChartData>, StatusCode> {
    let source = data_source()?;

    service::get_charts(source.as_ref())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("D100 Dashboard: Failed to get chart data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
