use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SESSION
        // ========================================
        .route(
            "/api/system/session",
            get(system::handlers::session::current_user),
        )
        .route(
            "/api/system/session/logout",
            post(system::handlers::session::logout),
        )
        // ========================================
        // SUPPLIER PORTAL
        // ========================================
        // D100 Supplier overview dashboard
        .route(
            "/api/supplier/stats",
            get(handlers::d100_supplier_overview::get_stats),
        )
        .route(
            "/api/supplier/charts",
            get(handlers::d100_supplier_overview::get_charts),
        )
        .route(
            "/api/supplier/activity",
            get(handlers::a103_activity::list_activity),
        )
        .route(
            "/api/supplier/activity/page",
            get(handlers::a103_activity::page_activity),
        )
        .route(
            "/api/supplier/messages",
            get(handlers::a101_supplier_message::list_messages),
        )
        .route(
            "/api/supplier/orders",
            get(handlers::a102_supplier_order::list_orders),
        )
}
