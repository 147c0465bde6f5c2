use axum::{http::StatusCode, Json};
use contracts::system::session::CurrentUser;

use crate::handlers::data_source;

/// GET /api/system/session
///
/// Текущий пользователь для шапки. Настоящей авторизации нет,
/// пользователь берётся из источника данных.
pub async fn current_user() -> Result<Json<CurrentUser>, StatusCode> {
    let source = data_source()?;

    source.fetch_current_user().await.map(Json).map_err(|e| {
        tracing::error!("Failed to load current user: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// POST /api/system/session/logout
///
/// Сессия нигде не хранится, поэтому выход только фиксируется в логе.
pub async fn logout() -> StatusCode {
    tracing::info!("Session: logout requested");
    StatusCode::NO_CONTENT
}
