use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a103_activity::aggregate::ActivityItem;
use contracts::shared::pagination::{Page, ACTIVITY_PAGE_SIZE};
use serde::Deserialize;

use super::data_source;
use crate::domain::a103_activity::service;

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// GET /api/supplier/activity
///
/// Вся лента целиком; фронтенд листает её сам.
pub async fn list_activity() -> Result<Json<Vec<ActivityItem>>, StatusCode> {
    let source = data_source()?;

    service::list(source.as_ref()).await.map(Json).map_err(|e| {
        tracing::error!("Failed to load activity: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /api/supplier/activity/page?page=1&page_size=4
pub async fn page_activity(
    Query(query): Query<ActivityQuery>,
) -> Result<Json<Page<ActivityItem>>, StatusCode> {
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(ACTIVITY_PAGE_SIZE);
    let source = data_source()?;

    service::page(source.as_ref(), page, page_size)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to load activity: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
