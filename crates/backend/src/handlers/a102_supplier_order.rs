use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a102_supplier_order::aggregate::{Order, OrderStatus};
use serde::Deserialize;

use super::data_source;
use crate::domain::a102_supplier_order::service;

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub q: Option<String>,
    /// Код статуса ("pending", "shipped", ...); пусто или "all" — без фильтра
    pub status: Option<String>,
}

/// GET /api/supplier/orders?q=&status=
pub async fn list_orders(
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<Order>>, StatusCode> {
    let status = match query.status.as_deref() {
        None | Some("") | Some("all") => None,
        Some(code) => match OrderStatus::from_code(code) {
            Some(status) => Some(status),
            None => {
                tracing::warn!("Orders: unknown status filter '{}'", code);
                return Err(StatusCode::BAD_REQUEST);
            }
        },
    };

    let source = data_source()?;
    let q = query.q.unwrap_or_default();

    service::list(source.as_ref(), &q, status)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to list orders: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        let query = ListOrdersQuery {
            q: None,
            status: Some("lost".to_string()),
        };
        let result = list_orders(Query(query)).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
    }
}
