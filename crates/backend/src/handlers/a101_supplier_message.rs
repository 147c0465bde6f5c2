use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a101_supplier_message::aggregate::Message;
use serde::Deserialize;

use super::data_source;
use crate::domain::a101_supplier_message::service;

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub q: Option<String>,
}

/// GET /api/supplier/messages?q=
pub async fn list_messages(
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    let source = data_source()?;
    let q = query.q.unwrap_or_default();

    match service::list(source.as_ref(), &q).await {
        Ok(messages) => {
            tracing::debug!("Messages: {} items for query '{}'", messages.len(), q);
            Ok(Json(messages))
        }
        Err(e) => {
            tracing::error!("Failed to list messages: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
