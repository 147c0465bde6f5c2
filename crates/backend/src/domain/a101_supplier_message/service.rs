use anyhow::Result;
use contracts::domain::a101_supplier_message::aggregate::Message;
use contracts::shared::list_utils::{filter_list, sort_list};

use crate::shared::data::SupplierDataSource;

/// Сообщения поставщика, новые сначала, отфильтрованные по `query`
pub async fn list(source: &dyn SupplierDataSource, query: &str) -> Result<Vec<Message>> {
    let mut messages = source.fetch_messages().await?;
    sort_list(&mut messages, "timestamp", false);
    Ok(filter_list(messages, query))
}
