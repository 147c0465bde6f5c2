use contracts::domain::a101_supplier_message::aggregate::Message;

use crate::shared::api_utils::get_json;

/// Все входящие сообщения, новые сначала
pub async fn get_messages() -> Result<Vec<Message>, String> {
    get_json("/api/supplier/messages").await
}
