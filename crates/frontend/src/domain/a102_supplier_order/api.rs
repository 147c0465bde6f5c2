use contracts::domain::a102_supplier_order::aggregate::Order;

use crate::shared::api_utils::get_json;

/// Все заказы поставщика, новые сначала.
///
/// Поиск и фильтр по статусу делаются на странице: чипам нужны счётчики
/// по всему списку.
pub async fn get_orders() -> Result<Vec<Order>, String> {
    get_json("/api/supplier/orders").await
}
