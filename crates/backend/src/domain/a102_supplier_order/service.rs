use anyhow::Result;
use contracts::domain::a102_supplier_order::aggregate::{filter_by_status, Order, OrderStatus};
use contracts::shared::list_utils::{filter_list, sort_list};

use crate::shared::data::SupplierDataSource;

/// Заказы по дате (новые сначала) с текстовым поиском и фильтром по статусу
pub async fn list(
    source: &dyn SupplierDataSource,
    query: &str,
    status: Option<OrderStatus>,
) -> Result<Vec<Order>> {
    let mut orders = source.fetch_orders().await?;
    sort_list(&mut orders, "order_date", false);
    Ok(filter_by_status(filter_list(orders, query), status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::mock::MockDataSource;
    use std::time::Duration;

    #[tokio::test]
    async fn test_list_all() {
        let source = MockDataSource::new(Duration::ZERO);
        let orders = list(&source, "", None).await.unwrap();
        assert_eq!(orders.len(), 6);
        assert_eq!(orders[0].order_number, "ORD-2024-001");
    }

    #[tokio::test]
    async fn test_list_by_status_and_query() {
        let source = MockDataSource::new(Duration::ZERO);
        let shipped = list(&source, "", Some(OrderStatus::Shipped)).await.unwrap();
        assert_eq!(shipped.len(), 1);
        assert_eq!(shipped[0].buyer.company, "Casa Bella SRL");

        let none = list(&source, "nordic", Some(OrderStatus::Delivered)).await.unwrap();
        assert!(none.is_empty());
    }
}
