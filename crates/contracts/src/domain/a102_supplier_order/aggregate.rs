use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::enums::{ColorToken, DisplayColor, Priority};
use crate::shared::list_utils::{cmp_ignore_case, cmp_optional, Searchable, Sortable};
use crate::shared::serde_utils::null_as_default;

/// Покупатель
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Buyer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar: String,
}

/// Статус заказа.
///
/// Переходы между статусами здесь не реализуются, статус только
/// отображается.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    /// Все известные статусы в порядке жизненного цикла
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Процент выполнения для прогресс-бара
    pub fn progress_percent(&self) -> u8 {
        match self {
            OrderStatus::Pending => 10,
            OrderStatus::Confirmed => 25,
            OrderStatus::Processing => 50,
            OrderStatus::Shipped => 75,
            OrderStatus::Delivered => 100,
            OrderStatus::Cancelled => 0,
            OrderStatus::Unknown => 0,
        }
    }
}

impl DisplayColor for OrderStatus {
    fn color(&self) -> ColorToken {
        match self {
            OrderStatus::Pending => ColorToken::Yellow,
            OrderStatus::Confirmed => ColorToken::Blue,
            OrderStatus::Processing => ColorToken::Purple,
            OrderStatus::Shipped => ColorToken::Indigo,
            OrderStatus::Delivered => ColorToken::Green,
            OrderStatus::Cancelled => ColorToken::Red,
            OrderStatus::Unknown => ColorToken::Neutral,
        }
    }
}

/// Прогресс для статуса, который может отсутствовать
pub fn progress_for(status: Option<OrderStatus>) -> u8 {
    status.map(|s| s.progress_percent()).unwrap_or(0)
}

/// Заказ покупателя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buyer: Buyer,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_date: NaiveDate,
    #[serde(default)]
    pub expected_delivery: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
}

impl Order {
    pub fn progress_percent(&self) -> u8 {
        self.status.progress_percent()
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_number.as_str(),
            self.buyer.name.as_str(),
            self.buyer.company.as_str(),
        ]
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_number" => cmp_ignore_case(&self.order_number, &other.order_number),
            "order_date" => self.order_date.cmp(&other.order_date),
            "expected_delivery" => cmp_optional(&self.expected_delivery, &other.expected_delivery),
            "total_amount" => self
                .total_amount
                .partial_cmp(&other.total_amount)
                .unwrap_or(Ordering::Equal),
            "items" => self.items.cmp(&other.items),
            "buyer" => cmp_ignore_case(&self.buyer.name, &other.buyer.name),
            _ => Ordering::Equal,
        }
    }
}

/// Оставляет заказы с указанным статусом (`None` — все)
pub fn filter_by_status(orders: Vec<Order>, status: Option<OrderStatus>) -> Vec<Order> {
    match status {
        Some(status) => orders.into_iter().filter(|o| o.status == status).collect(),
        None => orders,
    }
}

/// Количество заказов по каждому известному статусу (в порядке `OrderStatus::all()`)
pub fn count_by_status(orders: &[Order]) -> Vec<(OrderStatus, usize)> {
    OrderStatus::all()
        .into_iter()
        .map(|status| {
            let count = orders.iter().filter(|o| o.status == status).count();
            (status, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_list};

    #[test]
    fn test_null_and_missing_fields_do_not_fail_the_list() {
        let json = r#"[
            {"id":"1","order_number":"ORD-1","buyer":{"name":"Anna","company":"Nordic Home"},"items":3,"total_amount":1200.5,"status":"shipped","order_date":"2024-01-15","priority":"low"},
            {"id":"2","order_number":"ORD-2","buyer":null,"items":null,"total_amount":null,"status":null,"order_date":null,"expected_delivery":null},
            {"id":"3"}
        ]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();
        assert_eq!(orders.len(), 3);

        let second = &orders[1];
        assert_eq!(second.items, 0);
        assert_eq!(second.total_amount, 0.0);
        assert_eq!(second.buyer, Buyer::default());
        assert_eq!(second.status, OrderStatus::Unknown);
        assert_eq!(second.progress_percent(), 0);
        assert_eq!(second.priority, Priority::Unknown);
        assert_eq!(second.expected_delivery, None);

        let third = &orders[2];
        assert_eq!(third.order_number, "");
        assert_eq!(third.status.color(), ColorToken::Neutral);

        assert_eq!(filter_list(orders, "ord-").len(), 2);
    }

    fn order(id: &str, number: &str, buyer: &str, company: &str, status: OrderStatus, amount: f64) -> Order {
        Order {
            id: id.to_string(),
            order_number: number.to_string(),
            buyer: Buyer {
                name: buyer.to_string(),
                company: company.to_string(),
                avatar: String::new(),
            },
            items: 3,
            total_amount: amount,
            status,
            order_date: NaiveDate::from_ymd_opt(2024, 1, id.parse().unwrap_or(1)).unwrap(),
            expected_delivery: None,
            priority: Priority::Low,
        }
    }

    fn orders() -> Vec<Order> {
        vec![
            order("1", "ORD-2024-001", "Anna Schmidt", "Nordic Foods", OrderStatus::Pending, 1200.0),
            order("2", "ORD-2024-002", "Liu Wei", "Shanghai Trading", OrderStatus::Shipped, 5400.5),
            order("3", "ORD-2024-003", "Carlos Mendes", "Andes Import", OrderStatus::Delivered, 320.0),
            order("4", "ORD-2024-004", "Fatima Khan", "Gulf Traders", OrderStatus::Pending, 780.0),
        ]
    }

    #[test]
    fn test_progress_table() {
        assert_eq!(OrderStatus::Pending.progress_percent(), 10);
        assert_eq!(OrderStatus::Confirmed.progress_percent(), 25);
        assert_eq!(OrderStatus::Processing.progress_percent(), 50);
        assert_eq!(OrderStatus::Shipped.progress_percent(), 75);
        assert_eq!(OrderStatus::Delivered.progress_percent(), 100);
        assert_eq!(OrderStatus::Cancelled.progress_percent(), 0);
    }

    #[test]
    fn test_progress_is_total_and_bounded() {
        for status in OrderStatus::all() {
            assert!(status.progress_percent() <= 100);
        }
        assert_eq!(progress_for(None), 0);
        assert_eq!(progress_for(Some(OrderStatus::Unknown)), 0);
        let from_wire: OrderStatus = serde_json::from_str("\"returned\"").unwrap();
        assert_eq!(from_wire.progress_percent(), 0);
    }

    #[test]
    fn test_every_status_has_a_color() {
        for status in OrderStatus::all() {
            assert_ne!(status.color(), ColorToken::Neutral, "{:?}", status);
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::Unknown.color(), ColorToken::Neutral);
    }

    #[test]
    fn test_search_by_number_buyer_company() {
        assert_eq!(filter_list(orders(), "2024-003").len(), 1);
        assert_eq!(filter_list(orders(), "fatima").len(), 1);
        assert_eq!(filter_list(orders(), "TRADING").len(), 1);
        assert_eq!(filter_list(orders(), "ord-").len(), 4);
    }

    #[test]
    fn test_status_filter_after_search() {
        let found = filter_by_status(filter_list(orders(), "a"), Some(OrderStatus::Pending));
        let ids: Vec<&str> = found.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(filter_by_status(orders(), None).len(), 4);
    }

    #[test]
    fn test_count_by_status() {
        let counts = count_by_status(&orders());
        assert_eq!(counts.len(), 6);
        assert_eq!(counts[0], (OrderStatus::Pending, 2));
        assert_eq!(counts[3], (OrderStatus::Shipped, 1));
        assert_eq!(counts[5], (OrderStatus::Cancelled, 0));
    }

    #[test]
    fn test_sort_by_amount() {
        let mut list = orders();
        sort_list(&mut list, "total_amount", false);
        let ids: Vec<&str> = list.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "4", "3"]);
    }

    #[test]
    fn test_missing_expected_delivery() {
        let json = r#"{
            "id": "7",
            "order_number": "ORD-7",
            "buyer": {"name": "B"},
            "status": "confirmed",
            "order_date": "2024-02-01",
            "priority": "high"
        }"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert_eq!(o.expected_delivery, None);
        assert_eq!(o.total_amount, 0.0);
        assert_eq!(o.progress_percent(), 25);
    }
}
