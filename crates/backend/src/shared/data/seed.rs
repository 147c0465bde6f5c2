//! Фиксированные примеры данных для мок-источника.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use contracts::dashboards::d100_supplier_overview::{
    CategoryShare, ChartData, DashboardStats, SalesPoint, StatsChange,
};
use contracts::domain::a101_supplier_message::aggregate::{Message, MessageCategory, Sender};
use contracts::domain::a102_supplier_order::aggregate::{Buyer, Order, OrderStatus};
use contracts::domain::a103_activity::aggregate::{ActivityItem, ActivityStatus, ActivityType};
use contracts::enums::Priority;
use contracts::system::session::CurrentUser;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default()
}

pub fn current_user() -> CurrentUser {
    CurrentUser {
        first_name: "Mehmet".to_string(),
        last_name: "Yilmaz".to_string(),
        email: "mehmet@anatolia-textiles.example".to_string(),
    }
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_orders: 156,
        pending_orders: 12,
        total_revenue: 284_750.0,
        active_products: 48,
        unread_messages: 3,
        profile_views: 1_247,
        change: StatsChange {
            orders: 12.5,
            revenue: 8.2,
            products: -2.1,
            views: 15.3,
        },
    }
}

pub fn chart_data() -> ChartData {
    let sales = [
        ("Jul", 18_400.0, 14),
        ("Aug", 22_100.0, 19),
        ("Sep", 19_800.0, 16),
        ("Oct", 27_300.0, 23),
        ("Nov", 31_900.0, 27),
        ("Dec", 35_200.0, 31),
    ]
    .into_iter()
    .map(|(label, revenue, orders)| SalesPoint {
        label: label.to_string(),
        revenue,
        orders,
    })
    .collect();

    let categories = [
        ("Textiles", 35.0),
        ("Home goods", 25.0),
        ("Apparel", 20.0),
        ("Accessories", 12.0),
        ("Other", 8.0),
    ]
    .into_iter()
    .map(|(category, value)| CategoryShare {
        category: category.to_string(),
        value,
    })
    .collect();

    ChartData { sales, categories }
}

#[allow(clippy::too_many_arguments)]
fn message(
    id: &str,
    sender: (&str, &str, &str),
    subject: &str,
    preview: &str,
    timestamp: DateTime<Utc>,
    read: bool,
    starred: bool,
    priority: Priority,
    category: MessageCategory,
) -> Message {
    let (name, company, flag) = sender;
    let initials: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();
    Message {
        id: id.to_string(),
        sender: Sender {
            name: name.to_string(),
            company: company.to_string(),
            avatar: initials,
            flag: flag.to_string(),
        },
        subject: subject.to_string(),
        preview: preview.to_string(),
        content: format!(
            "{}\n\nBest regards,\n{}\n{}",
            preview, name, company
        ),
        timestamp,
        read,
        starred,
        priority,
        category,
    }
}

pub fn messages() -> Vec<Message> {
    vec![
        message(
            "1",
            ("Anna Schmidt", "Nordic Home GmbH", "🇩🇪"),
            "Bulk order inquiry for cotton towels",
            "We are interested in ordering 5,000 units of your premium cotton towels for our spring collection.",
            at(15, 10, 30),
            false,
            true,
            Priority::High,
            MessageCategory::Inquiry,
        ),
        message(
            "2",
            ("James Wilson", "Wilson & Co Retail", "🇬🇧"),
            "Order #ORD-2024-002 shipping update",
            "Could you please confirm the expected shipping date for our last order?",
            at(15, 8, 15),
            false,
            false,
            Priority::Medium,
            MessageCategory::Order,
        ),
        message(
            "3",
            ("Sophie Martin", "Maison Deco", "🇫🇷"),
            "Partnership proposal",
            "We would like to discuss a long-term distribution partnership for the French market.",
            at(14, 16, 45),
            true,
            true,
            Priority::High,
            MessageCategory::Partnership,
        ),
        message(
            "4",
            ("Marco Rossi", "Casa Bella SRL", "🇮🇹"),
            "Damaged items in delivery",
            "Several items in our latest delivery arrived damaged. Photos attached.",
            at(14, 11, 0),
            false,
            false,
            Priority::High,
            MessageCategory::Support,
        ),
        message(
            "5",
            ("Elena Petrova", "Volga Trade LLC", "🇷🇺"),
            "Catalogue request",
            "Please send the updated product catalogue with wholesale prices.",
            at(13, 9, 20),
            true,
            false,
            Priority::Low,
            MessageCategory::Inquiry,
        ),
        message(
            "6",
            ("Ahmed Hassan", "Gulf Living Trading", "🇦🇪"),
            "Repeat order for bed linen",
            "We want to repeat our previous bed linen order with a 20% larger quantity.",
            at(12, 14, 5),
            true,
            false,
            Priority::Medium,
            MessageCategory::Order,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    order_number: &str,
    buyer: (&str, &str),
    items: u32,
    total_amount: f64,
    status: OrderStatus,
    order_date: NaiveDate,
    expected_delivery: Option<NaiveDate>,
    priority: Priority,
) -> Order {
    let (name, company) = buyer;
    Order {
        id: id.to_string(),
        order_number: order_number.to_string(),
        buyer: Buyer {
            name: name.to_string(),
            company: company.to_string(),
            avatar: name
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .collect(),
        },
        items,
        total_amount,
        status,
        order_date,
        expected_delivery,
        priority,
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        order(
            "1",
            "ORD-2024-001",
            ("Anna Schmidt", "Nordic Home GmbH"),
            250,
            12_500.0,
            OrderStatus::Pending,
            date(1, 15),
            Some(date(2, 1)),
            Priority::High,
        ),
        order(
            "2",
            "ORD-2024-002",
            ("James Wilson", "Wilson & Co Retail"),
            120,
            8_400.0,
            OrderStatus::Confirmed,
            date(1, 14),
            Some(date(1, 28)),
            Priority::Medium,
        ),
        order(
            "3",
            "ORD-2024-003",
            ("Sophie Martin", "Maison Deco"),
            75,
            5_625.0,
            OrderStatus::Processing,
            date(1, 12),
            Some(date(1, 25)),
            Priority::Medium,
        ),
        order(
            "4",
            "ORD-2024-004",
            ("Marco Rossi", "Casa Bella SRL"),
            300,
            18_000.0,
            OrderStatus::Shipped,
            date(1, 10),
            Some(date(1, 20)),
            Priority::High,
        ),
        order(
            "5",
            "ORD-2024-005",
            ("Elena Petrova", "Volga Trade LLC"),
            50,
            3_250.0,
            OrderStatus::Delivered,
            date(1, 5),
            None,
            Priority::Low,
        ),
        order(
            "6",
            "ORD-2024-006",
            ("Ahmed Hassan", "Gulf Living Trading"),
            180,
            10_800.0,
            OrderStatus::Cancelled,
            date(1, 3),
            None,
            Priority::Low,
        ),
    ]
}

fn activity_item(
    id: &str,
    activity_type: ActivityType,
    title: &str,
    description: &str,
    timestamp: &str,
    status: Option<ActivityStatus>,
) -> ActivityItem {
    ActivityItem {
        id: id.to_string(),
        activity_type,
        title: title.to_string(),
        description: description.to_string(),
        timestamp: timestamp.to_string(),
        status,
    }
}

pub fn activity() -> Vec<ActivityItem> {
    vec![
        activity_item("1", ActivityType::Order, "New order received", "ORD-2024-001 from Nordic Home GmbH", "5 minutes ago", Some(ActivityStatus::New)),
        activity_item("2", ActivityType::Message, "New message", "Anna Schmidt asked about cotton towels", "12 minutes ago", Some(ActivityStatus::New)),
        activity_item("3", ActivityType::View, "Profile viewed", "Maison Deco viewed your company profile", "1 hour ago", None),
        activity_item("4", ActivityType::Alert, "Low stock", "Premium cotton towels: 40 units left", "2 hours ago", Some(ActivityStatus::Pending)),
        activity_item("5", ActivityType::Success, "Order delivered", "ORD-2024-005 delivered to Volga Trade LLC", "5 hours ago", Some(ActivityStatus::Completed)),
        activity_item("6", ActivityType::Order, "Order shipped", "ORD-2024-004 handed to the carrier", "1 day ago", Some(ActivityStatus::Completed)),
        activity_item("7", ActivityType::Message, "Reply sent", "Answered Elena Petrova's catalogue request", "2 days ago", Some(ActivityStatus::Read)),
        activity_item("8", ActivityType::View, "Product viewed", "Bed linen set viewed 32 times today", "3 days ago", None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = messages().into_iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), messages().len());
        let ids: HashSet<_> = orders().into_iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), orders().len());
        let ids: HashSet<_> = activity().into_iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), activity().len());
    }

    #[test]
    fn test_every_order_status_is_represented() {
        let statuses: HashSet<_> = orders().into_iter().map(|o| o.status).collect();
        for status in OrderStatus::all() {
            assert!(statuses.contains(&status), "{:?}", status);
        }
    }

    #[test]
    fn test_activity_fills_two_pages() {
        assert_eq!(activity().len(), 8);
    }

    #[test]
    fn test_timestamps_are_real_dates() {
        assert!(messages().iter().all(|m| m.timestamp.timestamp() > 0));
    }

    #[test]
    fn test_wire_shape() {
        let item = serde_json::to_value(&activity()[0]).unwrap();
        assert!(item.get("type").is_some());
        assert!(item.get("activity_type").is_none());

        let order = serde_json::to_value(&orders()[0]).unwrap();
        assert_eq!(order["status"], "pending");
        assert_eq!(order["order_date"], "2024-01-15");
    }
}
