use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;

/// Изменение показателей относительно прошлого периода, в процентах
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsChange {
    #[serde(deserialize_with = "null_as_default")]
    pub orders: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub revenue: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub products: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub views: f64,
}

/// Сводные показатели для карточек дашборда.
///
/// Загружаются один раз при открытии страницы. Любое отсутствующее или
/// `null` поле превращается в 0, а `DashboardStats::default()` — это
/// состояние "нет данных", которое рисуется при ошибке загрузки.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_orders: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pending_orders: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub active_products: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unread_messages: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_views: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub change: StatsChange,
}

/// Направление изменения показателя
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    /// Изменения меньше 0.5% по модулю считаются "без изменений"
    pub fn from_percent(pct: f64) -> Self {
        if pct > 0.5 {
            ChangeDirection::Up
        } else if pct < -0.5 {
            ChangeDirection::Down
        } else {
            ChangeDirection::Flat
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "\u{2191}",
            ChangeDirection::Down => "\u{2193}",
            ChangeDirection::Flat => "",
        }
    }
}

/// Точка графика продаж (по месяцам)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesPoint {
    pub label: String,
    pub revenue: f64,
    pub orders: u64,
}

/// Доля категории на круговой диаграмме
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryShare {
    pub category: String,
    pub value: f64,
}

/// Статические наборы данных для графиков дашборда
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartData {
    pub sales: Vec<SalesPoint>,
    pub categories: Vec<CategoryShare>,
}

impl ChartData {
    /// Максимальная выручка (для масштаба столбцов), 0 для пустого графика
    pub fn max_revenue(&self) -> f64 {
        self.sales.iter().map(|p| p.revenue).fold(0.0, f64::max)
    }

    pub fn categories_total(&self) -> f64 {
        self.categories.iter().map(|c| c.value).sum()
    }
}

/// Доля `value` от `total` в процентах; при нулевом итоге — 0
pub fn share_percent(value: f64, total: f64) -> f64 {
    if total <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / total * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_are_zero() {
        let stats = DashboardStats::default();
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.change.revenue, 0.0);
    }

    #[test]
    fn test_missing_and_null_fields() {
        let json = r#"{"total_orders": 12, "total_revenue": null, "change": {"orders": 4.5}}"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_orders, 12);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.pending_orders, 0);
        assert_eq!(stats.change.orders, 4.5);
        assert_eq!(stats.change.views, 0.0);

        let stats: DashboardStats = serde_json::from_str(r#"{"change": null}"#).unwrap();
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_change_direction() {
        assert_eq!(ChangeDirection::from_percent(12.5), ChangeDirection::Up);
        assert_eq!(ChangeDirection::from_percent(-3.0), ChangeDirection::Down);
        assert_eq!(ChangeDirection::from_percent(0.2), ChangeDirection::Flat);
        assert_eq!(ChangeDirection::Flat.arrow(), "");
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(25.0, 100.0), 25.0);
        assert_eq!(share_percent(5.0, 0.0), 0.0);
        assert_eq!(share_percent(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_chart_helpers_on_empty_data() {
        let data = ChartData::default();
        assert_eq!(data.max_revenue(), 0.0);
        assert_eq!(data.categories_total(), 0.0);
    }
}
