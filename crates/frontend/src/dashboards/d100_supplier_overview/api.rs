use contracts::dashboards::d100_supplier_overview::{ChartData, DashboardStats};
use contracts::domain::a103_activity::aggregate::ActivityItem;

use crate::shared::api_utils::get_json;

const API_BASE: &str = "/api/supplier";

/// Сводные показатели для карточек
pub async fn get_stats() -> Result<DashboardStats, String> {
    get_json(&format!("{}/stats", API_BASE)).await
}

/// Наборы данных для графиков продаж и категорий
pub async fn get_charts() -> Result<ChartData, String> {
    get_json(&format!("{}/charts", API_BASE)).await
}

/// Вся лента активности; страницы режутся на клиенте
pub async fn get_activity() -> Result<Vec<ActivityItem>, String> {
    get_json(&format!("{}/activity", API_BASE)).await
}
