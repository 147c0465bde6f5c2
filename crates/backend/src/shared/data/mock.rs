use async_trait::async_trait;
use contracts::dashboards::d100_supplier_overview::{ChartData, DashboardStats};
use contracts::domain::a101_supplier_message::aggregate::Message;
use contracts::domain::a102_supplier_order::aggregate::Order;
use contracts::domain::a103_activity::aggregate::ActivityItem;
use contracts::system::session::CurrentUser;
use std::time::Duration;

use super::seed;
use super::source::{DataSourceError, SupplierDataSource};

/// In-memory источник: отдаёт фиксированные примеры после задержки.
///
/// Данные никогда не изменяются; прочитанность и "звёздочки" живут
/// только в состоянии страниц фронтенда.
#[derive(Debug, Clone)]
pub struct MockDataSource {
    latency: Duration,
}

impl MockDataSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl SupplierDataSource for MockDataSource {
    async fn fetch_stats(&self) -> Result<DashboardStats, DataSourceError> {
        self.simulate_latency().await;
        Ok(seed::dashboard_stats())
    }

    async fn fetch_charts(&self) -> Result<ChartData, DataSourceError> {
        Ok(seed::chart_data())
    }

    async fn fetch_messages(&self) -> Result<Vec<Message>, DataSourceError> {
        self.simulate_latency().await;
        Ok(seed::messages())
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, DataSourceError> {
        self.simulate_latency().await;
        Ok(seed::orders())
    }

    async fn fetch_activity(&self) -> Result<Vec<ActivityItem>, DataSourceError> {
        Ok(seed::activity())
    }

    async fn fetch_current_user(&self) -> Result<CurrentUser, DataSourceError> {
        Ok(seed::current_user())
    }
}
