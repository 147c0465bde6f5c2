use async_trait::async_trait;
use contracts::dashboards::d100_supplier_overview::{ChartData, DashboardStats};
use contracts::domain::a101_supplier_message::aggregate::Message;
use contracts::domain::a102_supplier_order::aggregate::Order;
use contracts::domain::a103_activity::aggregate::ActivityItem;
use contracts::system::session::CurrentUser;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;

use super::mock::MockDataSource;
use crate::shared::config::Config;

/// Ошибки источника данных
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("data source is not initialized")]
    NotInitialized,

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Источник данных кабинета поставщика.
///
/// Сейчас единственная реализация — `MockDataSource`; сервисы и обработчики
/// работают только через этот трейт.
#[async_trait]
pub trait SupplierDataSource: Send + Sync {
    async fn fetch_stats(&self) -> Result<DashboardStats, DataSourceError>;
    async fn fetch_charts(&self) -> Result<ChartData, DataSourceError>;
    async fn fetch_messages(&self) -> Result<Vec<Message>, DataSourceError>;
    async fn fetch_orders(&self) -> Result<Vec<Order>, DataSourceError>;
    async fn fetch_activity(&self) -> Result<Vec<ActivityItem>, DataSourceError>;
    async fn fetch_current_user(&self) -> Result<CurrentUser, DataSourceError>;
}

static DATA_SOURCE: OnceCell<Arc<dyn SupplierDataSource>> = OnceCell::new();

pub fn initialize_data_source(config: &Config) -> anyhow::Result<()> {
    let source: Arc<dyn SupplierDataSource> =
        Arc::new(MockDataSource::new(config.mock.latency()));
    DATA_SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("data source already initialized"))?;
    tracing::info!(
        "Mock data source initialized (latency {} ms)",
        config.mock.latency_ms
    );
    Ok(())
}

pub fn get_data_source() -> Result<Arc<dyn SupplierDataSource>, DataSourceError> {
    DATA_SOURCE.get().cloned().ok_or(DataSourceError::NotInitialized)
}
