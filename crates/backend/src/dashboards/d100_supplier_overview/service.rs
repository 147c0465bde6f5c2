use anyhow::Result;
use contracts::dashboards::d100_supplier_overview::{ChartData, DashboardStats};

use crate::shared::data::SupplierDataSource;

pub async fn get_stats(source: &dyn SupplierDataSource) -> Result<DashboardStats> {
    Ok(source.fetch_stats().await?)
}

pub async fn get_charts(source: &dyn SupplierDataSource) -> Result<ChartData> {
    Ok(source.fetch_charts().await?)
}
