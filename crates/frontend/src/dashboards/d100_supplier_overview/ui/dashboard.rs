use super::category_chart::CategoryChart;
use super::recent_activity::RecentActivity;
use super::sales_chart::SalesChart;
use crate::dashboards::d100_supplier_overview::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::mount_guard::MountGuard;
use crate::shared::number_format::{format_int, format_money};
use contracts::dashboards::d100_supplier_overview::{ChartData, DashboardStats};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Главный дашборд поставщика: карточки показателей, графики и лента активности
#[component]
pub fn SupplierDashboard() -> impl IntoView {
    let guard = MountGuard::new();

    // None = ещё не загружено или загрузка не удалась
    let (stats, set_stats) = signal(None::<DashboardStats>);
    let (charts, set_charts) = signal(ChartData::default());
    let (loading, set_loading) = signal(true);

    // Показатели загружаются один раз при открытии страницы
    {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::get_stats().await;
            if !guard.is_alive() {
                return;
            }
            match result {
                Ok(data) => set_stats.set(Some(data)),
                Err(e) => log::error!("Failed to load dashboard stats: {}", e),
            }
            set_loading.set(false);
        });
    }

    {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::get_charts().await;
            if !guard.is_alive() {
                return;
            }
            match result {
                Ok(data) => set_charts.set(data),
                Err(e) => log::warn!("Failed to load chart data: {}", e),
            }
        });
    }

    let metric = move |f: fn(&DashboardStats) -> String| {
        Signal::derive(move || stats.with(|s| metric_text(loading.get(), s.as_ref(), f)))
    };
    let change = move |f: fn(&DashboardStats) -> f64| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(f)))
    };

    view! {
        <div id="d100_supplier_overview--dashboard" class="page page--dashboard">
            <PageHeader title="Dashboard" subtitle="Overview of your store performance">
                <Show when=move || loading.get()>
                    <Spinner />
                </Show>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Orders"
                    icon_name="shopping-cart"
                    value=metric(|s| format_int(s.total_orders))
                    change_percent=change(|s| s.change.orders)
                />
                <StatCard
                    label="Pending Orders"
                    icon_name="package"
                    value=metric(|s| format_int(s.pending_orders))
                />
                <StatCard
                    label="Total Revenue"
                    icon_name="dollar"
                    value=metric(|s| format_money(s.total_revenue))
                    change_percent=change(|s| s.change.revenue)
                />
                <StatCard
                    label="Active Products"
                    icon_name="package"
                    value=metric(|s| format_int(s.active_products))
                    change_percent=change(|s| s.change.products)
                />
                <StatCard
                    label="Unread Messages"
                    icon_name="message"
                    value=metric(|s| format_int(s.unread_messages))
                />
                <StatCard
                    label="Profile Views"
                    icon_name="eye"
                    value=metric(|s| format_int(s.profile_views))
                    change_percent=change(|s| s.change.views)
                />
            </div>

            <div class="chart-grid">
                <SalesChart data=charts />
                <CategoryChart data=charts />
            </div>

            <RecentActivity />
        </div>
    }
}

/// Текст карточки: пока идёт загрузка — `None` (прочерк), после ошибки —
/// значение из `DashboardStats::default()`, то есть нули.
pub fn metric_text(
    loading: bool,
    stats: Option<&DashboardStats>,
    f: fn(&DashboardStats) -> String,
) -> Option<String> {
    if loading {
        return None;
    }
    Some(match stats {
        Some(stats) => f(stats),
        None => f(&DashboardStats::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revenue(s: &DashboardStats) -> String {
        format_money(s.total_revenue)
    }

    fn orders(s: &DashboardStats) -> String {
        format_int(s.total_orders)
    }

    #[test]
    fn test_metric_while_loading() {
        assert_eq!(metric_text(true, None, orders), None);
    }

    #[test]
    fn test_metric_after_failed_fetch() {
        assert_eq!(metric_text(false, None, orders).as_deref(), Some("0"));
        assert_eq!(metric_text(false, None, revenue).as_deref(), Some("$0.00"));
    }

    #[test]
    fn test_metric_with_data() {
        let stats = DashboardStats {
            total_orders: 156,
            total_revenue: 284_750.0,
            ..Default::default()
        };
        assert_eq!(metric_text(false, Some(&stats), orders).as_deref(), Some("156"));
        assert_eq!(metric_text(false, Some(&stats), revenue).as_deref(), Some("$284,750.00"));
    }
}
