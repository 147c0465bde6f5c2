use crate::shared::number_format::{format_int, format_money_short};
use contracts::dashboards::d100_supplier_overview::{share_percent, ChartData};
use leptos::prelude::*;

/// Столбчатый график выручки по месяцам.
///
/// Высота столбца — доля от максимальной выручки в наборе.
#[component]
pub fn SalesChart(#[prop(into)] data: Signal<ChartData>) -> impl IntoView {
    let bars = move || {
        let chart = data.get();
        let heights = bar_heights(&chart);
        chart
            .sales
            .into_iter()
            .zip(heights)
            .map(|(point, height)| {
                let title = format!(
                    "{}: {} / {} orders",
                    point.label,
                    format_money_short(point.revenue),
                    format_int(point.orders)
                );
                view! {
                    <div class="bar-chart__column" title=title>
                        <div class="bar-chart__value">{format_money_short(point.revenue)}</div>
                        <div class="bar-chart__track">
                            <div class="bar-chart__bar" style=format!("height: {:.1}%;", height)></div>
                        </div>
                        <div class="bar-chart__label">{point.label}</div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">"Sales Overview"</h3>
            <Show
                when=move || data.with(|c| !c.sales.is_empty())
                fallback=|| view! { <div class="chart-card__empty">"No sales data"</div> }
            >
                <div class="bar-chart">{bars}</div>
            </Show>
        </div>
    }
}

/// Высота каждого столбца в % от самого высокого
pub fn bar_heights(chart: &ChartData) -> Vec<f64> {
    let max = chart.max_revenue();
    chart
        .sales
        .iter()
        .map(|p| share_percent(p.revenue, max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_supplier_overview::SalesPoint;

    fn point(label: &str, revenue: f64) -> SalesPoint {
        SalesPoint {
            label: label.to_string(),
            revenue,
            orders: 0,
        }
    }

    #[test]
    fn test_bar_heights() {
        let chart = ChartData {
            sales: vec![point("Jan", 20_000.0), point("Feb", 40_000.0), point("Mar", 0.0)],
            categories: Vec::new(),
        };
        assert_eq!(bar_heights(&chart), vec![50.0, 100.0, 0.0]);
        assert!(bar_heights(&ChartData::default()).is_empty());
    }
}
