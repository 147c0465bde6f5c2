use contracts::dashboards::d100_supplier_overview::{share_percent, ChartData};
use leptos::prelude::*;

const PALETTE: [&str; 5] = ["blue", "green", "yellow", "purple", "orange"];

/// Распределение заказов по категориям: легенда с долями и полосы
#[component]
pub fn CategoryChart(#[prop(into)] data: Signal<ChartData>) -> impl IntoView {
    let rows = move || {
        let chart = data.get();
        let percents = category_percents(&chart);
        chart
            .categories
            .into_iter()
            .zip(percents)
            .enumerate()
            .map(|(idx, (share, pct))| {
                let color = PALETTE[idx % PALETTE.len()];
                view! {
                    <div class="category-chart__row">
                        <span class=format!("category-chart__dot category-chart__dot--{}", color)></span>
                        <span class="category-chart__name">{share.category}</span>
                        <div class="category-chart__track">
                            <div
                                class=format!("category-chart__bar category-chart__bar--{}", color)
                                style=format!("width: {:.1}%;", pct)
                            ></div>
                        </div>
                        <span class="category-chart__pct">{format!("{:.0}%", pct)}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">"Orders by Category"</h3>
            <Show
                when=move || data.with(|c| !c.categories.is_empty())
                fallback=|| view! { <div class="chart-card__empty">"No category data"</div> }
            >
                <div class="category-chart">{rows}</div>
            </Show>
        </div>
    }
}

/// Доля каждой категории от суммы всех категорий, %
pub fn category_percents(chart: &ChartData) -> Vec<f64> {
    let total = chart.categories_total();
    chart
        .categories
        .iter()
        .map(|c| share_percent(c.value, total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_supplier_overview::CategoryShare;

    #[test]
    fn test_category_percents() {
        let chart = ChartData {
            sales: Vec::new(),
            categories: vec![
                CategoryShare { category: "Furniture".to_string(), value: 30.0 },
                CategoryShare { category: "Textiles".to_string(), value: 10.0 },
            ],
        };
        assert_eq!(category_percents(&chart), vec![75.0, 25.0]);

        let zero = ChartData {
            sales: Vec::new(),
            categories: vec![CategoryShare { category: "Lighting".to_string(), value: 0.0 }],
        };
        assert_eq!(category_percents(&zero), vec![0.0]);
    }
}
