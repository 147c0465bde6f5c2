use crate::shared::icons::icon;
use crate::shared::number_format::format_percent_abs;
use contracts::dashboards::d100_supplier_overview::ChangeDirection;
use leptos::prelude::*;

/// Карточка показателя дашборда.
///
/// Пока данных нет (`value` = None), вместо значения выводится "—".
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Уже отформатированное значение
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Изменение к прошлому периоду, %
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "\u{2014}".to_string());

    let change_view = move || {
        change_percent.get().map(|pct| {
            let direction = ChangeDirection::from_percent(pct);
            let cls = match direction {
                ChangeDirection::Up => "stat-card__change stat-card__change--up",
                ChangeDirection::Down => "stat-card__change stat-card__change--down",
                ChangeDirection::Flat => "stat-card__change stat-card__change--flat",
            };
            let text = format!("{}{}", direction.arrow(), format_percent_abs(pct));
            view! { <span class=cls>{text}</span> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
            </div>
        </div>
    }
}
