use contracts::enums::ColorToken;
use leptos::prelude::*;

/// Горизонтальный прогресс-бар, `percent` ограничивается диапазоном 0..=100
#[component]
pub fn ProgressBar(percent: u8, #[prop(optional)] color: ColorToken) -> impl IntoView {
    let percent = percent.min(100);
    view! {
        <div class="progress" title=format!("{}%", percent)>
            <div
                class=format!("progress__fill progress__fill--{}", color.css_class())
                style=format!("width: {}%;", percent)
            ></div>
        </div>
    }
}
