use contracts::enums::ColorToken;
use leptos::prelude::*;
use thaw::*;

/// Цвет бейджа thaw для токена
pub fn badge_color(token: ColorToken) -> BadgeColor {
    match token {
        ColorToken::Blue => BadgeColor::Informative,
        ColorToken::Green => BadgeColor::Success,
        ColorToken::Yellow => BadgeColor::Warning,
        ColorToken::Orange => BadgeColor::Important,
        ColorToken::Red => BadgeColor::Danger,
        ColorToken::Purple | ColorToken::Indigo => BadgeColor::Brand,
        ColorToken::Neutral => BadgeColor::Subtle,
    }
}

/// Бейдж статуса/приоритета/категории
#[component]
pub fn ColorBadge(
    token: ColorToken,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(token)>
            {label}
        </Badge>
    }
}
