use serde::{Deserialize, Serialize};

/// Цветовой токен для бейджей и индикаторов.
///
/// Фронтенд сам решает, как токен отображается (CSS-класс, цвет бейджа).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    #[default]
    Neutral,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Indigo,
}

impl ColorToken {
    /// Суффикс CSS-класса, например `badge--green`
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorToken::Neutral => "neutral",
            ColorToken::Blue => "blue",
            ColorToken::Green => "green",
            ColorToken::Yellow => "yellow",
            ColorToken::Orange => "orange",
            ColorToken::Red => "red",
            ColorToken::Purple => "purple",
            ColorToken::Indigo => "indigo",
        }
    }
}

/// Сопоставление значения перечисления с цветом отображения
pub trait DisplayColor {
    fn color(&self) -> ColorToken;
}

impl<T: DisplayColor> DisplayColor for Option<T> {
    fn color(&self) -> ColorToken {
        self.as_ref().map(DisplayColor::color).unwrap_or_default()
    }
}
