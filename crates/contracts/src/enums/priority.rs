use serde::{Deserialize, Serialize};

use super::color_token::{ColorToken, DisplayColor};

/// Приоритет сообщения или заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    /// Любое значение, которого нет в перечислении
    #[serde(other)]
    #[default]
    Unknown,
}

impl Priority {
    pub fn code(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Unknown => "—",
        }
    }

    /// Все известные значения (без `Unknown`)
    pub fn all() -> Vec<Priority> {
        vec![Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl DisplayColor for Priority {
    fn color(&self) -> ColorToken {
        match self {
            Priority::High => ColorToken::Red,
            Priority::Medium => ColorToken::Yellow,
            Priority::Low => ColorToken::Green,
            Priority::Unknown => ColorToken::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_priority_deserializes_to_fallback() {
        let p: Priority = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(p, Priority::Unknown);
        assert_eq!(p.color(), ColorToken::Neutral);
    }

    #[test]
    fn test_known_priorities_have_colors() {
        for p in Priority::all() {
            assert_ne!(p.color(), ColorToken::Neutral, "{:?}", p);
            assert_eq!(Priority::from_code(p.code()), Some(p));
        }
    }

    #[test]
    fn test_missing_priority_is_neutral() {
        let p: Option<Priority> = None;
        assert_eq!(p.color(), ColorToken::Neutral);
    }
}
