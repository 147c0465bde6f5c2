use serde::{Deserialize, Serialize};

use crate::enums::{ColorToken, DisplayColor};
use crate::shared::serde_utils::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Order,
    Message,
    View,
    Alert,
    Success,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ActivityType {
    /// Имя иконки для `icon()` на фронтенде
    pub fn icon_name(&self) -> &'static str {
        match self {
            ActivityType::Order => "shopping-cart",
            ActivityType::Message => "message",
            ActivityType::View => "eye",
            ActivityType::Alert => "alert-triangle",
            ActivityType::Success => "check-circle",
            ActivityType::Unknown => "circle",
        }
    }
}

impl DisplayColor for ActivityType {
    fn color(&self) -> ColorToken {
        match self {
            ActivityType::Order => ColorToken::Blue,
            ActivityType::Message => ColorToken::Green,
            ActivityType::View => ColorToken::Purple,
            ActivityType::Alert => ColorToken::Orange,
            ActivityType::Success => ColorToken::Green,
            ActivityType::Unknown => ColorToken::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    New,
    Pending,
    Completed,
    Read,
    #[serde(other)]
    Unknown,
}

impl ActivityStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityStatus::New => "New",
            ActivityStatus::Pending => "Pending",
            ActivityStatus::Completed => "Completed",
            ActivityStatus::Read => "Read",
            ActivityStatus::Unknown => "",
        }
    }
}

impl DisplayColor for ActivityStatus {
    fn color(&self) -> ColorToken {
        match self {
            ActivityStatus::New => ColorToken::Blue,
            ActivityStatus::Pending => ColorToken::Yellow,
            ActivityStatus::Completed => ColorToken::Green,
            ActivityStatus::Read => ColorToken::Neutral,
            ActivityStatus::Unknown => ColorToken::Neutral,
        }
    }
}

/// Запись ленты "Recent Activity"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub activity_type: ActivityType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Уже отформатированная строка ("2 hours ago")
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default)]
    pub status: Option<ActivityStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fields_fall_back() {
        let json = r#"{"id":"a2","type":null,"title":null,"description":null,"timestamp":null,"status":null}"#;
        let item: ActivityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.activity_type, ActivityType::Unknown);
        assert_eq!(item.title, "");
        assert_eq!(item.timestamp, "");
        assert_eq!(item.activity_type.color(), ColorToken::Neutral);
    }

    #[test]
    fn test_type_field_is_renamed() {
        let json = r#"{"id":"a1","type":"alert","title":"Low stock","timestamp":"1 hour ago"}"#;
        let item: ActivityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.activity_type, ActivityType::Alert);
        assert_eq!(item.status, None);
        assert_eq!(item.status.color(), ColorToken::Neutral);
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let json = r#"{"id":"a2","type":"refund","status":"archived"}"#;
        let item: ActivityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.activity_type.color(), ColorToken::Neutral);
        assert_eq!(item.status, Some(ActivityStatus::Unknown));
        assert_eq!(item.activity_type.icon_name(), "circle");
    }
}
