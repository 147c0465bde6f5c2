use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::enums::{ColorToken, DisplayColor, Priority};
use crate::shared::list_utils::{cmp_ignore_case, Searchable, Sortable};
use crate::shared::serde_utils::null_as_default;

/// Отправитель сообщения (покупатель или партнёр)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sender {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar: String,
    /// Флаг страны (emoji)
    #[serde(default, deserialize_with = "null_as_default")]
    pub flag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Inquiry,
    Order,
    Support,
    Partnership,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MessageCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            MessageCategory::Inquiry => "Inquiry",
            MessageCategory::Order => "Order",
            MessageCategory::Support => "Support",
            MessageCategory::Partnership => "Partnership",
            MessageCategory::Unknown => "Other",
        }
    }

    pub fn all() -> Vec<MessageCategory> {
        vec![
            MessageCategory::Inquiry,
            MessageCategory::Order,
            MessageCategory::Support,
            MessageCategory::Partnership,
        ]
    }
}

impl DisplayColor for MessageCategory {
    fn color(&self) -> ColorToken {
        match self {
            MessageCategory::Inquiry => ColorToken::Blue,
            MessageCategory::Order => ColorToken::Green,
            MessageCategory::Support => ColorToken::Orange,
            MessageCategory::Partnership => ColorToken::Purple,
            MessageCategory::Unknown => ColorToken::Neutral,
        }
    }
}

/// Сообщение во входящих поставщика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender: Sender,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starred: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: MessageCategory,
}

impl Message {
    /// Пометить прочитанным. Повторный вызов ничего не меняет.
    pub fn mark_read(&mut self) {
        if !self.read {
            self.read = true;
        }
    }

    pub fn toggle_star(&mut self) {
        self.starred = !self.starred;
    }
}

impl Searchable for Message {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.sender.name.as_str(),
            self.sender.company.as_str(),
            self.subject.as_str(),
            self.preview.as_str(),
        ]
    }
}

impl Sortable for Message {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "timestamp" => self.timestamp.cmp(&other.timestamp),
            "sender" => cmp_ignore_case(&self.sender.name, &other.sender.name),
            "subject" => cmp_ignore_case(&self.subject, &other.subject),
            _ => Ordering::Equal,
        }
    }
}

/// Выбор сообщения для просмотра: помечает его прочитанным и
/// возвращает копию для панели деталей. Остальные записи не меняются.
pub fn select_message(messages: &mut [Message], id: &str) -> Option<Message> {
    let message = messages.iter_mut().find(|m| m.id == id)?;
    message.mark_read();
    Some(message.clone())
}

/// Переключает "звёздочку" у сообщения `id`.
///
/// Возвращает новое значение флага или `None`, если сообщение не найдено.
pub fn toggle_star(messages: &mut [Message], id: &str) -> Option<bool> {
    let message = messages.iter_mut().find(|m| m.id == id)?;
    message.toggle_star();
    Some(message.starred)
}

pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.read).count()
}

pub fn starred_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| m.starred).count()
}
