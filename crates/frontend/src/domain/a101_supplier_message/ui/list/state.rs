use contracts::domain::a101_supplier_message::aggregate::{self, Message};
use leptos::prelude::*;

/// Локальное состояние страницы сообщений.
///
/// Прочтение и звёздочки живут только здесь и теряются при уходе со страницы.
#[derive(Clone, Debug, Default)]
pub struct MessagesState {
    pub messages: Vec<Message>,
    pub selected: Option<Message>,
    pub is_loaded: bool,
}

impl MessagesState {
    pub fn load(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.selected = None;
        self.is_loaded = true;
    }

    /// Открыть сообщение: оно становится прочитанным и выбранным
    pub fn select(&mut self, id: &str) {
        if let Some(message) = aggregate::select_message(&mut self.messages, id) {
            self.selected = Some(message);
        }
    }

    pub fn toggle_star(&mut self, id: &str) {
        let Some(starred) = aggregate::toggle_star(&mut self.messages, id) else {
            return;
        };
        // Панель деталей держит копию, синхронизируем флаг
        if let Some(selected) = self.selected.as_mut().filter(|m| m.id == id) {
            selected.starred = starred;
        }
    }

    pub fn unread_count(&self) -> usize {
        aggregate::unread_count(&self.messages)
    }

    pub fn starred_count(&self) -> usize {
        aggregate::starred_count(&self.messages)
    }
}

pub fn create_state() -> RwSignal<MessagesState> {
    RwSignal::new(MessagesState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a101_supplier_message::aggregate::{MessageCategory, Sender};
    use contracts::enums::Priority;

    fn message(id: &str, read: bool) -> Message {
        Message {
            id: id.to_string(),
            sender: Sender {
                name: format!("Sender {}", id),
                ..Default::default()
            },
            subject: String::new(),
            preview: String::new(),
            content: String::new(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            read,
            starred: false,
            priority: Priority::Medium,
            category: MessageCategory::Inquiry,
        }
    }

    fn loaded() -> MessagesState {
        let mut state = MessagesState::default();
        state.load(vec![message("1", false), message("2", false), message("3", true)]);
        state
    }

    #[test]
    fn test_select_marks_read() {
        let mut state = loaded();
        assert_eq!(state.unread_count(), 2);

        state.select("1");
        assert_eq!(state.selected.as_ref().map(|m| m.id.as_str()), Some("1"));
        assert!(state.messages[0].read);
        assert_eq!(state.unread_count(), 1);

        state.select("1");
        assert!(state.messages[0].read);
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut state = loaded();
        state.select("2");
        state.select("missing");
        assert_eq!(state.selected.as_ref().map(|m| m.id.as_str()), Some("2"));
    }

    #[test]
    fn test_toggle_star_syncs_selected() {
        let mut state = loaded();
        state.select("2");
        state.toggle_star("2");
        assert_eq!(state.starred_count(), 1);
        assert_eq!(state.selected.as_ref().map(|m| m.starred), Some(true));

        state.toggle_star("3");
        assert_eq!(state.starred_count(), 2);
        assert_eq!(state.selected.as_ref().map(|m| m.starred), Some(true));

        state.toggle_star("2");
        assert_eq!(state.selected.as_ref().map(|m| m.starred), Some(false));
        assert!(!state.messages[1].starred);
    }
}
