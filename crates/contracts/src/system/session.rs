use serde::{Deserialize, Serialize};

/// Текущий пользователь, которого показывает шапка
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl CurrentUser {
    /// "Имя Фамилия"; если обе части пустые — email
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    /// Инициалы для аватара, например "AS"
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}
