use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Цветовая тема страницы.
pub enum Theme {
    /// Светлая тема, значение по умолчанию.
    #[default]
    Light,
    /// Тёмная тема.
    Dark,
}

impl Theme {
    /// Разбирает сохранённое значение; всё незнакомое безопасно
    /// трактуется как светлая тема.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Строковое значение для хранилища и атрибута `data-bs-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Противоположная тема.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Тёмная ли тема.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
