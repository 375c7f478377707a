use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Пост на доске.
///
/// Неизменяем после создания, за исключением счётчика лайков,
/// который меняют только операции like/unlike.
pub struct Post {
    /// Идентификатор: миллисекунды Unix-времени на момент создания.
    pub id: i64,
    /// Заголовок (непустой, без краевых пробелов).
    pub title: String,
    /// Текст поста (непустой, без краевых пробелов).
    pub content: String,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
    /// Счётчик лайков.
    pub likes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Черновик нового поста: сырой ввод формы до валидации.
pub struct PostDraft {
    /// Заголовок.
    pub title: String,
    /// Текст поста.
    pub content: String,
}

impl PostDraft {
    /// Нормализует оба поля и отклоняет пустые после trim значения.
    pub fn validate(self) -> Result<Self, BoardError> {
        Ok(Self {
            title: normalize_field("title", &self.title)?,
            content: normalize_field("content", &self.content)?,
        })
    }
}

fn normalize_field(field: &'static str, value: &str) -> Result<String, BoardError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BoardError::Validation {
            field,
            message: "must not be empty",
        });
    }
    Ok(value.to_string())
}
