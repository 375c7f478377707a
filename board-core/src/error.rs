use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки доменной библиотеки `board-core`.
pub enum BoardError {
    /// Пользовательский ввод не прошёл валидацию.
    #[error("validation failed for '{field}': {message}")]
    Validation {
        /// Поле, не прошедшее валидацию.
        field: &'static str,
        /// Причина отказа.
        message: &'static str,
    },

    /// Ошибка записи в персистентное хранилище.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Результат операций `board-core`.
pub type BoardResult<T> = Result<T, BoardError>;
