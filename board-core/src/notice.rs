#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Степень важности уведомления.
pub enum NoticeLevel {
    /// Успешно выполненная операция.
    Success,
    /// Нейтральное сообщение, значение по умолчанию.
    #[default]
    Info,
    /// Предупреждение: операция отклонена, состояние не менялось.
    Warning,
    /// Разрушительное действие или ошибка.
    Danger,
}

impl NoticeLevel {
    /// Суффикс CSS-класса `alert-*`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Временное уведомление в стеке над страницей.
///
/// Живёт до автоскрытия или ручного закрытия; закрытие одного
/// уведомления не трогает остальные.
pub struct Notice {
    /// Идентификатор внутри стека уведомлений.
    pub id: u64,
    /// Текст сообщения.
    pub text: String,
    /// Степень важности.
    pub level: NoticeLevel,
}
