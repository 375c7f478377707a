use std::time::Duration;

use board_core::{Notice, NoticeLevel, PostBoard, Theme};
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;

use crate::storage::LocalStore;

/// Сколько живёт уведомление до автоскрытия.
const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) board: RwSignal<PostBoard<LocalStore>>,
    pub(crate) theme: RwSignal<Theme>,
    pub(crate) notices: RwSignal<Vec<Notice>>,
    next_notice_id: StoredValue<u64>,
}

impl AppState {
    pub(crate) fn new(board: PostBoard<LocalStore>, theme: Theme) -> Self {
        Self {
            board: RwSignal::new(board),
            theme: RwSignal::new(theme),
            notices: RwSignal::new(Vec::new()),
            next_notice_id: StoredValue::new(0),
        }
    }

    /// Показывает уведомление и планирует его автоскрытие.
    pub(crate) fn notify(&self, text: impl Into<String>, level: NoticeLevel) {
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id + 1);

        self.notices.update(|notices| {
            notices.push(Notice {
                id,
                text: text.into(),
                level,
            });
        });

        let notices = self.notices;
        set_timeout(move || dismiss_from(notices, id), NOTICE_TTL);
    }

    /// Убирает одно уведомление, не трогая остальные.
    ///
    /// Сработавший после ручного закрытия таймер попадает сюда же
    /// и ничего не находит.
    pub(crate) fn dismiss(&self, id: u64) {
        dismiss_from(self.notices, id);
    }
}

fn dismiss_from(notices: RwSignal<Vec<Notice>>, id: u64) {
    notices.try_update(|notices| notices.retain(|notice| notice.id != id));
}
