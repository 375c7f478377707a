use board_core::Theme;

use crate::storage::LocalStore;

/// Читает сохранённую тему (по умолчанию светлая) и применяет её.
pub(crate) fn init_theme(store: &LocalStore) -> Theme {
    let theme = board_core::storage::load_theme(store);
    apply_theme(theme);
    theme
}

/// Выставляет `data-bs-theme` на корневом элементе документа.
pub(crate) fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let _ = root.set_attribute("data-bs-theme", theme.as_str());
}
