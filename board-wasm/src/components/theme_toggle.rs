use board_core::NoticeLevel;
use leptos::prelude::*;

use crate::state::AppState;
use crate::storage::LocalStore;
use crate::theme::apply_theme;

/// Кнопка темы: луна в светлой теме, солнце в тёмной.
#[component]
pub(crate) fn ThemeToggle(state: AppState) -> impl IntoView {
    let on_toggle = {
        let state = state.clone();
        move |_| {
            let next = state.theme.get_untracked().toggled();
            apply_theme(next);
            if let Err(err) = board_core::storage::save_theme(&LocalStore, next) {
                state.notify(err.to_string(), NoticeLevel::Danger);
            }
            state.theme.set(next);
        }
    };

    let state_for_icon = state.clone();
    let state_for_warning = state.clone();
    let state_for_light = state.clone();

    view! {
        <button
            class="btn btn-sm"
            class=("btn-outline-warning", move || state_for_warning.theme.get().is_dark())
            class=("btn-outline-light", move || !state_for_light.theme.get().is_dark())
            title="Переключить тему"
            on:click=on_toggle
        >
            <i class=move || {
                if state_for_icon.theme.get().is_dark() {
                    "bi bi-sun-fill"
                } else {
                    "bi bi-moon-fill"
                }
            }></i>
        </button>
    }
}
