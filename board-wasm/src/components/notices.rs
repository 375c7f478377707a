use board_core::Notice;
use leptos::prelude::*;

use crate::state::AppState;

/// Стек уведомлений поверх страницы; каждое закрывается отдельно.
#[component]
pub(crate) fn Notices(state: AppState) -> impl IntoView {
    let state_for_each = state.clone();
    let notices = move || state_for_each.notices.get();

    view! {
        <div class="notice-stack position-fixed top-0 start-50 translate-middle-x mt-3">
            <For
                each=notices
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let state = state.clone();
                    let notice_id = notice.id;
                    let alert_class = format!(
                        "alert alert-{} alert-dismissible fade show shadow-sm",
                        notice.level.as_str()
                    );

                    view! {
                        <div class=alert_class role="alert">
                            {notice.text}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Закрыть"
                                on:click=move |_| state.dismiss(notice_id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
