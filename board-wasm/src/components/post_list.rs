use std::time::Duration;

use board_core::view::{self, PostCard};
use board_core::{NoticeLevel, UnlikeOutcome};
use leptos::ev::MouseEvent;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;

use crate::state::AppState;

/// Длительность пульса кнопки лайка.
const PULSE_DURATION: Duration = Duration::from_millis(300);

fn confirm_delete() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    window
        .confirm_with_message("Точно удалить этот пост?")
        .unwrap_or(false)
}

fn start_pulse(pulse: RwSignal<Option<&'static str>>, class: &'static str) {
    pulse.set(Some(class));
    // Карточка могла исчезнуть до срабатывания таймера.
    set_timeout(
        move || {
            pulse.try_set(None);
        },
        PULSE_DURATION,
    );
}

#[component]
pub(crate) fn PostList(state: AppState) -> impl IntoView {
    let state_for_empty = state.clone();
    let state_for_cards = state.clone();

    let cards = move || state_for_cards.board.with(|board| view::cards(board.posts()));

    view! {
        <Show when=move || state_for_empty.board.with(|board| board.is_empty())>
            <p class="text-center text-muted">"Пока пусто. Поделитесь чем-нибудь первым!"</p>
        </Show>

        <For
            each=cards
            key=|card| card.id
            children=move |card: PostCard| {
                let card_id = card.id;
                let fallback_likes = card.likes;
                let pulse = RwSignal::new(None::<&'static str>);

                // Счётчик читается из доски реактивно: карточка не
                // перестраивается на каждый лайк, пульс доживает до конца.
                let likes = {
                    let state = state.clone();
                    move || {
                        state
                            .board
                            .with(|board| board.likes_of(card_id))
                            .unwrap_or(fallback_likes)
                    }
                };

                let on_delete = {
                    let state = state.clone();
                    move |_| {
                        if !confirm_delete() {
                            return;
                        }
                        match state.board.try_update(|board| board.delete(card_id)) {
                            Some(Ok(Some(_))) => state.notify("Пост удалён!", NoticeLevel::Danger),
                            Some(Err(err)) => state.notify(err.to_string(), NoticeLevel::Danger),
                            Some(Ok(None)) | None => {}
                        }
                    }
                };

                let on_like = {
                    let state = state.clone();
                    move |_| {
                        match state.board.try_update(|board| board.like(card_id)) {
                            Some(Ok(Some(_))) => start_pulse(pulse, "like-animation"),
                            Some(Err(err)) => state.notify(err.to_string(), NoticeLevel::Danger),
                            Some(Ok(None)) | None => {}
                        }
                    }
                };

                let on_unlike = {
                    let state = state.clone();
                    move |ev: MouseEvent| {
                        ev.prevent_default();
                        match state.board.try_update(|board| board.unlike(card_id)) {
                            Some(Ok(UnlikeOutcome::Removed(_))) => {
                                start_pulse(pulse, "unlike-animation");
                                state.notify("Лайк снят!", NoticeLevel::Info);
                            }
                            Some(Ok(UnlikeOutcome::AtZero)) => {
                                state.notify("Нет лайков, нечего снимать!", NoticeLevel::Warning);
                            }
                            Some(Err(err)) => state.notify(err.to_string(), NoticeLevel::Danger),
                            Some(Ok(UnlikeOutcome::UnknownPost)) | None => {}
                        }
                    }
                };

                let title = card.title;
                let content = card.content;
                let posted_at = card.posted_at;

                view! {
                    <article class="card mb-4 shadow-sm post-card">
                        <div class="card-body">
                            <div class="d-flex justify-content-between align-items-start mb-2">
                                <h5 class="card-title mb-0">{title}</h5>
                                <button
                                    class="btn btn-sm btn-outline-danger"
                                    title="Удалить пост"
                                    on:click=on_delete
                                >
                                    <i class="bi bi-trash"></i>
                                </button>
                            </div>
                            <small class="text-muted">{posted_at}</small>
                            <p class="card-text mt-3">{content}</p>

                            <div class="d-flex align-items-center mt-3 border-top pt-3">
                                <button
                                    class="btn btn-sm btn-outline-danger like-btn"
                                    class=("like-animation", move || {
                                        pulse.get() == Some("like-animation")
                                    })
                                    class=("unlike-animation", move || {
                                        pulse.get() == Some("unlike-animation")
                                    })
                                    title="Клик: лайк | правый клик: снять лайк"
                                    on:click=on_like
                                    on:contextmenu=on_unlike
                                >
                                    <i class="bi bi-heart-fill"></i>
                                    <span class="like-count ms-1">{likes}</span>
                                </button>
                            </div>
                        </div>
                    </article>
                }
            }
        />
    }
}
