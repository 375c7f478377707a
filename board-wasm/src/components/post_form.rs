use board_core::{BoardError, NoticeLevel, PostDraft};
use chrono::Utc;
use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub(crate) fn PostForm(state: AppState) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let title_input: NodeRef<html::Input> = NodeRef::new();

    let submit = Callback::new({
        let state = state.clone();
        move |_: ()| {
            let draft = PostDraft {
                title: title.get_untracked(),
                content: content.get_untracked(),
            };

            match state.board.try_update(|board| board.create(draft, Utc::now())) {
                Some(Ok(_)) => {
                    title.set(String::new());
                    content.set(String::new());
                    if let Some(input) = title_input.get_untracked() {
                        let _ = input.focus();
                    }
                    state.notify("Пост опубликован!", NoticeLevel::Success);
                }
                Some(Err(BoardError::Validation { .. })) => {
                    state.notify("Заполните заголовок и текст поста!", NoticeLevel::Warning);
                }
                Some(Err(err)) => state.notify(err.to_string(), NoticeLevel::Danger),
                None => {}
            }
        }
    });

    let on_submit = {
        let submit = submit.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            submit.run(());
        }
    };

    // Shift+Enter в поле текста публикует пост.
    let on_content_keydown = {
        let submit = submit.clone();
        move |ev: KeyboardEvent| {
            if ev.key() == "Enter" && ev.shift_key() {
                ev.prevent_default();
                submit.run(());
            }
        }
    };

    view! {
        <section class="card shadow-sm mb-4">
            <div class="card-body">
                <h2 class="h5 card-title">"Новый пост"</h2>
                <form on:submit=on_submit>
                    <input
                        class="form-control mb-2"
                        placeholder="Заголовок"
                        node_ref=title_input
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="form-control mb-2"
                        rows="3"
                        placeholder="Что нового?"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                        on:keydown=on_content_keydown
                    ></textarea>
                    <div class="d-flex align-items-center gap-3">
                        <button type="submit" class="btn btn-primary">"Опубликовать"</button>
                        <small class="text-muted">"Shift+Enter тоже публикует"</small>
                    </div>
                </form>
            </div>
        </section>
    }
}
