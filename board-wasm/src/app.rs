use board_core::PostBoard;
use leptos::prelude::*;

use crate::components::notices::Notices;
use crate::components::post_form::PostForm;
use crate::components::post_list::PostList;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::AppState;
use crate::storage::LocalStore;
use crate::theme;

#[component]
pub(crate) fn App() -> impl IntoView {
    let store = LocalStore;
    let initial_theme = theme::init_theme(&store);
    let state = AppState::new(PostBoard::load(store), initial_theme);

    view! {
        <nav class="navbar bg-body-tertiary shadow-sm">
            <div class="container">
                <span class="navbar-brand mb-0 h1">"Доска постов"</span>
                <ThemeToggle state=state.clone() />
            </div>
        </nav>

        <main class="container py-4">
            <PostForm state=state.clone() />
            <PostList state=state.clone() />
        </main>

        <Notices state=state />
    }
}
