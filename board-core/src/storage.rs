//! Кодек состояния доски поверх key-value хранилища.
//!
//! Чтение тотально: отсутствующее или битое значение даёт значение
//! по умолчанию, страница продолжает работать с пустой доской.

use crate::error::{BoardError, BoardResult};
use crate::post::Post;
use crate::store::KeyValueStore;
use crate::theme::Theme;

/// Ключ, под которым хранится коллекция постов.
pub const POSTS_KEY: &str = "posts-data";

/// Ключ, под которым хранится выбранная тема.
pub const THEME_KEY: &str = "theme-preference";

fn parse_posts(raw: &str) -> Option<Vec<Post>> {
    serde_json::from_str(raw).ok()
}

/// Загружает коллекцию постов; отсутствие или битый JSON дают пустую.
pub fn load_posts(store: &impl KeyValueStore) -> Vec<Post> {
    store
        .get(POSTS_KEY)
        .and_then(|raw| parse_posts(&raw))
        .unwrap_or_default()
}

/// Сохраняет коллекцию целиком, перезаписывая прежнее значение.
pub fn save_posts(store: &impl KeyValueStore, posts: &[Post]) -> BoardResult<()> {
    let raw = serde_json::to_string(posts)
        .map_err(|err| BoardError::Storage(format!("failed to serialize posts: {err}")))?;
    store.set(POSTS_KEY, &raw)
}

/// Загружает тему; отсутствие или незнакомое значение дают [`Theme::Light`].
pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    store
        .get(THEME_KEY)
        .map(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Сохраняет тему.
pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> BoardResult<()> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{load_posts, load_theme, parse_posts, save_posts, save_theme};
    use crate::post::Post;
    use crate::store::{KeyValueStore, MemoryStore};
    use crate::theme::Theme;

    fn sample_post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: "content".to_string(),
            created_at: Utc
                .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                .single()
                .expect("valid timestamp"),
            likes: 0,
        }
    }

    #[test]
    fn load_posts_from_empty_store_is_empty() {
        let store = MemoryStore::new();
        assert!(load_posts(&store).is_empty());
    }

    #[test]
    fn load_posts_ignores_corrupt_json() {
        let store = MemoryStore::new();
        store
            .set(super::POSTS_KEY, "{not-json}")
            .expect("set must succeed");
        assert!(load_posts(&store).is_empty());
    }

    #[test]
    fn posts_round_trip_preserves_order_and_fields() {
        let store = MemoryStore::new();
        let posts = vec![sample_post(1, "first"), sample_post(2, "second")];

        save_posts(&store, &posts).expect("save must succeed");
        let loaded = load_posts(&store);
        assert_eq!(loaded, posts);
    }

    #[test]
    fn parse_posts_returns_none_for_invalid_json() {
        assert!(parse_posts("[{\"id\":").is_none());
    }

    #[test]
    fn theme_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);

        save_theme(&store, Theme::Dark).expect("save must succeed");
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn load_theme_falls_back_to_light_on_garbage() {
        let store = MemoryStore::new();
        store
            .set(super::THEME_KEY, "midnight")
            .expect("set must succeed");
        assert_eq!(load_theme(&store), Theme::Light);
    }
}
