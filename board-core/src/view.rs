//! View-модели карточек: структурное описание того, что рисует
//! фронтенд, без единой строки разметки.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::post::Post;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Карточка поста глазами рендера.
///
/// Пользовательский текст передаётся как есть и должен попадать в
/// DOM только текстовыми узлами, никогда разметкой.
pub struct PostCard {
    /// Идентификатор поста для привязки действий карточки.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст поста.
    pub content: String,
    /// Дата создания в локальном времени, уже отформатированная.
    pub posted_at: String,
    /// Счётчик лайков на момент построения карточки.
    pub likes: u32,
}

impl PostCard {
    fn from_post(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            posted_at: format_created_at(post.created_at),
            likes: post.likes,
        }
    }
}

/// Строит карточки в порядке показа: новые сверху.
///
/// Коллекция при этом не переупорядочивается, обход идёт по копии.
pub fn cards(posts: &[Post]) -> Vec<PostCard> {
    posts.iter().rev().map(PostCard::from_post).collect()
}

/// Форматирует дату создания в локальном времени зрителя.
pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    format_in_zone(created_at, &Local)
}

fn format_in_zone<Tz: TimeZone>(created_at: DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    created_at
        .with_timezone(zone)
        .format("%d.%m.%Y %H:%M")
        .to_string()
}
