//! Доменная библиотека клиентской доски постов.
//!
//! Содержит всё состояние и операции доски без привязки к браузеру:
//! - модель поста и валидацию черновика;
//! - коллекцию с операциями create/like/unlike/delete и персистентностью;
//! - тему оформления и кодек key-value хранилища;
//! - view-модели карточек и модель уведомлений.
//!
//! Браузерный фронтенд (`board-wasm`) подключает `localStorage`
//! через трейт [`KeyValueStore`]; тесты используют [`MemoryStore`].
#![warn(missing_docs)]

mod board;
mod error;
mod notice;
mod post;
pub mod storage;
mod store;
mod theme;
pub mod view;

pub use board::{PostBoard, UnlikeOutcome};
pub use error::{BoardError, BoardResult};
pub use notice::{Notice, NoticeLevel};
pub use post::{Post, PostDraft};
pub use store::{KeyValueStore, MemoryStore};
pub use theme::Theme;
