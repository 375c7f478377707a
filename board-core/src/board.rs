use chrono::{DateTime, Utc};

use crate::error::BoardResult;
use crate::post::{Post, PostDraft};
use crate::storage;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Итог операции [`PostBoard::unlike`].
pub enum UnlikeOutcome {
    /// Лайк снят; внутри — новое значение счётчика.
    Removed(u32),
    /// Счётчик уже на нуле: состояние не менялось, записи не было.
    AtZero,
    /// Поста с таким id нет; операция молча игнорируется.
    UnknownPost,
}

#[derive(Debug)]
/// Доска постов: владеет коллекцией и хранилищем.
///
/// Коллекция хранится в порядке создания, старые первыми; показ
/// новых сверху — задача view-слоя. Каждая успешная мутация
/// сериализует коллекцию целиком до возврата управления, поэтому
/// память и хранилище не расходятся.
pub struct PostBoard<S: KeyValueStore> {
    posts: Vec<Post>,
    store: S,
}

impl<S: KeyValueStore> PostBoard<S> {
    /// Загружает доску из хранилища; битые данные дают пустую доску.
    pub fn load(store: S) -> Self {
        let posts = storage::load_posts(&store);
        Self { posts, store }
    }

    /// Посты в порядке создания, старые первыми.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Количество постов.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Пуста ли доска.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Текущий счётчик лайков поста, если пост существует.
    pub fn likes_of(&self, id: i64) -> Option<u32> {
        self.posts.iter().find(|post| post.id == id).map(|post| post.likes)
    }

    /// Отдаёт хранилище, поглощая доску.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Создаёт пост из черновика.
    ///
    /// Черновик валидируется; при ошибке валидации состояние не
    /// меняется и записи не происходит. Id выводится из `now`, но
    /// остаётся строго возрастающим даже при нескольких постах в
    /// одну миллисекунду.
    pub fn create(&mut self, draft: PostDraft, now: DateTime<Utc>) -> BoardResult<Post> {
        let draft = draft.validate()?;

        let post = Post {
            id: self.next_id(now),
            title: draft.title,
            content: draft.content,
            created_at: now,
            likes: 0,
        };
        self.posts.push(post.clone());
        self.persist()?;
        Ok(post)
    }

    /// Увеличивает счётчик лайков поста ровно на единицу.
    ///
    /// Незнакомый id молча игнорируется: `Ok(None)`, записи нет.
    pub fn like(&mut self, id: i64) -> BoardResult<Option<u32>> {
        let Some(position) = self.position_of(id) else {
            return Ok(None);
        };

        self.posts[position].likes += 1;
        let likes = self.posts[position].likes;
        self.persist()?;
        Ok(Some(likes))
    }

    /// Уменьшает счётчик лайков на единицу, не опускаясь ниже нуля.
    ///
    /// На нуле возвращает [`UnlikeOutcome::AtZero`] без мутации и без
    /// записи в хранилище.
    pub fn unlike(&mut self, id: i64) -> BoardResult<UnlikeOutcome> {
        let Some(position) = self.position_of(id) else {
            return Ok(UnlikeOutcome::UnknownPost);
        };
        if self.posts[position].likes == 0 {
            return Ok(UnlikeOutcome::AtZero);
        }

        self.posts[position].likes -= 1;
        let likes = self.posts[position].likes;
        self.persist()?;
        Ok(UnlikeOutcome::Removed(likes))
    }

    /// Удаляет ровно один пост и возвращает его.
    ///
    /// Незнакомый id молча игнорируется: `Ok(None)`, записи нет.
    /// Подтверждение удаления — забота фронтенда до вызова.
    pub fn delete(&mut self, id: i64) -> BoardResult<Option<Post>> {
        let Some(position) = self.position_of(id) else {
            return Ok(None);
        };

        let removed = self.posts.remove(position);
        self.persist()?;
        Ok(Some(removed))
    }

    // Идентичность поста — стабильный id; позиция в коллекции
    // вычисляется только в момент мутации.
    fn position_of(&self, id: i64) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }

    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let candidate = now.timestamp_millis();
        match self.posts.last() {
            Some(last) if candidate <= last.id => last.id + 1,
            _ => candidate,
        }
    }

    fn persist(&self) -> BoardResult<()> {
        storage::save_posts(&self.store, &self.posts)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::{PostBoard, UnlikeOutcome};
    use crate::error::BoardError;
    use crate::post::PostDraft;
    use crate::store::MemoryStore;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn board_with_posts(titles: &[&str]) -> PostBoard<MemoryStore> {
        let mut board = PostBoard::load(MemoryStore::new());
        for (index, title) in titles.iter().enumerate() {
            board
                .create(draft(title, "content"), t0() + Duration::seconds(index as i64))
                .expect("post must be created");
        }
        board
    }

    #[test]
    fn create_appends_post_and_persists() {
        let mut board = PostBoard::load(MemoryStore::new());

        let post = board
            .create(draft("  Hello  ", "  World  "), t0())
            .expect("post must be created");

        assert_eq!(board.len(), 1);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert_eq!(post.likes, 0);
        assert_eq!(board.into_store().writes(), 1);
    }

    #[test]
    fn create_with_blank_title_changes_nothing() {
        let mut board = PostBoard::load(MemoryStore::new());

        let err = board
            .create(draft("   ", "content"), t0())
            .expect_err("blank title must be rejected");

        assert!(matches!(err, BoardError::Validation { field: "title", .. }));
        assert!(board.is_empty());
        assert_eq!(board.into_store().writes(), 0);
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut board = PostBoard::load(MemoryStore::new());
        let now = t0();

        let first = board.create(draft("a", "x"), now).expect("created");
        let second = board.create(draft("b", "y"), now).expect("created");

        assert_eq!(first.id, now.timestamp_millis());
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn like_increments_by_exactly_one() {
        let mut board = board_with_posts(&["a"]);
        let id = board.posts()[0].id;

        assert_eq!(board.like(id).expect("like must persist"), Some(1));
        assert_eq!(board.like(id).expect("like must persist"), Some(2));
        assert_eq!(board.likes_of(id), Some(2));
    }

    #[test]
    fn like_unknown_id_is_silent_and_writes_nothing() {
        let mut board = board_with_posts(&["a"]);

        let result = board.like(-1).expect("unknown id is not an error");
        assert_eq!(result, None);
        // Одна запись от create, лишней от like нет.
        assert_eq!(board.into_store().writes(), 1);
    }

    #[test]
    fn unlike_after_like_restores_count() {
        let mut board = board_with_posts(&["a"]);
        let id = board.posts()[0].id;

        board.like(id).expect("like must persist");
        let outcome = board.unlike(id).expect("unlike must persist");

        assert_eq!(outcome, UnlikeOutcome::Removed(0));
        assert_eq!(board.likes_of(id), Some(0));
    }

    #[test]
    fn unlike_at_zero_is_blocked_without_write() {
        let mut board = board_with_posts(&["a"]);
        let id = board.posts()[0].id;

        let outcome = board.unlike(id).expect("floor is not an error");

        assert_eq!(outcome, UnlikeOutcome::AtZero);
        assert_eq!(board.likes_of(id), Some(0));
        assert_eq!(board.into_store().writes(), 1);
    }

    #[test]
    fn unlike_unknown_id_is_silent() {
        let mut board = board_with_posts(&["a"]);
        let outcome = board.unlike(-1).expect("unknown id is not an error");
        assert_eq!(outcome, UnlikeOutcome::UnknownPost);
    }

    #[test]
    fn delete_removes_exactly_one_post() {
        let mut board = board_with_posts(&["a", "b", "c"]);
        let middle_id = board.posts()[1].id;

        let removed = board
            .delete(middle_id)
            .expect("delete must persist")
            .expect("post must exist");

        assert_eq!(removed.title, "b");
        assert_eq!(board.len(), 2);
        let titles: Vec<&str> = board.posts().iter().map(|post| post.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn delete_unknown_id_is_silent_noop() {
        let mut board = board_with_posts(&["a"]);

        let removed = board.delete(-1).expect("unknown id is not an error");
        assert!(removed.is_none());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn reload_restores_identical_collection() {
        let mut board = board_with_posts(&["a", "b"]);
        let id = board.posts()[1].id;
        board.like(id).expect("like must persist");

        let posts_before = board.posts().to_vec();
        let reloaded = PostBoard::load(board.into_store());

        assert_eq!(reloaded.posts(), posts_before.as_slice());
    }
}
