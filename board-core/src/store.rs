use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::BoardResult;

/// Строковое key-value хранилище (в браузере — `localStorage`).
///
/// Хранилище передаётся доске явно, поэтому тестовые экземпляры
/// не пересекаются ни друг с другом, ни с браузерным состоянием.
pub trait KeyValueStore {
    /// Возвращает значение по ключу, если оно есть и доступно.
    fn get(&self, key: &str) -> Option<String>;

    /// Записывает значение по ключу, перезаписывая прежнее.
    fn set(&self, key: &str, value: &str) -> BoardResult<()>;
}

#[derive(Debug, Clone, Default)]
/// Хранилище в памяти для тестов и host-сборок.
///
/// Считает выполненные записи: тесты проверяют по счётчику, что
/// неуспешные операции хранилище не трогают.
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Создаёт пустое хранилище.
    pub fn new() -> Self {
        Self::default()
    }

    /// Количество выполненных записей.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore};

    #[test]
    fn set_then_get_returns_value() {
        let store = MemoryStore::new();
        store.set("key", "value").expect("set must succeed");
        assert_eq!(store.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn get_missing_key_returns_none() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn set_overwrites_and_counts_writes() {
        let store = MemoryStore::new();
        store.set("key", "one").expect("set must succeed");
        store.set("key", "two").expect("set must succeed");

        assert_eq!(store.get("key").as_deref(), Some("two"));
        assert_eq!(store.writes(), 2);
    }
}
