use board_core::{BoardError, BoardResult, KeyValueStore};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
/// `localStorage` браузера за трейтом [`KeyValueStore`].
///
/// Хранилище запрашивается у окна при каждом обращении. Чтение молча
/// возвращает `None`, ошибка записи уходит в консоль и наверх.
pub(crate) struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        let storage = local_storage()
            .ok_or_else(|| BoardError::Storage("localStorage is not available".to_string()))?;

        storage.set_item(key, value).map_err(|_| {
            let message = format!("failed to write '{key}' to localStorage");
            web_sys::console::error_1(&JsValue::from_str(&message));
            BoardError::Storage(message)
        })
    }
}
