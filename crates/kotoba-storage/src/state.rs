use serde::{Serialize, de::DeserializeOwned};

use crate::backend::LocalStorage;
use crate::error::StorageError;

/// Load a JSON value stored under `key`. A missing key yields `T::default()`.
pub fn load_state<T: DeserializeOwned + Default>(
    storage: &dyn LocalStorage,
    key: &str,
) -> Result<T, StorageError> {
    match storage.get_item(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(T::default()),
    }
}

/// Save a value as pretty JSON under `key`.
pub fn save_state<T: Serialize + ?Sized>(
    storage: &mut dyn LocalStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string_pretty(value)?;
    storage.set_item(key, &body)
}
