use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::storage::KeyValueStorage;

/// Reads a persisted collection. Missing, unreadable or malformed state is
/// logged and treated as empty.
pub(crate) fn rehydrate<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Vec<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read persisted state; starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not parse persisted state; starting empty");
            Vec::new()
        }
    }
}

/// Writes the whole collection under `key`.
pub(crate) fn persist<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    items: &[T],
) -> Result<(), StoreError> {
    let json = serde_json::to_string(items).map_err(|source| StoreError::Serialize {
        context: key.to_owned(),
        source,
    })?;
    storage.set(key, &json)
}
