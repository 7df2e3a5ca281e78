//! A single record held in memory and mirrored to durable storage.
//!
//! Loaded lazily on first access. Writes replace the stored copy wholesale:
//! last write wins, there is no versioning or migration.

use crate::domain::model::DivisionState;
use crate::domain::ports::Storage;
use crate::utils::error::{InventoryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;

pub struct StateStore<T, S> {
    storage: S,
    key: String,
    state: Mutex<Option<T>>,
}

pub type DivisionStore<S> = StateStore<DivisionState, S>;

impl<T, S> StateStore<T, S>
where
    T: Default + Clone + Serialize + DeserializeOwned + Send,
    S: Storage,
{
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            state: Mutex::new(None),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn read(&self) -> Result<T> {
        let mut guard = self.state.lock().await;
        if let Some(state) = guard.as_ref() {
            return Ok(state.clone());
        }

        let loaded = self.load().await?;
        *guard = Some(loaded.clone());
        Ok(loaded)
    }

    /// Overwrites top-level fields present in `partial` (JSON nulls are
    /// skipped), persists, and returns the merged record. Nested objects are
    /// replaced, not merged. A key that is not a field of `T` fails the whole
    /// merge and nothing is written.
    pub async fn merge<P: Serialize>(&self, partial: &P) -> Result<T> {
        let mut guard = self.state.lock().await;
        let current = match guard.take() {
            Some(state) => state,
            None => self.load().await?,
        };

        let merged = match shallow_merge(&current, partial) {
            Ok(merged) => merged,
            Err(e) => {
                *guard = Some(current);
                return Err(e);
            }
        };

        self.persist(&merged).await?;
        tracing::debug!("💾 state '{}' updated", self.key);
        *guard = Some(merged.clone());
        Ok(merged)
    }

    pub async fn clear(&self) -> Result<()> {
        let mut guard = self.state.lock().await;
        self.storage.remove_file(&self.key).await?;
        *guard = Some(T::default());
        tracing::debug!("💾 state '{}' cleared", self.key);
        Ok(())
    }

    async fn load(&self) -> Result<T> {
        match self.storage.read_file(&self.key).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(InventoryError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("💾 no stored copy of '{}', starting empty", self.key);
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn persist(&self, state: &T) -> Result<()> {
        let data = serde_json::to_vec_pretty(state)?;
        self.storage.write_file(&self.key, &data).await
    }
}

fn shallow_merge<T, P>(current: &T, partial: &P) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    P: Serialize,
{
    let mut base = match serde_json::to_value(current)? {
        Value::Object(map) => map,
        _ => {
            return Err(InventoryError::precondition(
                "stored state is not a JSON object",
            ))
        }
    };

    let updates = match serde_json::to_value(partial)? {
        Value::Object(map) => map,
        _ => {
            return Err(InventoryError::precondition(
                "partial update must be a JSON object",
            ))
        }
    };

    // 只接受既有欄位，拼錯的鍵不能被默默丟掉
    if let Some(unknown) = updates.keys().find(|key| !base.contains_key(*key)) {
        return Err(InventoryError::InvalidConfigValue {
            field: unknown.clone(),
            value: updates[unknown].to_string(),
            reason: "not a field of the stored state".to_string(),
        });
    }

    for (key, value) in updates {
        if !value.is_null() {
            base.insert(key, value);
        }
    }

    Ok(serde_json::from_value(Value::Object(base))?)
}
