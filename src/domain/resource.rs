//! The per-resource mapping consumed by the generic `ResourceClient`.
//!
//! A resource supplies its URL name, identifier type, optional parent
//! relation and default response envelope. Everything else about a CRUD call
//! is shared.

use crate::utils::error::{InventoryError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Shape of a successful response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Envelope {
    /// `{ "data": T }`
    #[default]
    Data,
    /// `T`
    Bare,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

impl Envelope {
    pub fn decode<T: DeserializeOwned>(self, body: &str) -> Result<T> {
        match self {
            Envelope::Data => {
                let wrapped: DataEnvelope<T> = serde_json::from_str(body)?;
                Ok(wrapped.data)
            }
            Envelope::Bare => Ok(serde_json::from_str(body)?),
        }
    }
}

impl std::str::FromStr for Envelope {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "data" => Ok(Envelope::Data),
            "bare" => Ok(Envelope::Bare),
            other => Err(InventoryError::InvalidConfigValue {
                field: "envelope".to_string(),
                value: other.to_string(),
                reason: "expected 'data' or 'bare'".to_string(),
            }),
        }
    }
}

/// An identifier that renders into the URL after the action segment.
pub trait ResourceId: Clone + Debug + Send + Sync + 'static {
    fn to_path(&self) -> String;

    /// Parses the command-line form (`7`, or `5:7` for composite keys).
    fn parse_key(raw: &str) -> Result<Self>;
}

impl ResourceId for i64 {
    fn to_path(&self) -> String {
        self.to_string()
    }

    fn parse_key(raw: &str) -> Result<Self> {
        raw.trim().parse().map_err(|_| InventoryError::InvalidConfigValue {
            field: "id".to_string(),
            value: raw.to_string(),
            reason: "expected a numeric identifier".to_string(),
        })
    }
}

/// Splits `first:second` into two numeric parts.
pub(crate) fn parse_pair(raw: &str) -> Result<(i64, i64)> {
    let invalid = || InventoryError::InvalidConfigValue {
        field: "id".to_string(),
        value: raw.to_string(),
        reason: "expected a composite identifier like 5:7".to_string(),
    };

    let (first, second) = raw.split_once(':').ok_or_else(invalid)?;
    let first = first.trim().parse().map_err(|_| invalid())?;
    let second = second.trim().parse().map_err(|_| invalid())?;
    Ok((first, second))
}

pub trait Resource: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    type Id: ResourceId;

    /// First URL segment, e.g. `batch` in `{base}/batch/create`.
    const NAME: &'static str;

    /// Parent segment for `getAll/{parent}/{parentId}`; `None` when the
    /// backend has no scoped listing for this resource.
    const PARENT: Option<&'static str> = None;

    const ENVELOPE: Envelope = Envelope::Data;

    /// Server-assigned identifier; `None` before the record is created.
    fn id(&self) -> Option<Self::Id>;
}
