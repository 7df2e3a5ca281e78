pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    http::ReqwestTransport,
    storage::{LocalStorage, MemoryStorage},
};
pub use crate::config::{ClientConfig, Endpoint};
pub use crate::core::{
    client::ResourceClient,
    inventory::InventoryApi,
    store::{DivisionStore, StateStore},
};
pub use crate::domain::http::{HttpMethod, HttpRequest, HttpResponse};
pub use crate::domain::model::*;
pub use crate::domain::ports::{Storage, Transport};
pub use crate::domain::resource::{Envelope, Resource, ResourceId};
pub use crate::utils::error::{InventoryError, Result};
