pub mod client;
pub mod inventory;
pub mod store;
pub mod user;

pub use crate::domain::http::{HttpMethod, HttpRequest, HttpResponse};
pub use crate::domain::ports::{Storage, Transport};
pub use crate::domain::resource::{Envelope, Resource, ResourceId};
pub use crate::utils::error::Result;
