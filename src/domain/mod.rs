// Domain layer: DTOs, the per-resource mapping, plain HTTP data and ports.
// No I/O here; adapters live under `crate::adapters`.

pub mod http;
pub mod model;
pub mod ports;
pub mod resource;
