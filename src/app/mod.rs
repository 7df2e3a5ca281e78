// Application layer: what the command-line front end does with the clients.

#[cfg(feature = "cli")]
pub mod commands;
pub mod render;
