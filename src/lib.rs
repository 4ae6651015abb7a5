//! # hello-backend
//!
//! Minimal HTTP backend that answers `GET /api/hello` with a JSON greeting.
//!
//! The router is constructed explicitly by the entry point and passed to
//! [`serve`]; nothing is registered in a process-wide routing table.

pub mod config;
pub mod logging;
pub mod router;
pub mod routes;
pub mod server;

pub use config::{AppConfig, ConfigError};
pub use router::app_router;
pub use server::{serve, ServerError};
