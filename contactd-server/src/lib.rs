//! contactd-server: HTTP service for contact-form submissions
//!
//! Exposes a submission endpoint and an admin listing endpoint backed by a
//! single Postgres table, plus two static greeting routes. The binary crate
//! (contactd-cli) owns configuration, tracing init, and startup wiring.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig};
