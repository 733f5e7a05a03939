//! Mock-data HTTP facade.
//!
//! Serves a fixed route table of JSON mock endpoints and server-rendered
//! pages. Nothing is stored; every response is built from literals, the
//! clock and a random source.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod payloads;
pub mod routing;
pub mod security;
pub mod sites;
pub mod views;

pub use config::AppConfig;
pub use error::AppError;
pub use http::AppServer;
pub use lifecycle::Shutdown;
pub use sites::Site;
