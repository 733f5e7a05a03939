//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (add hardening headers)
//!     → client
//! ```
//!
//! Request body size is capped by the dispatcher when it reads the body;
//! cross-origin access is handled in the server setup by `CorsLayer`.

pub mod headers;
