//! Payload generators.
//!
//! # Data Flow
//! ```text
//! handler (sites/*)
//!     → generator fn (time from Clock, samples from RandomSource)
//!     → Serialize struct
//!     → Reply::Json / ViewContext
//! ```
//!
//! # Design Decisions
//! - Generators are pure: no shared state, nothing is stored
//! - Time and randomness are parameters so tests can pin them
//! - Static generators return the same literal on every call

pub mod analytics;
pub mod chat;
pub mod clock;
pub mod notifications;
pub mod projects;
pub mod random;
pub mod reports;
pub mod system;
pub mod tasks;
pub mod team;

use thiserror::Error;

/// A generator could not produce its payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("no values to choose `{0}` from")]
    EmptyChoice(&'static str),
}
