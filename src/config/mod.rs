//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → CLI / environment overrides (loader.rs)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at start-up and never reloaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{parse_config, resolve_config, ConfigError, ConfigOverrides};
pub use schema::{AppConfig, ListenerConfig, ObservabilityConfig, SecurityConfig, TimeoutConfig};
pub use validation::ValidationError;
