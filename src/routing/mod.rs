//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, path)
//!     → router.rs (ordered scan of the table)
//!     → matcher.rs (pattern match, bind :params)
//!     → Return: matched Route + params, or no-match
//!
//! Table construction (at startup):
//!     (method, pattern, handler)[]
//!     → parse patterns
//!     → reject duplicates
//!     → freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod handler;
pub mod matcher;
pub mod router;

pub use handler::{Handler, HandlerError, QueryParams, Reply, RequestContext};
pub use matcher::{PathParams, PathPattern};
pub use router::{Route, RouteError, RouteMatch, RouteTable, RouteTableBuilder};
