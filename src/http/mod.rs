//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, span, body parsing)
//!     → dispatch.rs (route lookup, handler, error boundary)
//!     → response.rs (JSON or rendered view)
//!     → fallback.rs (404 / 500 by route family)
//!     → Send to client
//! ```

pub mod dispatch;
pub mod fallback;
pub mod request;
pub mod response;
pub mod server;

pub use fallback::RouteFamily;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppServer, AppState};
