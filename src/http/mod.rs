//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, ambient layers: request ID, trace, timeout)
//!     → filters.rs (global → service → route filter chain)
//!     → handlers.rs (terminal handlers, static entities)
//!     → negotiate.rs (Accept-driven JSON/XML serialization)
//!     → Send to client
//! ```

pub mod filters;
pub mod handlers;
pub mod negotiate;
pub mod server;

pub use server::ApiServer;
