//! Configuration management subsystem.
//!
//! # Design Decisions
//! - Config is an in-process schema with defaults; it is never loaded from
//!   disk or the environment (the demo has no configuration surface)
//! - All fields have defaults so callers can start from `ServerConfig::default()`
//! - Defaults reproduce the fixed external surface: port 8080, no TLS,
//!   metrics exposition off

pub mod schema;

pub use schema::CounterConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ServerConfig;
