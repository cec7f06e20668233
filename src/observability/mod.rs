//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! filters + counter worker produce:
//!     → logging.rs (structured log events, tracing)
//!     → metrics.rs (request counter, latency histogram, hit tally)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Prometheus scrape endpoint (opt-in)
//! ```
//!
//! # Design Decisions
//! - Metric updates are cheap and always recorded through the facade;
//!   only the exporter is opt-in

pub mod logging;
pub mod metrics;
