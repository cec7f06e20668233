//! Process lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Build config → spawn counter worker → bind listener → serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT → stop accepting → drain hit counter → exit
//! ```
//!
//! # Design Decisions
//! - Startup is ordered, not concurrent: the counter worker exists before
//!   the first request can reach its filter
//! - Shutdown is signal-driven and drains in-flight work before exit

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
