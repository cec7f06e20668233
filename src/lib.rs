//! Minnie demo API server.
//!
//! A toy HTTP API exposing two static resource routes through Axum,
//! wrapped in an ordered request-filter chain with a channel-serialized
//! hit counter.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 API SERVER                    │
//!                     │                                               │
//!   Client Request    │  ┌──────────┐   ┌─────────────────────────┐  │
//!   ──────────────────┼─▶│  http    │──▶│ filter chain            │  │
//!                     │  │  server  │   │ global → service → route│  │
//!                     │  └──────────┘   └───────────┬─────────────┘  │
//!                     │                             │                 │
//!                     │                             ▼                 │
//!                     │  ┌──────────┐   ┌─────────────────────────┐  │
//!   Client Response   │  │negotiate │◀──│ handlers (static data)  │  │
//!   ◀─────────────────┼──│ JSON/XML │   └─────────────────────────┘  │
//!                     │  └──────────┘                                │
//!                     │                                               │
//!                     │  ┌─────────────────────────────────────────┐ │
//!                     │  │          Cross-Cutting Concerns          │ │
//!                     │  │  ┌────────┐ ┌─────────┐ ┌────────────┐  │ │
//!                     │  │  │ config │ │ counter │ │ observa-   │  │ │
//!                     │  │  │        │ │ worker  │ │ bility     │  │ │
//!                     │  │  └────────┘ └─────────┘ └────────────┘  │ │
//!                     │  │  ┌─────────────────────────────────┐    │ │
//!                     │  │  │    lifecycle (startup/shutdown) │    │ │
//!                     │  │  └─────────────────────────────────┘    │ │
//!                     │  └─────────────────────────────────────────┘ │
//!                     └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod counter;
pub mod error;
pub mod http;
pub mod resources;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use counter::HitCounter;
pub use error::ServerError;
pub use http::ApiServer;
pub use lifecycle::Shutdown;
