//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with both resource routes
//! - Compose the filter chain in registration order
//! - Wire up ambient layers (request ID, tracing, timeout)
//! - Serve with graceful shutdown and drain the hit counter afterwards

use std::future::Future;
use std::time::Duration;

use axum::{
    http::HeaderValue,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::counter::{CounterWorker, HitCounter};
use crate::error::ServerError;
use crate::http::{filters, handlers};
use crate::lifecycle::Shutdown;

/// UUID v4 request ids, generated as early as possible on the way in.
#[derive(Clone, Copy, Default)]
struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// HTTP server for the demo API.
pub struct ApiServer {
    router: Router,
    counter: HitCounter,
    worker: CounterWorker,
}

impl ApiServer {
    /// Create the server, its filter chain, and the counter worker.
    ///
    /// The worker subscribes to `shutdown` so a triggered shutdown drains
    /// the increment queue before the process exits.
    pub fn new(config: &ServerConfig, shutdown: &Shutdown) -> Self {
        let (counter, worker) =
            HitCounter::spawn(config.counter.queue_capacity, shutdown.subscribe());
        let router = build_router(config, counter.clone());
        Self {
            router,
            counter,
            worker,
        }
    }

    /// Handle to the hit counter (increment path plus read accessor).
    pub fn hit_counter(&self) -> HitCounter {
        self.counter.clone()
    }

    /// The assembled router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then wait for the counter
    /// worker to drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr().map_err(ServerError::Bind)?;
        tracing::info!(address = %addr, "API server starting");

        serve(listener, self.router, async move {
            let _ = shutdown.recv().await;
        })
        .await?;

        // Listener is closed; release our sender and let the worker apply
        // whatever is still queued.
        drop(self.counter);
        self.worker.join().await;

        tracing::info!("API server stopped");
        Ok(())
    }
}

async fn serve(
    listener: TcpListener,
    router: Router,
    signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    axum::serve(listener, router)
        .with_graceful_shutdown(signal)
        .await
        .map_err(ServerError::Serve)
}

/// Build the Axum router with the filter chain and ambient layers.
///
/// Layers added later wrap the ones added earlier, so the list below reads
/// inside-out: the nested service routes are innermost, the request-id
/// layer outermost.
fn build_router(config: &ServerConfig, counter: HitCounter) -> Router {
    Router::new()
        .nest("/resources", resource_routes(counter))
        .layer(from_fn(filters::global_logging))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeUuidRequestId))
}

/// The resource service: two routes, service-level filters around both,
/// route-level filters per method router.
///
/// Observed filter order for `GET /resources/{user-id}`:
/// service logging → timing → route logging → hit count → handler,
/// with the global filter already applied upstream by `build_router`.
fn resource_routes(counter: HitCounter) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_resources)
                .layer(from_fn_with_state(counter.clone(), filters::count_hits)),
        )
        .route(
            "/{user_id}",
            get(handlers::find_resource)
                .layer(from_fn_with_state(counter, filters::count_hits))
                .layer(from_fn(filters::route_logging)),
        )
        .layer(from_fn(filters::measure_time))
        .layer(from_fn(filters::service_logging))
}
