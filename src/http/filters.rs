//! The request filter chain.
//!
//! Filters are `(request, next)` middleware functions composed at router
//! construction, so registration order is execution order: global scope
//! first, then the resource service's logging and timing filters, then
//! per-route filters, then the terminal handler. Post-processing unwinds
//! in reverse, which puts the timing filter's post-step around every
//! downstream stage.
//!
//! Every filter must call `next` exactly once; skipping it would leave the
//! request uncompleted downstream, which is a programming error rather
//! than a supported short-circuit.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::counter::HitCounter;
use crate::observability::metrics;

/// Ordered record of filter stages for a single request.
///
/// Only requests carrying one in their extensions are recorded; tests
/// insert it to observe chain ordering, production requests never do.
#[derive(Clone, Default)]
pub struct FilterTrace(Arc<Mutex<Vec<String>>>);

impl FilterTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages recorded so far, in execution order.
    pub fn stages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, stage: &str) {
        self.0.lock().unwrap().push(stage.to_string());
    }
}

fn record_stage(req: &Request<Body>, stage: &str) {
    if let Some(trace) = req.extensions().get::<FilterTrace>() {
        trace.record(stage);
    }
}

/// Global filter: wraps every route of the application.
pub async fn global_logging(req: Request<Body>, next: Next) -> Response {
    tracing::info!(method = %req.method(), uri = %req.uri(), "[global-filter] request");
    record_stage(&req, "global-logging");
    next.run(req).await
}

/// First service-level filter on the resource service.
pub async fn service_logging(req: Request<Body>, next: Next) -> Response {
    tracing::info!(method = %req.method(), uri = %req.uri(), "[service-filter] request");
    record_stage(&req, "service-logging");
    next.run(req).await
}

/// Second service-level filter: times everything downstream of it and
/// records request metrics on the unwind path.
pub async fn measure_time(req: Request<Body>, next: Next) -> Response {
    record_stage(&req, "measure-time");
    let trace = req.extensions().get::<FilterTrace>().cloned();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(req).await;

    tracing::info!(elapsed = ?start.elapsed(), "[service-filter] timing");
    metrics::record_request(&method, response.status().as_u16(), &path, start);
    if let Some(trace) = trace {
        trace.record("measure-time:done");
    }
    response
}

/// Route-level filter on `GET /resources/{user-id}` only.
pub async fn route_logging(req: Request<Body>, next: Next) -> Response {
    tracing::info!(method = %req.method(), uri = %req.uri(), "[route-filter] request");
    record_stage(&req, "route-logging");
    next.run(req).await
}

/// Route-level filter counting matched invocations on both routes.
///
/// The increment is a queue send consumed by the counter worker; the
/// logged value is the worker's last published total, so it may lag the
/// increment just sent.
pub async fn count_hits(
    State(counter): State<HitCounter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    counter.increment().await;
    tracing::info!(count = counter.value(), "[route-filter] hit counted");
    record_stage(&req, "count-hits");
    next.run(req).await
}
