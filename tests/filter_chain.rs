//! Filter chain ordering tests.
//!
//! Requests are driven through the assembled router in-process with a
//! `FilterTrace` planted in their extensions, so the observed stage order
//! is the chain's actual execution order.

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use minnie::config::ServerConfig;
use minnie::http::filters::FilterTrace;
use minnie::http::ApiServer;
use minnie::lifecycle::Shutdown;

fn traced_request(uri: &str) -> (Request<Body>, FilterTrace) {
    let trace = FilterTrace::new();
    let mut req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    req.extensions_mut().insert(trace.clone());
    (req, trace)
}

#[tokio::test]
async fn test_filter_order_on_find_route() {
    let shutdown = Shutdown::new();
    let server = ApiServer::new(&ServerConfig::default(), &shutdown);
    let app = server.router();

    let (req, trace) = traced_request("/resources/7");
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), 200);

    // Pre-processing runs global → service → route; the timing filter's
    // post-step lands after every downstream stage.
    assert_eq!(
        trace.stages(),
        vec![
            "global-logging",
            "service-logging",
            "measure-time",
            "route-logging",
            "count-hits",
            "measure-time:done",
        ]
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_filter_order_on_list_route() {
    let shutdown = Shutdown::new();
    let server = ApiServer::new(&ServerConfig::default(), &shutdown);
    let app = server.router();

    let (req, trace) = traced_request("/resources");
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), 200);

    // No route-logging filter on the list route.
    assert_eq!(
        trace.stages(),
        vec![
            "global-logging",
            "service-logging",
            "measure-time",
            "count-hits",
            "measure-time:done",
        ]
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_unmatched_route_skips_service_filters() {
    let shutdown = Shutdown::new();
    let server = ApiServer::new(&ServerConfig::default(), &shutdown);
    let app = server.router();

    let (req, trace) = traced_request("/nope");
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), 404);

    // The global filter still sees the request; the service chain does not.
    assert_eq!(trace.stages(), vec!["global-logging"]);

    shutdown.trigger();
}
