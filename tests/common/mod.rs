//! Shared utilities for integration tests.

use std::net::SocketAddr;

use minnie::config::ServerConfig;
use minnie::counter::HitCounter;
use minnie::http::ApiServer;
use minnie::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A running API server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub counter: HitCounter,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the server on an ephemeral port and hand back its address, a hit
/// counter handle, and the shutdown coordinator.
pub async fn start_server() -> TestServer {
    let config = ServerConfig::default();
    let shutdown = Shutdown::new();
    let server = ApiServer::new(&config, &shutdown);
    let counter = server.hit_counter();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        counter,
        shutdown,
    }
}
