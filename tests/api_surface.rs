//! Integration tests for the externally observable HTTP contract.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_list_resources_json() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/resources"))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "resources": [
                {"id": "42", "name": "User"},
                {"id": "3.14", "name": "Project"},
            ]
        })
    );

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_list_resources_xml() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/resources"))
        .header("Accept", "application/xml")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/xml"
    );

    let body = res.text().await.unwrap();
    assert!(body.starts_with("<ResourceList>"), "body: {body}");
    assert!(body.contains("<id>42</id><name>User</name>"));
    assert!(body.contains("<id>3.14</id><name>Project</name>"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_accept_header_order_decides_format() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/resources"))
        .header("Accept", "text/xml, application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/xml"
    );

    let res = client
        .get(server.url("/resources"))
        .header("Accept", "application/json, text/xml")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_find_resource_ignores_id() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();

    for id in ["42", "3.14", "does-not-exist", "user%20name", "a!b"] {
        let res = client
            .get(server.url(&format!("/resources/{id}")))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 200, "id: {id}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({"id": "42", "name": "User"}), "id: {id}");
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_find_resource_xml() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/resources/anything"))
        .header("Accept", "text/xml")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert_eq!(body, "<Resource><id>42</id><name>User</name></Resource>");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_no_other_routes() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();

    for path in ["/", "/health", "/resource", "/resources/1/extra"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), 404, "path: {path}");
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_port_in_use_fails_second_bind() {
    let first = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = first.local_addr().unwrap();

    let second = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(minnie::ServerError::Bind);
    let err = second.expect_err("second bind must fail");
    assert!(err.to_string().starts_with("failed to bind listener"));
}
