//! End-to-end analysis tests against a mock flow service.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{json, Value};
use trueeye::analysis::AnalyzeResponse;
use trueeye::config::{AppConfig, Provider};

mod common;

const ARTICLE: &str = "https://example.com/article";

async fn analyze(addr: std::net::SocketAddr, url: &str) -> (StatusCode, Value) {
    let res = common::client()
        .post(format!("http://{}/analyze", addr))
        .json(&json!({ "url": url }))
        .send()
        .await
        .expect("service unreachable");
    let status = res.status();
    let body = res.json::<Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_local_mode_stub() {
    let mut config = AppConfig::default();
    config.provider.mode = Provider::Local;
    let (addr, shutdown) = common::start_server(config).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::OK);

    let resp: AnalyzeResponse = serde_json::from_value(body).unwrap();
    assert!(resp.success);
    assert!(resp.result.contains(ARTICLE));

    shutdown.trigger();
}

#[tokio::test]
async fn test_remote_without_flow_url_is_503() {
    let (addr, shutdown) = common::start_server(AppConfig::default()).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["detail"].as_str().unwrap().contains("FLOW_API_URL"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_result_field_and_request_shape() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let flow = common::start_programmable_backend(move |request| {
        recorder.lock().unwrap().push(request);
        async move { (200, json!({"result": "X", "text": "not this"}).to_string()) }
    })
    .await;
    let (addr, shutdown) = common::start_server(common::remote_config(flow)).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "X", "success": true, "error": null}));

    let requests = seen.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.head.starts_with("POST /api/v1/run/flow-id"));
    assert_eq!(
        request.json(),
        json!({
            "input_value": ARTICLE,
            "output_type": "chat",
            "input_type": "chat",
            "tweaks": {}
        })
    );
    assert_eq!(request.header("content-type").as_deref(), Some("application/json"));
    assert!(request.header("user-agent").unwrap().starts_with("TrueEye/"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_flow_outputs_shape() {
    let flow = common::start_json_backend(json!({
        "outputs": [{"outputs": [{"message": {"text": "Y"}}]}]
    }))
    .await;
    let (addr, shutdown) = common::start_server(common::remote_config(flow)).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Y");
    assert_eq!(body["success"], true);

    shutdown.trigger();
}

#[tokio::test]
async fn test_generic_extraction_fallback() {
    let flow = common::start_json_backend(json!({
        "session_id": "s-1",
        "data": [{"content": "found deep"}]
    }))
    .await;
    let (addr, shutdown) = common::start_server(common::remote_config(flow)).await;

    let (_, body) = analyze(addr, ARTICLE).await;
    assert_eq!(body["result"], "found deep");
    assert_eq!(body["success"], true);

    shutdown.trigger();
}

#[tokio::test]
async fn test_unextractable_payload_is_soft_failure() {
    let flow = common::start_json_backend(json!({"a": 1, "b": null})).await;
    let (addr, shutdown) = common::start_server(common::remote_config(flow)).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["error"], Value::Null);
    let result = body["result"].as_str().unwrap();
    assert!(result.contains("no result could be extracted"));
    assert!(result.contains(r#"{"a":1,"b":null}"#));

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_timeout() {
    let flow = common::start_programmable_backend(|_| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        (200, json!({"result": "too late"}).to_string())
    })
    .await;
    let mut config = common::remote_config(flow);
    config.provider.timeout_secs = 1;
    let (addr, shutdown) = common::start_server(config).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "timeout");

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_http_error() {
    let flow = common::start_programmable_backend(|_| async {
        (500, json!({"detail": "flow crashed"}).to_string())
    })
    .await;
    let (addr, shutdown) = common::start_server(common::remote_config(flow)).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "http_500");

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_non_json() {
    let flow = common::start_programmable_backend(|_| async {
        (200, "<html>gateway login</html>".to_string())
    })
    .await;
    let (addr, shutdown) = common::start_server(common::remote_config(flow)).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "invalid_response");

    shutdown.trigger();
}

#[tokio::test]
async fn test_deeply_nested_payload_is_extracted() {
    let flow = common::start_programmable_backend(|_| async {
        let depth = 150;
        (200, format!("{}\"deep\"{}", "[".repeat(depth), "]".repeat(depth)))
    })
    .await;
    let (addr, shutdown) = common::start_server(common::remote_config(flow)).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "deep", "success": true, "error": null}));

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_connection_refused() {
    let flow = common::closed_port().await;
    let (addr, shutdown) = common::start_server(common::remote_config(flow)).await;

    let (status, body) = analyze(addr, ARTICLE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "connection");

    shutdown.trigger();
}

#[tokio::test]
async fn test_invalid_url_rejected() {
    let mut config = AppConfig::default();
    config.provider.mode = Provider::Local;
    let (addr, shutdown) = common::start_server(config).await;

    let (status, _) = analyze(addr, "definitely not a url").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = analyze(addr, "ftp://example.com/file").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("http or https"));

    shutdown.trigger();
}
