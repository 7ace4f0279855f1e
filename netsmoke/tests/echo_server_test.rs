//! Integration tests: エコーサーバー
//!
//! 実リスナーに対してHTTPリクエストを送り、レスポンスの契約を検証する。

use netsmoke::config::RuntimeConfig;
use netsmoke::AppState;
use std::net::Ipv4Addr;

/// エフェメラルポートでエコーサーバーを起動し、ベースURLを返す
async fn spawn_echo_server(instance_id: u16) -> String {
    let state = AppState {
        config: RuntimeConfig {
            port: 0,
            interface: "eth0".to_string(),
            neighbor: Ipv4Addr::new(10, 1, 2, 1),
            instance_id,
        },
    };

    let app = netsmoke::api::create_app(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener should have an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    format!("http://{}", addr)
}

/// `Test <ms> <id>` 形式を検証し、(timestamp, id) を返す
fn parse_echo_body(body: &str) -> (i64, u16) {
    let fields: Vec<&str> = body.split_whitespace().collect();
    assert_eq!(fields.len(), 3, "unexpected body: {}", body);
    assert_eq!(fields[0], "Test");

    let timestamp: i64 = fields[1].parse().expect("timestamp should be an integer");
    let instance_id: u16 = fields[2].parse().expect("instance id should be an integer");
    assert!(instance_id <= 1000, "instance id out of range: {}", instance_id);

    (timestamp, instance_id)
}

#[tokio::test]
async fn test_get_anything_returns_200_with_test_body() {
    let base_url = spawn_echo_server(42).await;

    let response = reqwest::get(format!("{}/anything", base_url))
        .await
        .expect("request should succeed");

    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.expect("body should be readable");
    assert!(body.starts_with("Test "), "unexpected body: {}", body);

    let (_, instance_id) = parse_echo_body(&body);
    assert_eq!(instance_id, 42);
}

#[tokio::test]
async fn test_all_methods_and_paths_get_same_contract() {
    let base_url = spawn_echo_server(500).await;
    let client = reqwest::Client::new();

    let requests = [
        client.get(format!("{}/", base_url)),
        client.post(format!("{}/some/deep/path", base_url)).body("payload"),
        client.put(format!("{}/put?query=1", base_url)),
        client.delete(format!("{}/delete", base_url)),
        client
            .get(format!("{}/with-headers", base_url))
            .header("X-Custom", "value")
            .header("Accept", "application/json"),
    ];

    for request in requests {
        let response = request.send().await.expect("request should succeed");
        assert_eq!(response.status().as_u16(), 200);

        let body = response.text().await.expect("body should be readable");
        let (_, instance_id) = parse_echo_body(&body);
        assert_eq!(instance_id, 500);
    }
}

#[tokio::test]
async fn test_instance_id_stable_and_timestamps_non_decreasing() {
    let base_url = spawn_echo_server(7).await;
    let client = reqwest::Client::new();

    let mut last_timestamp = 0i64;
    let mut last_instance_id = None;

    for _ in 0..5 {
        let response = client
            .get(&base_url)
            .send()
            .await
            .expect("request should succeed");
        let body = response.text().await.expect("body should be readable");
        let (timestamp, instance_id) = parse_echo_body(&body);

        assert!(
            timestamp >= last_timestamp,
            "timestamp went backwards: {} < {}",
            timestamp,
            last_timestamp
        );
        if let Some(last) = last_instance_id {
            assert_eq!(instance_id, last, "instance id changed within one process");
        }

        last_timestamp = timestamp;
        last_instance_id = Some(instance_id);
    }
}

#[tokio::test]
async fn test_large_body_is_drained() {
    let base_url = spawn_echo_server(1).await;
    let client = reqwest::Client::new();

    // 4MBのボディを送っても読み切って200を返す
    let response = client
        .post(format!("{}/upload", base_url))
        .body(vec![0u8; 4 * 1024 * 1024])
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status().as_u16(), 200);
}
