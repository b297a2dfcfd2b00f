//! End-to-end tests over a real TCP socket.

use futures::stream::{self, StreamExt};
use tokio::net::TcpListener;

use tailwhale_ui::{create_router, init_templates, AppState};

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(init_templates().unwrap()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_over_http() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/api/health")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_landing_page_over_http() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("<h1>TailWhale UI</h1>"));
    assert!(html.contains("pnpm typecheck"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_clients_get_identical_responses() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    for path in ["/api/health", "/"] {
        let url = format!("{base}{path}");
        let results: Vec<(reqwest::StatusCode, String)> = stream::iter(0..1000)
            .map(|_| {
                let client = client.clone();
                let url = url.clone();
                async move {
                    let response = client.get(&url).send().await.unwrap();
                    let status = response.status();
                    (status, response.text().await.unwrap())
                }
            })
            // Bounded so client and server sockets stay under default fd limits
            .buffer_unordered(64)
            .collect()
            .await;

        assert_eq!(results.len(), 1000);
        let (_, first) = &results[0];
        for (status, body) in &results {
            assert_eq!(*status, reqwest::StatusCode::OK);
            assert_eq!(body, first);
        }
    }
}
