//! Real-socket tests: concurrent clients, CORS headers, graceful shutdown.

use std::time::Duration;

use href_diff::{HttpServer, ServiceConfig, Shutdown, UniqueHrefsReport};
use serde_json::json;
use tokio::net::TcpListener;

mod common;
use common::export;

#[tokio::test]
async fn test_serves_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(ServiceConfig::default());
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let url = format!("http://{}/unique_hrefs", addr);

    // Concurrent requests are independent of each other
    let mut tasks = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        let url = url.clone();
        tasks.push(tokio::spawn(async move {
            let own = format!("https://instagram.com/user{i}");
            let body = json!({
                "json1": export(&[own.as_str(), "https://instagram.com/shared"]),
                "json2": export(&["https://instagram.com/shared"]),
            });
            let res = client
                .post(&url)
                .header("origin", "https://browser.example")
                .json(&body)
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), 200);
            assert_eq!(res.headers()["access-control-allow-origin"], "*");
            let report: UniqueHrefsReport = res.json().await.unwrap();
            (i, report)
        }));
    }
    for task in tasks {
        let (i, report) = task.await.unwrap();
        assert_eq!(report.unique_hrefs, vec![format!("user{i}")]);
        assert_eq!(report.count, 1);
    }

    assert_eq!(shutdown.trigger(), 1);
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}
