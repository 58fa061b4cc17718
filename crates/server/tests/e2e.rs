use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    let state = server::startup::build_state(cfg).await?;
    let app = server::routes::build_router(state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(TestApp { base_url: format!("http://{}", addr) })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_product_crud_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/products", app.base_url))
        .json(&json!({"name": "Widget", "price": 9.99}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["_id"].as_str().unwrap_or_default().to_string();
    assert!(!id.is_empty());

    let res = client.get(format!("{}/products", app.base_url)).send().await?;
    let listed: Value = res.json().await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let res = client.delete(format!("{}/products/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.bytes().await?.is_empty());

    let res = client.get(format!("{}/products/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert!(body["message"].is_string());
    Ok(())
}
