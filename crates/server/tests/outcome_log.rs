use std::io;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::crud::repository::mock::MockProductRepository;
use service::CrudService;
use tower::ServiceExt;

/// Collects everything the subscriber writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    /// Handler outcome events, i.e. lines carrying an `operation` field.
    fn outcome_events(&self) -> Vec<Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter_map(|l| serde_json::from_str::<Value>(l).ok())
            .filter(|v| v.get("operation").is_some())
            .collect()
    }
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<StatusCode> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    Ok(app.clone().oneshot(req.body(body)?).await?.status())
}

#[tokio::test]
async fn each_request_emits_one_outcome_event() -> anyhow::Result<()> {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let repo = Arc::new(MockProductRepository::default());
    let app = server::routes::resource_router("products", Arc::new(CrudService::new(repo)));

    let status = call(&app, Method::POST, "/products", Some(json!({"name": "Widget", "price": 9.99}))).await?;
    assert_eq!(status, StatusCode::OK);
    let missing = uuid::Uuid::new_v4();
    let status = call(&app, Method::GET, &format!("/products/{missing}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let events = captured.outcome_events();
    assert_eq!(events.len(), 2, "{events:?}");

    assert_eq!(events[0]["verb"], "POST");
    assert_eq!(events[0]["operation"], "createproduct");
    assert_eq!(events[0]["outcome"], "success");
    assert!(events[0]["timestamp"].is_string());

    assert_eq!(events[1]["verb"], "GET");
    assert_eq!(events[1]["operation"], "getproductById");
    assert_eq!(events[1]["outcome"], "error");
    assert_eq!(events[1]["status"], 404);
    assert_eq!(events[1]["level"], "WARN");
    Ok(())
}
