use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::AppConfig;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use tower::ServiceExt;

const SECRET: &str = "test-secret";

async fn build_app(enabled: bool) -> anyhow::Result<Router> {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    cfg.auth.enabled = enabled;
    cfg.auth.jwt_secret = Some(SECRET.into());
    let state = server::startup::build_state(cfg).await?;
    Ok(server::routes::build_router(state))
}

fn token(secret: &str, ttl_secs: i64) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
    let claims = json!({"sub": "tester", "iat": now, "exp": now + ttl_secs});
    Ok(encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))?)
}

async fn status_of(app: &Router, uri: &str, bearer: Option<&str>) -> anyhow::Result<StatusCode> {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(t) = bearer {
        req = req.header("authorization", format!("Bearer {t}"));
    }
    let resp = app.clone().oneshot(req.body(Body::empty())?).await?;
    Ok(resp.status())
}

#[tokio::test]
async fn auth_disabled_by_default() -> anyhow::Result<()> {
    let app = build_app(false).await?;
    assert_eq!(status_of(&app, "/products", None).await?, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn missing_token_is_unauthorized() -> anyhow::Result<()> {
    let app = build_app(true).await?;
    assert_eq!(status_of(&app, "/products", None).await?, StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .uri("/orders")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn valid_token_passes() -> anyhow::Result<()> {
    let app = build_app(true).await?;
    let t = token(SECRET, 3600)?;
    assert_eq!(status_of(&app, "/users", Some(&t)).await?, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn wrong_secret_or_expired_token_is_rejected() -> anyhow::Result<()> {
    let app = build_app(true).await?;
    let forged = token("other-secret", 3600)?;
    assert_eq!(status_of(&app, "/business", Some(&forged)).await?, StatusCode::UNAUTHORIZED);
    let expired = token(SECRET, -3600)?;
    assert_eq!(status_of(&app, "/business", Some(&expired)).await?, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn health_is_public() -> anyhow::Result<()> {
    let app = build_app(true).await?;
    assert_eq!(status_of(&app, "/health", None).await?, StatusCode::OK);
    Ok(())
}
