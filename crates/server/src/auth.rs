use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::warn;

use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
struct Claims {
    #[allow(dead_code)]
    sub: Option<String>,
    #[allow(dead_code)]
    exp: usize,
}

/// HS256 verification key for the bearer-token middleware.
#[derive(Clone)]
pub struct BearerAuth {
    key: Arc<DecodingKey>,
}

impl BearerAuth {
    pub fn new(secret: &str) -> Self {
        Self { key: Arc::new(DecodingKey::from_secret(secret.as_bytes())) }
    }

    fn verify(&self, token: &str) -> Result<(), jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<Claims>(token, &self.key, &validation).map(|_| ())
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Rejects requests without a valid `Authorization: Bearer <jwt>` header.
/// Health checks and CORS preflights pass through.
pub async fn require_bearer_token(
    State(auth): State<BearerAuth>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    if req.uri().path() == "/health" || req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path().to_string();
    let Some(token) = bearer_token(&req) else {
        warn!(path = %path, "missing or malformed Authorization header");
        return Err(JsonApiError::unauthorized("missing bearer token"));
    };

    if let Err(e) = auth.verify(token) {
        warn!(path = %path, err = %e, "token validation failed");
        return Err(JsonApiError::unauthorized("invalid or expired token"));
    }
    Ok(next.run(req).await)
}
