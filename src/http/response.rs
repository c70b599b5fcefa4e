use serde_json::{json, Value};
use vercel_runtime::{Body, Response, StatusCode};

use super::cors::{ALLOWED_METHODS, CORS_HEADERS};
use crate::error::{AppError, ProviderFailure};
use crate::i18n::{lookup, Locale, MessageKey};

/// Status and JSON body of a finished request, before CORS headers are added.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Reply {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self { status, body: Some(body) }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    pub fn into_response(self) -> anyhow::Result<Response<Body>> {
        let mut builder = Response::builder().status(self.status);
        for (name, value) in CORS_HEADERS {
            builder = builder.header(name, value);
        }
        if self.status == StatusCode::METHOD_NOT_ALLOWED {
            builder = builder.header("Allow", ALLOWED_METHODS);
        }
        let resp = match self.body {
            Some(value) => builder
                .header("Content-Type", "application/json")
                .body(serde_json::to_string(&value)?.into())?,
            None => builder.body(Body::Empty)?,
        };
        Ok(resp)
    }
}

/// Maps an error to its status and localized `{error, details?}` body.
///
/// `details` carries the underlying error text and is only filled in when
/// `expose_details` is set.
pub fn error_response(err: &AppError, locale: &Locale, expose_details: bool) -> (StatusCode, Value) {
    let (status, key) = match err {
        AppError::Validation(msg) => return (StatusCode::BAD_REQUEST, json!({ "error": msg })),
        AppError::InvalidBody(_) => (StatusCode::BAD_REQUEST, MessageKey::InvalidBody),
        AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, MessageKey::MethodNotAllowed),
        AppError::External(provider) => match provider.failure() {
            ProviderFailure::QuotaExhausted => (StatusCode::TOO_MANY_REQUESTS, MessageKey::QuotaExceeded),
            ProviderFailure::RateLimited => (StatusCode::TOO_MANY_REQUESTS, MessageKey::RateLimited),
            ProviderFailure::InvalidCredential => (StatusCode::UNAUTHORIZED, MessageKey::InvalidCredential),
            ProviderFailure::Other => (StatusCode::INTERNAL_SERVER_ERROR, MessageKey::GenerationFailed),
        },
        AppError::Config(_) | AppError::Other(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, MessageKey::GenerationFailed)
        }
    };

    let mut body = json!({ "error": lookup(locale, key) });
    let has_details = matches!(
        err,
        AppError::InvalidBody(_) | AppError::Config(_) | AppError::Other(_)
    ) || matches!(err, AppError::External(p) if p.failure() == ProviderFailure::Other);
    if expose_details && has_details {
        body["details"] = Value::String(err.to_string());
    }
    (status, body)
}
