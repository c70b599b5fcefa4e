//! Request handling shared by every endpoint.
//!
//! A request moves through method check, body parsing, locale resolution and
//! validation before the single completion call. Every path ends in exactly
//! one [`Reply`].

use std::sync::Arc;

use serde_json::{json, Value};
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::{
    clients::{self, ChatBackend},
    config::Settings,
    error::{AppError, ProviderFailure, Result},
    http::response::{error_response, Reply},
    i18n::{lookup, resolve, Locale, MessageKey, DEFAULT_LOCALE},
    models::generation::{ContentKind, GenerationBody},
    services::generation::generate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `api/generate-content`: the body's `kind` picks hooks or script.
    Content,
    /// `api/hook-generator`: always hooks, no `kind` needed.
    HookGenerator,
}

impl Endpoint {
    fn forced_kind(self) -> Option<ContentKind> {
        match self {
            Self::Content => None,
            Self::HookGenerator => Some(ContentKind::Hooks),
        }
    }
}

/// State built once per cold start and shared by every invocation.
pub struct AppState {
    pub settings: Settings,
    pub backend: Arc<dyn ChatBackend>,
}

impl AppState {
    pub fn new(settings: Settings, backend: Arc<dyn ChatBackend>) -> Self {
        Self { settings, backend }
    }

    pub fn from_settings(settings: Settings) -> Result<Self> {
        let backend = clients::from_settings(&settings)?;
        Ok(Self::new(settings, backend))
    }
}

/// Runtime entry point used by the `api/` binaries.
pub async fn serve(endpoint: Endpoint, req: Request, state: &AppState) -> std::result::Result<Response<Body>, Error> {
    let reply = handle(endpoint, req.method().as_str(), req.body(), state).await;
    Ok(reply.into_response()?)
}

pub async fn handle(endpoint: Endpoint, method: &str, body: &[u8], state: &AppState) -> Reply {
    match method {
        "OPTIONS" => return Reply::empty(StatusCode::OK),
        "POST" => {}
        other => {
            tracing::info!(method = other, "method not allowed");
            return Reply::json(
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": lookup(DEFAULT_LOCALE, MessageKey::MethodNotAllowed) }),
            );
        }
    }

    let parsed = match parse_body(body) {
        Ok(parsed) => parsed,
        Err(err) => return failure(&err, DEFAULT_LOCALE, state),
    };
    let locale = resolve(parsed.language.as_deref());

    match process(endpoint, parsed, locale, state).await {
        Ok(value) => Reply::json(StatusCode::OK, value),
        Err(err) => failure(&err, locale, state),
    }
}

async fn process(endpoint: Endpoint, body: GenerationBody, locale: &'static Locale, state: &AppState) -> Result<Value> {
    let request = body
        .validate(endpoint.forced_kind())
        .map_err(|rejection| AppError::Validation(lookup(locale, rejection.message_key())))?;

    let envelope = generate(request, locale, state.backend.as_ref(), &state.settings).await?;
    serde_json::to_value(envelope).map_err(|e| AppError::Other(e.into()))
}

/// An empty body reads as `{}`. Only undecodable JSON is an error; field
/// types are checked later, per kind.
fn parse_body(body: &[u8]) -> Result<GenerationBody> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerationBody::default());
    }
    let value: Value = serde_json::from_slice(body)?;
    Ok(GenerationBody::from_value(&value))
}

fn failure(err: &AppError, locale: &Locale, state: &AppState) -> Reply {
    match err {
        AppError::Validation(_) | AppError::InvalidBody(_) => {
            tracing::info!(error = %err, language = locale.code, "request rejected");
        }
        AppError::External(provider) if provider.failure() != ProviderFailure::Other => {
            tracing::warn!(code = ?provider.code, error = %err, "provider refused the request");
        }
        _ => tracing::error!(error = %err, "content generation failed"),
    }
    let (status, body) = error_response(err, locale, state.settings.exposes_error_details());
    Reply::json(status, body)
}
