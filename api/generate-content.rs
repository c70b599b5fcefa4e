use std::sync::Arc;

use hookgen_api::{config::Settings, handler::serve, telemetry, AppState, Endpoint};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::load()?;
    telemetry::init_tracing(&settings.log_level);
    let state = Arc::new(AppState::from_settings(settings).map_err(|e| {
        tracing::error!(error = %e, "cannot start generate-content");
        e
    })?);

    run(move |req: Request| {
        let state = Arc::clone(&state);
        async move { handler(req, &state).await }
    })
    .await
}

pub async fn handler(req: Request, state: &AppState) -> Result<Response<Body>, Error> {
    serve(Endpoint::Content, req, state).await
}
