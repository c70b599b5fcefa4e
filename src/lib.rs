pub mod clients;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod i18n;
pub mod models;
pub mod normalize;
pub mod prompt;
pub mod services;
pub mod telemetry;

pub use error::{AppError, Result};
pub use handler::{AppState, Endpoint};
