use config::{Config as Cfg, Environment};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    OpenAi,
    Mock,
}

/// Process-wide settings, read from the environment once per cold start.
#[derive(Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// Older deployments name the key `OPENAI_KEY`.
    #[serde(default)]
    pub openai_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_hooks_model")]
    pub hooks_model: String,
    #[serde(default = "default_script_model")]
    pub script_model: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default)]
    pub llm_provider: LlmProvider,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub debug_prompts: bool,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1/".to_string()
}

fn default_hooks_model() -> String {
    "gpt-4".to_string()
}

fn default_script_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_app_env() -> String {
    "production".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_key: None,
            openai_base_url: default_base_url(),
            hooks_model: default_hooks_model(),
            script_model: default_script_model(),
            app_env: default_app_env(),
            llm_provider: LlmProvider::default(),
            log_level: default_log_level(),
            debug_prompts: false,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn api_key(&self) -> Option<String> {
        [&self.openai_api_key, &self.openai_key]
            .into_iter()
            .flatten()
            .map(|key| key.trim())
            .find(|key| !key.is_empty())
            .map(str::to_string)
    }

    /// Upstream error text reaches clients only in `development`.
    pub fn exposes_error_details(&self) -> bool {
        self.app_env.trim().eq_ignore_ascii_case("development")
    }
}
