use chrono::{SecondsFormat, Utc};

use crate::{
    clients::{ChatBackend, ChatRequest},
    config::Settings,
    error::Result,
    i18n::Locale,
    models::{
        envelope::{GenerationEnvelope, HookMetadata, HooksEnvelope, ScriptEnvelope, ScriptMetadata},
        generation::{ContentKind, GenerationRequest},
    },
    normalize::{normalize_hooks, normalize_script},
    prompt::{build_prompt, system_prompt},
};

pub const TEMPERATURE: f32 = 0.8;
pub const HOOKS_MAX_TOKENS: u32 = 1000;

/// Model parameters for one request: hooks use the larger model, scripts
/// the cheaper one with a token ceiling that grows with the duration.
pub fn chat_request(request: &GenerationRequest, locale: &Locale, settings: &Settings) -> ChatRequest {
    let (model, max_tokens) = match request {
        GenerationRequest::Hooks(_) => (&settings.hooks_model, HOOKS_MAX_TOKENS),
        GenerationRequest::Script(script) => (&settings.script_model, script.tier().max_tokens()),
    };
    ChatRequest {
        model: model.clone(),
        system: system_prompt(request.kind(), locale),
        user: build_prompt(request, locale),
        max_tokens,
        temperature: TEMPERATURE,
    }
}

/// Runs one generation: a single completion call, then normalization.
pub async fn generate(
    request: GenerationRequest,
    locale: &'static Locale,
    backend: &dyn ChatBackend,
    settings: &Settings,
) -> Result<GenerationEnvelope> {
    let chat = chat_request(&request, locale, settings);
    let model = chat.model.clone();
    tracing::info!(
        kind = request.kind().as_str(),
        language = locale.code,
        model = %model,
        max_tokens = chat.max_tokens,
        "requesting completion"
    );

    let raw = backend.complete(chat).await?;
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let envelope = match request {
        GenerationRequest::Hooks(req) => {
            let hooks = normalize_hooks(&raw);
            GenerationEnvelope::Hooks(HooksEnvelope {
                success: true,
                metadata: HookMetadata {
                    kind: ContentKind::Hooks.as_str(),
                    topic: req.topic,
                    style: req.style,
                    target_audience: req.target_audience,
                    platform: req.platform,
                    language: locale.display_name,
                    language_code: locale.code,
                    generated_at,
                    model,
                    count: hooks.len(),
                },
                hooks,
            })
        }
        GenerationRequest::Script(req) => {
            let script = normalize_script(&raw);
            GenerationEnvelope::Script(ScriptEnvelope {
                success: true,
                result: script.text,
                metadata: ScriptMetadata {
                    kind: ContentKind::Script.as_str(),
                    topic: req.text,
                    style: req.style,
                    length: format!("{} seconds", req.length_secs),
                    tone: req.tone,
                    language: locale.display_name,
                    language_code: locale.code,
                    cta_included: req.call_to_action,
                    generated_at,
                    model,
                    word_count: script.word_count,
                },
            })
        }
    };
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockChatClient;
    use crate::i18n::resolve;
    use crate::models::generation::{HookRequest, ScriptRequest};

    fn script(length_secs: f64) -> GenerationRequest {
        GenerationRequest::Script(ScriptRequest {
            text: "tea".into(),
            style: "Tutorial".into(),
            length_secs,
            tone: "Calm".into(),
            call_to_action: true,
        })
    }

    #[test]
    fn script_token_ceiling_follows_length() {
        let settings = Settings::default();
        let en = resolve(None);
        assert_eq!(chat_request(&script(30.0), en, &settings).max_tokens, 600);
        assert_eq!(chat_request(&script(90.0), en, &settings).max_tokens, 1000);
        let long = chat_request(&script(300.0), en, &settings);
        assert_eq!(long.max_tokens, 1500);
        assert_eq!(long.model, "gpt-4o-mini");
        assert_eq!(long.temperature, TEMPERATURE);
    }

    #[tokio::test]
    async fn hooks_envelope_echoes_inputs() {
        let backend = MockChatClient::replying(r#"["a", "b", "c"]"#);
        let request = GenerationRequest::Hooks(HookRequest {
            topic: "tea".into(),
            style: "Bold".into(),
            target_audience: "parents".into(),
            platform: "Reels".into(),
        });
        let envelope = generate(request, resolve(Some("ja")), &backend, &Settings::default())
            .await
            .unwrap();

        let GenerationEnvelope::Hooks(hooks) = envelope else {
            panic!("expected hooks");
        };
        assert_eq!(hooks.hooks, vec!["a", "b", "c"]);
        assert_eq!(hooks.metadata.count, 3);
        assert_eq!(hooks.metadata.language, "Japanese");
        assert_eq!(hooks.metadata.language_code, "ja");
        assert_eq!(hooks.metadata.model, "gpt-4");
        assert!(hooks.metadata.generated_at.ends_with('Z'));

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].max_tokens, HOOKS_MAX_TOKENS);
        assert!(calls[0].user.contains("Please respond entirely in Japanese."));
    }

    #[tokio::test]
    async fn script_envelope_counts_words() {
        let backend = MockChatClient::replying("  Pour. Wait. Sip slowly.  ");
        let envelope = generate(script(45.0), resolve(None), &backend, &Settings::default())
            .await
            .unwrap();

        let GenerationEnvelope::Script(script) = envelope else {
            panic!("expected script");
        };
        assert_eq!(script.result, "Pour. Wait. Sip slowly.");
        assert_eq!(script.metadata.word_count, 4);
        assert_eq!(script.metadata.length, "45 seconds");
        assert!(script.metadata.cta_included);
    }
}
