use serde_json::{Map, Value};

use crate::i18n::MessageKey;

pub const DEFAULT_AUDIENCE: &str = "general audience";
pub const DEFAULT_PLATFORM: &str = "short-form video (Reels/Shorts/TikTok)";
pub const DEFAULT_TONE: &str = "Neutral";
pub const DEFAULT_SCRIPT_SECONDS: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Hooks,
    Script,
}

impl ContentKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "hooks" => Some(Self::Hooks),
            "script" => Some(Self::Script),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hooks => "hooks",
            Self::Script => "script",
        }
    }
}

/// JSON body accepted by the endpoints.
///
/// Read field by field from the decoded JSON: a field with an unusable type
/// counts as absent, so fields that do not belong to the requested kind can
/// never reject the request. Unknown fields are ignored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerationBody {
    /// `kind`, or `type` when `kind` is absent.
    pub kind: Option<String>,
    pub language: Option<String>,
    pub topic: Option<String>,
    pub style: Option<String>,
    pub target_audience: Option<String>,
    pub platform: Option<String>,
    pub text: Option<String>,
    pub length: Option<f64>,
    pub tone: Option<String>,
    /// `ctaInclusion`, or `callToAction` when absent.
    pub cta_inclusion: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HookRequest {
    pub topic: String,
    pub style: String,
    pub target_audience: String,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptRequest {
    pub text: String,
    pub style: String,
    /// Requested duration in seconds.
    pub length_secs: f64,
    pub tone: String,
    pub call_to_action: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    Hooks(HookRequest),
    Script(ScriptRequest),
}

impl GenerationRequest {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Hooks(_) => ContentKind::Hooks,
            Self::Script(_) => ContentKind::Script,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UnknownKind,
    MissingHookFields,
    MissingScriptFields,
}

impl Rejection {
    pub fn message_key(self) -> MessageKey {
        match self {
            Self::UnknownKind => MessageKey::InvalidType,
            Self::MissingHookFields => MessageKey::MissingHookFields,
            Self::MissingScriptFields => MessageKey::MissingScriptFields,
        }
    }
}

/// Script token ceilings grow with the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthTier {
    Short,
    Medium,
    Long,
}

impl LengthTier {
    pub fn max_tokens(self) -> u32 {
        match self {
            Self::Short => 600,
            Self::Medium => 1000,
            Self::Long => 1500,
        }
    }
}

impl ScriptRequest {
    pub fn tier(&self) -> LengthTier {
        if self.length_secs <= 60.0 {
            LengthTier::Short
        } else if self.length_secs <= 120.0 {
            LengthTier::Medium
        } else {
            LengthTier::Long
        }
    }
}

impl GenerationBody {
    /// Reads a decoded body. Anything but a JSON object reads as `{}`.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        Self {
            kind: text_field(fields, "kind").or_else(|| text_field(fields, "type")),
            language: text_field(fields, "language"),
            topic: text_field(fields, "topic"),
            style: text_field(fields, "style"),
            target_audience: text_field(fields, "targetAudience"),
            platform: text_field(fields, "platform"),
            text: text_field(fields, "text"),
            length: number_field(fields, "length"),
            tone: text_field(fields, "tone"),
            cta_inclusion: flag_field(fields, "ctaInclusion").or_else(|| flag_field(fields, "callToAction")),
        }
    }

    /// Validates the body into a typed request.
    ///
    /// `forced_kind` overrides the body's own tag; endpoints that only ever
    /// produce one kind pass it so clients may omit the tag.
    pub fn validate(self, forced_kind: Option<ContentKind>) -> Result<GenerationRequest, Rejection> {
        let kind = match forced_kind {
            Some(kind) => kind,
            None => self
                .kind
                .as_deref()
                .and_then(ContentKind::parse)
                .ok_or(Rejection::UnknownKind)?,
        };

        match kind {
            ContentKind::Hooks => {
                let (Some(topic), Some(style)) = (non_blank(self.topic), non_blank(self.style)) else {
                    return Err(Rejection::MissingHookFields);
                };
                Ok(GenerationRequest::Hooks(HookRequest {
                    topic,
                    style,
                    target_audience: non_blank(self.target_audience)
                        .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
                    platform: non_blank(self.platform).unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
                }))
            }
            ContentKind::Script => {
                let (Some(text), Some(style)) = (non_blank(self.text), non_blank(self.style)) else {
                    return Err(Rejection::MissingScriptFields);
                };
                Ok(GenerationRequest::Script(ScriptRequest {
                    text,
                    style,
                    length_secs: self
                        .length
                        .filter(|secs| secs.is_finite() && *secs > 0.0)
                        .unwrap_or(DEFAULT_SCRIPT_SECONDS),
                    tone: non_blank(self.tone).unwrap_or_else(|| DEFAULT_TONE.to_string()),
                    call_to_action: self.cta_inclusion.unwrap_or(false),
                }))
            }
        }
    }
}

/// Strings as sent; numbers and booleans in their JSON form.
fn text_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number_field(fields: &Map<String, Value>, name: &str) -> Option<f64> {
    match fields.get(name)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn flag_field(fields: &Map<String, Value>, name: &str) -> Option<bool> {
    match fields.get(name)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
