use serde::Serialize;

/// Success body for a hooks request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HooksEnvelope {
    pub success: bool,
    pub hooks: Vec<String>,
    pub metadata: HookMetadata,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HookMetadata {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub topic: String,
    pub style: String,
    pub target_audience: String,
    pub platform: String,
    pub language: &'static str,
    pub language_code: &'static str,
    pub generated_at: String,
    pub model: String,
    pub count: usize,
}

/// Success body for a script request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScriptEnvelope {
    pub success: bool,
    pub result: String,
    pub metadata: ScriptMetadata,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScriptMetadata {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub topic: String,
    pub style: String,
    /// Requested duration as sent, e.g. `"45 seconds"`.
    pub length: String,
    pub tone: String,
    pub language: &'static str,
    pub language_code: &'static str,
    pub cta_included: bool,
    pub generated_at: String,
    pub model: String,
    pub word_count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum GenerationEnvelope {
    Hooks(HooksEnvelope),
    Script(ScriptEnvelope),
}
