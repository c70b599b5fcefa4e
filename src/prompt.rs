//! Prompt assembly for hook lists and video scripts.

use std::fmt::Write as _;

use crate::i18n::{lookup, Locale, MessageKey};
use crate::models::generation::{ContentKind, GenerationRequest, HookRequest, ScriptRequest};

/// Builds the user prompt for `request`, localized for `locale`.
///
/// The output depends only on its arguments.
pub fn build_prompt(request: &GenerationRequest, locale: &Locale) -> String {
    match request {
        GenerationRequest::Hooks(hooks) => hook_prompt(hooks, locale),
        GenerationRequest::Script(script) => script_prompt(script, locale),
    }
}

pub fn system_prompt(kind: ContentKind, locale: &Locale) -> String {
    let key = match kind {
        ContentKind::Hooks => MessageKey::HookSystemPrompt,
        ContentKind::Script => MessageKey::ScriptSystemPrompt,
    };
    lookup(locale, key)
}

/// Renders a duration as whole seconds below one minute, whole minutes otherwise.
pub fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        format!("{} seconds", secs.round() as i64)
    } else {
        format!("{} minutes", (secs / 60.0).round() as i64)
    }
}

fn hook_prompt(req: &HookRequest, locale: &Locale) -> String {
    let mut out = lookup(locale, MessageKey::HookOpening);
    let HookRequest { topic, style, target_audience, platform } = req;

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "\n\nTopic: {topic}\n\
         Style: {style}\n\
         Target Audience: {target_audience}\n\
         Platform: {platform}\n\
         \n\
         Requirements:\n\
         1. Hook must capture attention within the first 3 seconds\n\
         2. Tone and manner suitable for {platform}\n\
         3. Relevant to the interests of {target_audience}\n\
         4. Written in a {style} style\n\
         \n\
         Each hook should be under 15 seconds. Return ONLY a JSON array of 5 strings (no numbering, no extra text)."
    );
    push_language_directive(&mut out, locale);
    out
}

fn script_prompt(req: &ScriptRequest, locale: &Locale) -> String {
    let mut out = lookup(locale, MessageKey::ScriptOpening);
    let duration = format_duration(req.length_secs);
    let (cta, cta_requirement) = if req.call_to_action {
        ("Yes", "7. Include a clear call-to-action at the end")
    } else {
        ("No", "7. Natural conclusion without forced CTA")
    };

    let _ = write!(
        out,
        "\n\nTopic/Keyword: {text}\n\
         Video Style: {style}\n\
         Script Length: {duration}\n\
         Tone: {tone}\n\
         Language: {language}\n\
         Include CTA: {cta}\n\
         \n\
         Requirements:\n\
         1. Create a compelling video script for short-form content\n\
         2. Hook viewers within the first 3 seconds\n\
         3. Maintain {tone_lower} tone throughout\n\
         4. Keep the script to approximately {duration}\n\
         5. Focus on the topic: {text}\n\
         6. Use {style_lower} video style approach\n\
         {cta_requirement}\n\
         \n\
         Please write a complete, engaging script that can be read aloud. Include natural pauses and emphasis where appropriate.",
        text = req.text,
        style = req.style,
        tone = req.tone,
        language = locale.display_name,
        tone_lower = req.tone.to_lowercase(),
        style_lower = req.style.to_lowercase(),
    );
    push_language_directive(&mut out, locale);
    out.push_str("\n\nReturn the script as plain text (no JSON formatting needed).");
    out
}

/// Only non-default locales get the explicit directive, even though their
/// opening text is already localized.
fn push_language_directive(out: &mut String, locale: &Locale) {
    if !locale.is_default() {
        let _ = write!(out, "\n\nPlease respond entirely in {}.", locale.display_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::resolve;

    fn hooks() -> GenerationRequest {
        GenerationRequest::Hooks(HookRequest {
            topic: "home espresso".into(),
            style: "Playful".into(),
            target_audience: "students".into(),
            platform: "TikTok".into(),
        })
    }

    fn script(length_secs: f64, call_to_action: bool) -> GenerationRequest {
        GenerationRequest::Script(ScriptRequest {
            text: "budget travel".into(),
            style: "Storytelling".into(),
            length_secs,
            tone: "Energetic".into(),
            call_to_action,
        })
    }

    #[test]
    fn durations_switch_to_minutes_at_sixty() {
        assert_eq!(format_duration(45.0), "45 seconds");
        assert_eq!(format_duration(59.4), "59 seconds");
        assert_eq!(format_duration(60.0), "1 minutes");
        assert_eq!(format_duration(150.0), "3 minutes");
    }

    #[test]
    fn hook_prompt_lists_fields_in_order() {
        let prompt = build_prompt(&hooks(), resolve(Some("en")));
        let order = ["Topic: home espresso", "Style: Playful", "Target Audience: students", "Platform: TikTok"];
        let positions: Vec<usize> = order.iter().map(|needle| prompt.find(needle).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.starts_with("Generate 5 engaging video hooks in English"));
        assert!(prompt.contains("2. Tone and manner suitable for TikTok"));
        assert!(prompt.ends_with("(no numbering, no extra text)."));
    }

    #[test]
    fn default_locale_gets_no_language_directive() {
        let prompt = build_prompt(&hooks(), resolve(None));
        assert!(!prompt.contains("Please respond entirely in"));
    }

    #[test]
    fn other_locales_get_the_directive() {
        let ko = build_prompt(&hooks(), resolve(Some("korean")));
        assert!(ko.starts_with("다음 조건에 맞는"));
        assert!(ko.ends_with("Please respond entirely in Korean."));

        let de = build_prompt(&script(45.0, false), resolve(Some("DE")));
        assert!(de.contains("Please respond entirely in German."));
        assert!(de.contains("Language: German"));
    }

    #[test]
    fn script_prompt_formats_requirements() {
        let prompt = build_prompt(&script(150.0, true), resolve(Some("en")));
        assert!(prompt.contains("Script Length: 3 minutes"));
        assert!(prompt.contains("4. Keep the script to approximately 3 minutes"));
        assert!(prompt.contains("3. Maintain energetic tone throughout"));
        assert!(prompt.contains("6. Use storytelling video style approach"));
        assert!(prompt.contains("Include CTA: Yes"));
        assert!(prompt.contains("7. Include a clear call-to-action at the end"));
        assert!(prompt.ends_with("Return the script as plain text (no JSON formatting needed)."));

        let without = build_prompt(&script(45.0, false), resolve(Some("en")));
        assert!(without.contains("Script Length: 45 seconds"));
        assert!(without.contains("7. Natural conclusion without forced CTA"));
    }

    #[test]
    fn prompts_are_deterministic() {
        for locale in ["en", "ja", "ko"] {
            let locale = resolve(Some(locale));
            assert_eq!(build_prompt(&hooks(), locale), build_prompt(&hooks(), locale));
            assert_eq!(build_prompt(&script(90.0, true), locale), build_prompt(&script(90.0, true), locale));
        }
    }

    #[test]
    fn system_prompts_follow_kind() {
        let ja = resolve(Some("ja"));
        assert!(system_prompt(ContentKind::Hooks, ja).contains("compelling hooks"));
        assert!(system_prompt(ContentKind::Script, ja).contains("compelling scripts"));
    }
}
