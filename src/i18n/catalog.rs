//! Localized prompt openings, system prompts and user-facing errors.
//!
//! Each locale may provide its own table. Keys a locale does not translate
//! fall back to the generic table, whose templates name the target language
//! explicitly so they read correctly for any locale.

use super::locale::Locale;

const UNKNOWN_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    HookOpening,
    ScriptOpening,
    HookSystemPrompt,
    ScriptSystemPrompt,
    MissingHookFields,
    MissingScriptFields,
    InvalidType,
    InvalidBody,
    MethodNotAllowed,
    QuotaExceeded,
    RateLimited,
    InvalidCredential,
    GenerationFailed,
}

#[derive(Clone, Copy)]
enum Entry {
    Text(&'static str),
    Template(fn(&str) -> String),
}

type Table = fn(MessageKey) -> Option<Entry>;

/// Returns the message for `key` in `locale`, falling back to the generic table.
pub fn lookup(locale: &Locale, key: MessageKey) -> String {
    render(&[table_for(locale.code), Some(generic as Table)], locale, key)
}

fn render(tables: &[Option<Table>], locale: &Locale, key: MessageKey) -> String {
    let entry = tables.iter().flatten().find_map(|table| table(key));
    match entry {
        Some(Entry::Text(text)) => text.to_string(),
        Some(Entry::Template(template)) => template(locale.display_name),
        None => UNKNOWN_MESSAGE.to_string(),
    }
}

fn table_for(code: &str) -> Option<Table> {
    match code {
        "en" => Some(english as Table),
        "ko" => Some(korean as Table),
        _ => None,
    }
}

fn english(key: MessageKey) -> Option<Entry> {
    use MessageKey::*;
    let text = match key {
        HookOpening => "Generate 5 engaging video hooks in English that meet the following conditions:",
        ScriptOpening => "Generate an engaging video script in English that meets the following conditions:",
        HookSystemPrompt => {
            "You are a professional video content creator who specializes in writing compelling hooks that instantly capture viewers' attention."
        }
        ScriptSystemPrompt => {
            "You are a professional video content creator who specializes in writing compelling scripts that capture viewers' attention."
        }
        _ => return None,
    };
    Some(Entry::Text(text))
}

fn korean(key: MessageKey) -> Option<Entry> {
    use MessageKey::*;
    let text = match key {
        HookOpening => "다음 조건에 맞는 매력적인 영상 훅(Hook) 5개를 한국어로 생성해주세요:",
        ScriptOpening => "다음 조건에 맞는 매력적인 영상 스크립트를 한국어로 생성해주세요:",
        HookSystemPrompt => {
            "당신은 전문적인 영상 콘텐츠 크리에이터입니다. 시청자의 관심을 즉시 끄는 강력한 훅을 만드는 전문가입니다. 모든 응답은 한국어로 해주세요."
        }
        ScriptSystemPrompt => {
            "당신은 전문적인 영상 콘텐츠 크리에이터입니다. 시청자의 관심을 끄는 강력한 스크립트를 만드는 전문가입니다. 모든 응답은 한국어로 해주세요."
        }
        MissingHookFields => "필수 정보가 누락되었습니다. (주제, 스타일)",
        MissingScriptFields => "필수 정보가 누락되었습니다. (텍스트, 스타일)",
        InvalidType => "지원하지 않는 콘텐츠 타입입니다. (hooks 또는 script만 가능)",
        InvalidBody => "요청 본문이 올바른 JSON 객체가 아닙니다.",
        MethodNotAllowed => "허용되지 않은 메서드입니다.",
        QuotaExceeded => "API 사용량 한도에 도달했습니다.",
        RateLimited => "요청 속도 제한에 걸렸습니다. 잠시 후 다시 시도해주세요.",
        InvalidCredential => "API 키가 올바르지 않습니다.",
        GenerationFailed => "콘텐츠 생성 중 오류가 발생했습니다.",
    };
    Some(Entry::Text(text))
}

fn generic(key: MessageKey) -> Option<Entry> {
    use MessageKey::*;
    let entry = match key {
        HookOpening => Entry::Template(|lang| {
            format!("Generate 5 engaging video hooks in {lang} that meet the following conditions:")
        }),
        ScriptOpening => Entry::Template(|lang| {
            format!("Generate an engaging video script in {lang} that meets the following conditions:")
        }),
        HookSystemPrompt => Entry::Template(|lang| {
            format!(
                "You are a professional video content creator who specializes in writing compelling hooks that instantly capture viewers' attention. Please respond entirely in {lang}."
            )
        }),
        ScriptSystemPrompt => Entry::Template(|lang| {
            format!(
                "You are a professional video content creator who specializes in writing compelling scripts that capture viewers' attention. Please respond entirely in {lang}."
            )
        }),
        MissingHookFields => Entry::Text("Missing required fields: topic, style."),
        MissingScriptFields => Entry::Text("Missing required fields: text, style."),
        InvalidType => Entry::Text("Unsupported content type. Only 'hooks' or 'script' allowed."),
        InvalidBody => Entry::Text("Request body must be a valid JSON object."),
        MethodNotAllowed => Entry::Text("Method not allowed"),
        QuotaExceeded => Entry::Text("API quota exceeded."),
        RateLimited => Entry::Text("Rate limit exceeded. Please try again later."),
        InvalidCredential => Entry::Text("Invalid API key."),
        GenerationFailed => Entry::Text("An error occurred during content generation."),
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::locale::{resolve, LOCALES};

    const ALL_KEYS: [MessageKey; 13] = [
        MessageKey::HookOpening,
        MessageKey::ScriptOpening,
        MessageKey::HookSystemPrompt,
        MessageKey::ScriptSystemPrompt,
        MessageKey::MissingHookFields,
        MessageKey::MissingScriptFields,
        MessageKey::InvalidType,
        MessageKey::InvalidBody,
        MessageKey::MethodNotAllowed,
        MessageKey::QuotaExceeded,
        MessageKey::RateLimited,
        MessageKey::InvalidCredential,
        MessageKey::GenerationFailed,
    ];

    #[test]
    fn every_locale_covers_every_key() {
        for locale in LOCALES.iter() {
            for key in ALL_KEYS {
                let message = lookup(locale, key);
                assert!(!message.is_empty());
                assert_ne!(message, UNKNOWN_MESSAGE, "{} {:?}", locale.code, key);
            }
        }
    }

    #[test]
    fn korean_uses_its_own_table() {
        let ko = resolve(Some("ko"));
        assert_eq!(lookup(ko, MessageKey::QuotaExceeded), "API 사용량 한도에 도달했습니다.");
        assert!(lookup(ko, MessageKey::HookOpening).contains("한국어"));
    }

    #[test]
    fn english_falls_back_per_key() {
        let en = resolve(Some("en"));
        assert_eq!(
            lookup(en, MessageKey::HookOpening),
            "Generate 5 engaging video hooks in English that meet the following conditions:"
        );
        assert_eq!(lookup(en, MessageKey::MissingHookFields), "Missing required fields: topic, style.");
        assert!(!lookup(en, MessageKey::HookSystemPrompt).contains("Please respond entirely"));
    }

    #[test]
    fn templates_receive_the_display_name() {
        let ja = resolve(Some("japanese"));
        assert_eq!(
            lookup(ja, MessageKey::ScriptOpening),
            "Generate an engaging video script in Japanese that meets the following conditions:"
        );
        assert!(lookup(ja, MessageKey::HookSystemPrompt).ends_with("Please respond entirely in Japanese."));
        assert_eq!(lookup(ja, MessageKey::RateLimited), "Rate limit exceeded. Please try again later.");
    }

    #[test]
    fn missing_entries_yield_placeholder() {
        fn empty(_: MessageKey) -> Option<Entry> {
            None
        }
        let fr = resolve(Some("fr"));
        assert_eq!(render(&[Some(empty as Table), None], fr, MessageKey::InvalidType), UNKNOWN_MESSAGE);
    }
}
