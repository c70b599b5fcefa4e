//! Supported output languages and lookup by code or name.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Short identifier, e.g. `ko`.
    pub code: &'static str,
    /// Lowercase English name, e.g. `korean`.
    pub name: &'static str,
    /// Human-readable name used in prompts and metadata.
    pub display_name: &'static str,
}

const fn locale(code: &'static str, name: &'static str, display_name: &'static str) -> Locale {
    Locale { code, name, display_name }
}

const ENGLISH: Locale = locale("en", "english", "English");

pub static LOCALES: [Locale; 12] = [
    locale("ko", "korean", "Korean"),
    ENGLISH,
    locale("ja", "japanese", "Japanese"),
    locale("zh", "chinese", "Chinese"),
    locale("es", "spanish", "Spanish"),
    locale("fr", "french", "French"),
    locale("de", "german", "German"),
    locale("pt", "portuguese", "Portuguese"),
    locale("ru", "russian", "Russian"),
    locale("ar", "arabic", "Arabic"),
    locale("it", "italian", "Italian"),
    locale("nl", "dutch", "Dutch"),
];

pub static DEFAULT_LOCALE: &Locale = &ENGLISH;

impl Locale {
    pub fn is_default(&self) -> bool {
        self.code == DEFAULT_LOCALE.code
    }
}

/// Resolves a language code or English name to a supported locale.
///
/// Codes are matched before names. Anything unrecognized, blank or absent
/// resolves to [`DEFAULT_LOCALE`].
pub fn resolve(input: Option<&str>) -> &'static Locale {
    let Some(raw) = input else {
        return DEFAULT_LOCALE;
    };
    let wanted = raw.trim().to_lowercase();
    if wanted.is_empty() {
        return DEFAULT_LOCALE;
    }

    if let Some(found) = LOCALES.iter().find(|l| l.code == wanted) {
        return found;
    }
    if let Some(found) = LOCALES.iter().find(|l| l.name == wanted) {
        return found;
    }

    if cfg!(debug_assertions) {
        tracing::warn!(
            language = raw,
            fallback = DEFAULT_LOCALE.display_name,
            "unsupported language, using default locale"
        );
    }
    DEFAULT_LOCALE
}
