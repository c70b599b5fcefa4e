//! Turns raw model output into the shapes the endpoints promise.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

pub const MAX_HOOKS: usize = 5;
/// Lines longer than this are prose, not hooks.
pub const MAX_HOOK_CHARS: usize = 300;
pub const PLACEHOLDER_HOOK: &str = "No hooks could be generated. Please try again.";

static ENUMERATION: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\s*(?:\d+[.)]|[-*•])\s*"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptText {
    pub text: String,
    pub word_count: usize,
}

/// Extracts at most [`MAX_HOOKS`] hooks from a model reply.
///
/// A reply that is a JSON array is taken element by element; anything else
/// is read line by line with list markers stripped. Never returns an empty
/// list.
pub fn normalize_hooks(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let hooks = if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<Value>>(trimmed) {
            Ok(items) => from_json(items),
            Err(err) => {
                tracing::debug!(error = %err, "hook reply is not a JSON array, reading lines");
                from_lines(trimmed)
            }
        }
    } else {
        from_lines(trimmed)
    };

    if hooks.is_empty() {
        tracing::warn!("model reply contained no usable hooks");
        return vec![PLACEHOLDER_HOOK.to_string()];
    }
    hooks
}

pub fn normalize_script(raw: &str) -> ScriptText {
    let text = raw.trim().to_string();
    let word_count = text.split_whitespace().count();
    ScriptText { text, word_count }
}

fn from_json(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .take(MAX_HOOKS)
        .map(|item| match item {
            Value::String(s) => s.trim().to_string(),
            other => other.to_string(),
        })
        .filter(|hook| !hook.is_empty())
        .collect()
}

fn from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_enumeration(line).trim().to_string())
        .filter(|hook| !hook.is_empty() && hook.chars().count() <= MAX_HOOK_CHARS)
        .take(MAX_HOOKS)
        .collect()
}

/// Removes a leading `1.`, `2)`, `-`, `*` or `•` marker.
fn strip_enumeration(line: &str) -> Cow<'_, str> {
    match ENUMERATION.as_ref() {
        Ok(re) => re.replace(line, ""),
        Err(err) => {
            tracing::error!(error = %err, "enumeration pattern failed to compile");
            Cow::Borrowed(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array_is_truncated_to_five() {
        let raw = r#" ["  one ", "two", "three", "four", "five", "six", "seven"] "#;
        assert_eq!(normalize_hooks(raw), vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn json_non_strings_are_stringified_and_empties_dropped() {
        assert_eq!(normalize_hooks(r#"["a", "", 42, "  "]"#), vec!["a", "42"]);
    }

    #[test]
    fn numbered_lines_are_cleaned() {
        let raw = "1. Foo\n2) Bar\n\n  3.   Baz  \n- Qux\n• Quux";
        assert_eq!(normalize_hooks(raw), vec!["Foo", "Bar", "Baz", "Qux", "Quux"]);
    }

    #[test]
    fn enumeration_pattern_compiles() {
        assert!(ENUMERATION.is_ok());
        assert_eq!(strip_enumeration("  12) Twelve"), "Twelve");
        assert_eq!(strip_enumeration("No marker"), "No marker");
    }

    #[test]
    fn malformed_json_falls_back_to_lines() {
        let raw = "[\"first\",\n\"second\"";
        assert_eq!(normalize_hooks(raw), vec!["[\"first\",", "\"second\""]);
    }

    #[test]
    fn overlong_lines_are_dropped() {
        let long = "x".repeat(MAX_HOOK_CHARS + 1);
        let raw = format!("{long}\nShort hook");
        assert_eq!(normalize_hooks(&raw), vec!["Short hook"]);
    }

    #[test]
    fn empty_reply_yields_placeholder() {
        assert_eq!(normalize_hooks(""), vec![PLACEHOLDER_HOOK]);
        assert_eq!(normalize_hooks("[]"), vec![PLACEHOLDER_HOOK]);
        assert_eq!(normalize_hooks("1.\n2)\n"), vec![PLACEHOLDER_HOOK]);
    }

    #[test]
    fn scripts_are_trimmed_and_counted() {
        let script = normalize_script("\n  Hook them fast.\n\nThen   deliver.  ");
        assert_eq!(script.text, "Hook them fast.\n\nThen   deliver.");
        assert_eq!(script.word_count, 5);
        assert_eq!(normalize_script("   ").word_count, 0);
    }
}
