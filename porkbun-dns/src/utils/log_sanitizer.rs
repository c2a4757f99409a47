//! Log sanitization utilities
//!
//! Request bodies carry the API key pair, so they are redacted before they
//! reach a debug log. Response bodies are only truncated.

use std::borrow::Cow;

use serde_json::Value;

use crate::client::{API_KEY_FIELD, SECRET_KEY_FIELD};

/// Maximum number of characters kept in logged bodies.
const TRUNCATE_CHARS: usize = 256;

/// Placeholder for redacted values.
const REDACTED: &str = "***";

/// Truncate a string for logging, cutting on a character boundary.
pub fn truncate_for_log(s: &str) -> Cow<'_, str> {
    match s.char_indices().nth(TRUNCATE_CHARS) {
        None => Cow::Borrowed(s),
        Some((cut, _)) => Cow::Owned(format!(
            "{}... [truncated, total {} bytes]",
            &s[..cut],
            s.len()
        )),
    }
}

/// Replace credential fields of a JSON object body with `***`.
///
/// Bodies that are not JSON objects are returned unchanged.
pub fn redact_credentials(body: &str) -> Cow<'_, str> {
    let Ok(Value::Object(mut map)) = serde_json::from_str::<Value>(body) else {
        return Cow::Borrowed(body);
    };

    let mut touched = false;
    for field in [API_KEY_FIELD, SECRET_KEY_FIELD] {
        if let Some(value) = map.get_mut(field) {
            *value = Value::String(REDACTED.to_string());
            touched = true;
        }
    }

    if touched {
        Cow::Owned(Value::Object(map).to_string())
    } else {
        Cow::Borrowed(body)
    }
}

/// Redact, then truncate.
pub fn sanitize_body(body: &str) -> String {
    truncate_for_log(&redact_credentials(body)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        assert!(matches!(truncate_for_log("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_CHARS);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_CHARS + 100);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"a".repeat(TRUNCATE_CHARS)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_CHARS + 100)));
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "é".repeat(TRUNCATE_CHARS * 2);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"é".repeat(TRUNCATE_CHARS)));
        assert!(result.contains("... [truncated"));
    }

    #[test]
    fn credentials_are_redacted() {
        let body = r#"{"apiKey":"pk1_abc","content":"1.2.3.4","secretKey":"sk1_def"}"#;
        let redacted = redact_credentials(body);
        assert!(!redacted.contains("pk1_abc"));
        assert!(!redacted.contains("sk1_def"));
        assert!(redacted.contains("1.2.3.4"));
    }

    #[test]
    fn bodies_without_credentials_pass_through() {
        assert!(matches!(
            redact_credentials(r#"{"status":"SUCCESS"}"#),
            Cow::Borrowed(_)
        ));
        assert!(matches!(redact_credentials("not json"), Cow::Borrowed(_)));
    }

    #[test]
    fn sanitize_redacts_before_truncating() {
        let body = format!(
            r#"{{"apiKey":"pk1_abc","notes":"{}","secretKey":"sk1_def"}}"#,
            "x".repeat(TRUNCATE_CHARS)
        );
        let sanitized = sanitize_body(&body);
        assert!(!sanitized.contains("pk1_abc"));
        assert!(sanitized.contains("[truncated"));
    }
}
