//! Log sanitization utilities
//!
//! Keeps response bodies (email lists, login replies) and bearer tokens
//! out of the log file in full.

/// Maximum number of characters kept by [`truncate_for_log`].
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading token characters kept by [`redact_token`].
const TOKEN_PREFIX: usize = 4;

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged. Longer strings keep the
/// first `TRUNCATE_LIMIT` characters followed by the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

/// Masks a bearer token, keeping only a short prefix.
pub fn redact_token(token: &str) -> String {
    match token.char_indices().nth(TOKEN_PREFIX) {
        None => "****".to_string(),
        Some((cut, _)) => format!("{}****", &token[..cut]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- truncate_for_log ----

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_for_log("{\"status\":true}"), "{\"status\":true}");
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "b".repeat(TRUNCATE_LIMIT + 44);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"b".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 44)));
    }

    #[test]
    fn multibyte_chars_counted_as_chars() {
        let s = "邮".repeat(TRUNCATE_LIMIT + 1);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"邮".repeat(TRUNCATE_LIMIT)));
        assert!(result.contains("... [truncated"));
    }

    // ---- redact_token ----

    #[test]
    fn long_token_keeps_prefix() {
        assert_eq!(redact_token("eyJhbGciOiJIUzI1NiJ9"), "eyJh****");
    }

    #[test]
    fn short_token_fully_masked() {
        assert_eq!(redact_token("abc"), "****");
        assert_eq!(redact_token(""), "****");
    }
}
