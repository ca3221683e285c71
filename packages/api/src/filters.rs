//! # Input filters
//!
//! The checks the gate and the handlers apply to untrusted input. They reproduce a
//! deliberately simple policy and are not a security boundary:
//!
//! | Function | Policy |
//! |----------|--------|
//! | [`sanitize_username`] | Drop every character outside `[a-zA-Z0-9]`. |
//! | [`is_valid_survey_name`] | Non-empty and only `[0-9a-z-]`. |
//! | [`contains_denylisted_tag`] | A tag opening with script, img, div, b, p, object, i, em or style, any case. |
//! | [`AllowList`] | Referer/Origin must start with one of a fixed set of prefixes. |

use std::sync::LazyLock;

use regex::Regex;

/// Prefixes accepted in `Referer` and `Origin` headers unless configured otherwise.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:",
    "http://127.0.0.1:",
    "http://r.lojikil.com:",
    "http://45.76.9.79:",
];

static DENYLISTED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*/?\s*(?:script|img|div|b|p|object|i|em|style)[\s/>]")
        .expect("denylist pattern is valid")
});

/// Strip every non-alphanumeric character from a submitted username.
pub fn sanitize_username(input: &str) -> String {
    input.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Whether `name` may be looked up as a survey id.
pub fn is_valid_survey_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase() || c == '-')
}

/// Naive anti-XSS check applied to survey bodies on creation.
pub fn contains_denylisted_tag(content: &str) -> bool {
    DENYLISTED_TAG.is_match(content)
}

/// Referer/Origin allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    prefixes: Vec<String>,
}

impl AllowList {
    pub fn new(prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn permits(&self, value: &str) -> bool {
        self.prefixes.iter().any(|prefix| value.starts_with(prefix.as_str()))
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_username() {
        assert_eq!(sanitize_username("alice"), "alice");
        assert_eq!(sanitize_username("al!ce_01"), "alce01");
        assert_eq!(sanitize_username("../../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize_username("ünï"), "n");
        assert_eq!(sanitize_username("!!!"), "");
    }

    #[test]
    fn test_survey_names() {
        assert!(is_valid_survey_name("6f1c2d9e-0b7a-4c1e-9d55-3a2b1c0d9e8f"));
        assert!(is_valid_survey_name("abc-123"));
        assert!(!is_valid_survey_name(""));
        assert!(!is_valid_survey_name("ABC"));
        assert!(!is_valid_survey_name("a.b"));
        assert!(!is_valid_survey_name("../users/alice"));
        assert!(!is_valid_survey_name("a b"));
    }

    #[test]
    fn test_denylisted_tags() {
        for payload in [
            "<script>alert(1)</script>",
            "<SCRIPT src=x>",
            "<img src=x onerror=alert(1)>",
            "< img/src=x>",
            "<div>",
            "</b>",
            "<p>hello</p>",
            "<object data=x>",
            "<i>",
            "<Em>",
            "<style>",
        ] {
            assert!(contains_denylisted_tag(payload), "{payload} should be rejected");
        }
    }

    #[test]
    fn test_allowed_markup() {
        for content in [
            "<form method=\"post\"><input name=\"answer\"><br><button>Send</button></form>",
            "<label>Age</label><select name=\"age\"><option>1</option></select>",
            "<textarea name=\"comments\"></textarea>",
            "plain text with a b and p",
        ] {
            assert!(!contains_denylisted_tag(content), "{content} should be allowed");
        }
    }

    #[test]
    fn test_allow_list() {
        let allow = AllowList::default();
        assert!(allow.permits("http://localhost:8085/survey"));
        assert!(allow.permits("http://127.0.0.1:1/"));
        assert!(allow.permits("http://r.lojikil.com:80/x"));
        assert!(allow.permits("http://45.76.9.79:8080"));
        assert!(!allow.permits("http://localhost/"));
        assert!(!allow.permits("https://localhost:8085/"));
        assert!(!allow.permits("http://evil.example:80/"));
        assert!(!allow.permits(""));
    }
}
