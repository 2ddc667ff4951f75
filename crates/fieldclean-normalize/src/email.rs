//! Email repair and validation.

use std::sync::LazyLock;

use fieldclean_model::{DEFAULT_EMAIL_PATTERN, EmailOptions, FieldKind, Verdict};
use regex::Regex;

use crate::error::NormalizeError;
use crate::handler::FieldNormalizer;
use crate::messages;

static DEFAULT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_EMAIL_PATTERN).expect("Invalid default email regex"));

#[derive(Debug, Clone)]
pub struct EmailHandler {
    pattern: Regex,
}

impl Default for EmailHandler {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_EMAIL_REGEX.clone(),
        }
    }
}

impl EmailHandler {
    /// Build a handler validating against `pattern` (matched as written, so
    /// anchor it to validate the whole value).
    pub fn with_pattern(pattern: &str) -> Result<Self, NormalizeError> {
        let pattern = Regex::new(pattern).map_err(|source| NormalizeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    pub fn from_options(options: &EmailOptions) -> Result<Self, NormalizeError> {
        match options.pattern.as_deref() {
            Some(pattern) => Self::with_pattern(pattern),
            None => Ok(Self::default()),
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl FieldNormalizer for EmailHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::Email
    }

    fn description(&self) -> &'static str {
        "Email: whitespace removed, doubled dots collapsed"
    }

    fn normalize(&self, value: Option<&str>) -> Option<String> {
        value.map(|email| {
            let compact: String = email.chars().filter(|ch| !ch.is_whitespace()).collect();
            compact.replace("..", ".")
        })
    }

    fn validate(&self, value: Option<&str>) -> Verdict {
        match value {
            Some(email) if self.pattern.is_match(email) => Verdict::valid(),
            _ => Verdict::invalid(messages::INVALID_FORMAT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_whitespace_and_doubled_dots() {
        let handler = EmailHandler::default();
        assert_eq!(
            handler.normalize(Some("ana..silva@ gmail.com")).as_deref(),
            Some("ana.silva@gmail.com")
        );
        assert_eq!(
            handler.normalize(Some(" joao @ mail . com ")).as_deref(),
            Some("joao@mail.com")
        );
    }

    #[test]
    fn collapses_pairs_left_to_right() {
        let handler = EmailHandler::default();
        assert_eq!(handler.normalize(Some("a...b")).as_deref(), Some("a..b"));
        assert_eq!(handler.normalize(Some("a....b")).as_deref(), Some("a..b"));
    }

    #[test]
    fn default_pattern_requires_domain_suffix() {
        let handler = EmailHandler::default();
        assert!(handler.validate(Some("ana.silva@gmail.com")).valid);
        assert!(handler.validate(Some("a+b%c@sub-domain.example.org")).valid);
        assert!(!handler.validate(Some("ana@gmail")).valid);
        assert!(!handler.validate(Some("ana@gmail.c")).valid);
        assert!(!handler.validate(Some("@gmail.com")).valid);
        assert!(!handler.validate(Some("ana@gmail.com ")).valid);
        assert!(!handler.validate(Some("")).valid);
    }

    #[test]
    fn custom_pattern() {
        let handler = EmailHandler::with_pattern(r"^[a-z]+@empresa\.com\.br$").unwrap();
        assert!(handler.validate(Some("ana@empresa.com.br")).valid);
        assert!(!handler.validate(Some("ana@gmail.com")).valid);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let error = EmailHandler::with_pattern("([a-z]+").unwrap_err();
        assert!(matches!(error, NormalizeError::InvalidPattern { .. }));
    }
}
