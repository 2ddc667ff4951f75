//! Field handler trait and the closed set of handlers.
//!
//! Each field kind pairs exactly one normalizer with one validator. The
//! [`FieldNormalizer`] trait is the common interface; [`FieldHandler`] is the
//! tagged union the pipeline dispatches on.
//!
//! # Example
//!
//! ```
//! use fieldclean_model::{CleanConfig, FieldKind};
//! use fieldclean_normalize::{FieldHandler, FieldNormalizer};
//!
//! let handler = FieldHandler::for_kind(FieldKind::Phone, &CleanConfig::default()).unwrap();
//! let (normalized, verdict) = handler.apply(Some("(11) 9 8888-7777"));
//! assert_eq!(normalized.as_deref(), Some("11988887777"));
//! assert!(verdict.valid);
//! ```

use fieldclean_model::{CleanConfig, FieldKind, Verdict};

use crate::email::EmailHandler;
use crate::error::NormalizeError;
use crate::name::NameHandler;
use crate::phone::PhoneHandler;
use crate::text::TextHandler;

/// Normalize-then-validate pair for one field kind.
pub trait FieldNormalizer: Send + Sync {
    /// Returns the field kind this handler cleans.
    fn kind(&self) -> FieldKind;

    /// Returns a human-readable description of the normalization rule.
    fn description(&self) -> &'static str {
        "Field handler"
    }

    /// Canonicalize a raw value. Null stays null.
    fn normalize(&self, value: Option<&str>) -> Option<String>;

    /// Judge an already normalized value.
    fn validate(&self, value: Option<&str>) -> Verdict;

    /// Normalize a raw value and validate the result.
    fn apply(&self, raw: Option<&str>) -> (Option<String>, Verdict) {
        let normalized = self.normalize(raw);
        let verdict = self.validate(normalized.as_deref());
        (normalized, verdict)
    }
}

#[derive(Debug, Clone)]
pub enum FieldHandler {
    Name(NameHandler),
    Email(EmailHandler),
    Phone(PhoneHandler),
    Text(TextHandler),
}

impl FieldHandler {
    /// Build the handler for `kind` from explicit run configuration.
    pub fn for_kind(kind: FieldKind, config: &CleanConfig) -> Result<Self, NormalizeError> {
        Ok(match kind {
            FieldKind::Name => Self::Name(NameHandler::new(config.name_strategy, &config.name)),
            FieldKind::Email => Self::Email(EmailHandler::from_options(&config.email)?),
            FieldKind::Phone => Self::Phone(PhoneHandler::from_options(&config.phone)?),
            FieldKind::Text => Self::Text(TextHandler),
        })
    }

    fn inner(&self) -> &dyn FieldNormalizer {
        match self {
            Self::Name(handler) => handler,
            Self::Email(handler) => handler,
            Self::Phone(handler) => handler,
            Self::Text(handler) => handler,
        }
    }
}

impl FieldNormalizer for FieldHandler {
    fn kind(&self) -> FieldKind {
        self.inner().kind()
    }

    fn description(&self) -> &'static str {
        self.inner().description()
    }

    fn normalize(&self, value: Option<&str>) -> Option<String> {
        self.inner().normalize(value)
    }

    fn validate(&self, value: Option<&str>) -> Verdict {
        self.inner().validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_every_kind_from_default_config() {
        let config = CleanConfig::default();
        for kind in FieldKind::ALL {
            let handler = FieldHandler::for_kind(kind, &config).unwrap();
            assert_eq!(handler.kind(), kind);
        }
    }

    #[test]
    fn config_errors_surface_when_building() {
        let mut config = CleanConfig::default();
        config.email.pattern = Some("[".to_string());
        assert!(FieldHandler::for_kind(FieldKind::Email, &config).is_err());
        // Other kinds do not look at the email pattern.
        assert!(FieldHandler::for_kind(FieldKind::Name, &config).is_ok());
    }

    #[test]
    fn null_never_validates() {
        let config = CleanConfig::default();
        for kind in FieldKind::ALL {
            let handler = FieldHandler::for_kind(kind, &config).unwrap();
            let (normalized, verdict) = handler.apply(None);
            assert_eq!(normalized, None);
            assert!(!verdict.valid, "{kind} accepted a null value");
            assert!(verdict.reason.is_some());
        }
    }
}
