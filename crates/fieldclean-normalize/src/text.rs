use fieldclean_model::{FieldKind, Verdict};

use crate::canonical::canonicalize;
use crate::handler::FieldNormalizer;
use crate::messages;

/// Free-text field: canonicalized, valid whenever a value is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextHandler;

impl FieldNormalizer for TextHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    fn description(&self) -> &'static str {
        "Generic text: trimmed, accents and symbols removed"
    }

    fn normalize(&self, value: Option<&str>) -> Option<String> {
        canonicalize(value)
    }

    fn validate(&self, value: Option<&str>) -> Verdict {
        match value {
            Some(_) => Verdict::valid(),
            None => Verdict::invalid(messages::MISSING_VALUE),
        }
    }
}
