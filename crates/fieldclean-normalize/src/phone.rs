//! Phone number repair and validation.

use fieldclean_model::{FieldKind, PhoneOptions, Verdict};

use crate::error::NormalizeError;
use crate::handler::FieldNormalizer;
use crate::messages;

/// Keeps digits only; valid when the digit count is within `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct PhoneHandler {
    min_digits: usize,
    max_digits: usize,
}

impl Default for PhoneHandler {
    fn default() -> Self {
        let options = PhoneOptions::default();
        Self {
            min_digits: options.min_digits,
            max_digits: options.max_digits,
        }
    }
}

impl PhoneHandler {
    pub fn new(min_digits: usize, max_digits: usize) -> Result<Self, NormalizeError> {
        if min_digits > max_digits {
            return Err(NormalizeError::InvalidRange {
                min: min_digits,
                max: max_digits,
            });
        }
        Ok(Self {
            min_digits,
            max_digits,
        })
    }

    pub fn from_options(options: &PhoneOptions) -> Result<Self, NormalizeError> {
        Self::new(options.min_digits, options.max_digits)
    }
}

impl FieldNormalizer for PhoneHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::Phone
    }

    fn description(&self) -> &'static str {
        "Phone: digits only"
    }

    fn normalize(&self, value: Option<&str>) -> Option<String> {
        value.map(|phone| phone.chars().filter(char::is_ascii_digit).collect())
    }

    fn validate(&self, value: Option<&str>) -> Verdict {
        let Some(phone) = value else {
            return Verdict::invalid(messages::INVALID_FORMAT);
        };
        let all_digits = !phone.is_empty() && phone.chars().all(|ch| ch.is_ascii_digit());
        // Digits are ASCII, so the byte length is the digit count.
        if all_digits && (self.min_digits..=self.max_digits).contains(&phone.len()) {
            Verdict::valid()
        } else {
            Verdict::invalid(messages::INVALID_FORMAT)
        }
    }
}
