//! Run configuration for field cleaning.
//!
//! Every key is optional in the TOML form; the default fields are the
//! spreadsheet headers `Nome`, `E-mail` and `Telefone`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::kind::FieldKind;

/// Email pattern used when no override is configured.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// How broken-up names are repaired before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameRepairMode {
    /// Remove every whitespace character ("Ana Maria" becomes "AnaMaria").
    #[default]
    RemoveAllWhitespace,
    /// Only join a single space between two lowercase letters ("Mat eus").
    JoinLowercaseFragments,
}

impl NameRepairMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RemoveAllWhitespace => "remove-all-whitespace",
            Self::JoinLowercaseFragments => "join-lowercase-fragments",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameOptions {
    /// Minimum number of characters for a valid name.
    pub min_length: usize,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self { min_length: 3 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailOptions {
    /// Full-string pattern; `None` uses [`DEFAULT_EMAIL_PATTERN`].
    pub pattern: Option<String>,
}

impl EmailOptions {
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_EMAIL_PATTERN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneOptions {
    pub min_digits: usize,
    pub max_digits: usize,
}

impl Default for PhoneOptions {
    fn default() -> Self {
        Self {
            min_digits: 10,
            max_digits: 13,
        }
    }
}

/// A source column and the kind of field it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Exact header name in the source dataset.
    pub column: String,
    pub kind: FieldKind,
    /// Prefix for the derived columns; defaults to `column`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FieldSpec {
    pub fn new(column: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            column: column.into(),
            kind,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn output_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.column)
    }

    pub fn corrected_column(&self) -> String {
        format!("{}_corrigido", self.output_label())
    }

    pub fn valid_column(&self) -> String {
        format!("{}_valido", self.output_label())
    }

    pub fn suggestion_column(&self) -> String {
        format!("{}_sugestao", self.output_label())
    }
}

/// Complete configuration for one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Run the generic canonicalizer over every text cell first.
    pub canonicalize: bool,
    pub name_strategy: NameRepairMode,
    pub name: NameOptions,
    pub email: EmailOptions,
    pub phone: PhoneOptions,
    pub fields: Vec<FieldSpec>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            canonicalize: true,
            name_strategy: NameRepairMode::default(),
            name: NameOptions::default(),
            email: EmailOptions::default(),
            phone: PhoneOptions::default(),
            fields: vec![
                FieldSpec::new("Nome", FieldKind::Name),
                FieldSpec::new("E-mail", FieldKind::Email),
                FieldSpec::new("Telefone", FieldKind::Phone),
            ],
        }
    }
}

impl CleanConfig {
    /// Parse a TOML document, filling unspecified keys with defaults.
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load and check a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source).map_err(|source| ModelError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations no handler could be built from.
    pub fn check(&self) -> Result<()> {
        if self.phone.min_digits > self.phone.max_digits {
            return Err(ModelError::InvalidConfig {
                message: format!(
                    "phone.min_digits ({}) is greater than phone.max_digits ({})",
                    self.phone.min_digits, self.phone.max_digits
                ),
            });
        }
        let mut labels: Vec<&str> = self.fields.iter().map(FieldSpec::output_label).collect();
        labels.sort_unstable();
        if let Some(pair) = labels.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ModelError::InvalidConfig {
                message: format!("duplicate field label: {}", pair[0]),
            });
        }
        Ok(())
    }

    /// Field spec for a source column, if one is configured.
    pub fn field(&self, column: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.column == column)
    }
}
