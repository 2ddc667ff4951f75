use serde::{Deserialize, Serialize};

use crate::kind::FieldKind;
use crate::verdict::Verdict;

/// Verdict counts for one cleaned field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub column: String,
    pub label: String,
    pub kind: Option<FieldKind>,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Null cells; always counted as invalid too.
    pub missing: usize,
}

impl FieldSummary {
    pub fn new(column: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            column: column.into(),
            label: label.into(),
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn record(&mut self, verdict: &Verdict, was_missing: bool) {
        self.total += 1;
        if verdict.valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
        if was_missing {
            self.missing += 1;
        }
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid > 0
    }
}

/// Machine-readable summary of one cleaning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanReport {
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub rows: usize,
    pub fields: Vec<FieldSummary>,
    /// Configured columns that were not present in the input.
    pub skipped: Vec<String>,
}

impl CleanReport {
    pub fn invalid_count(&self) -> usize {
        self.fields.iter().map(|field| field.invalid).sum()
    }

    pub fn valid_count(&self) -> usize {
        self.fields.iter().map(|field| field.valid).sum()
    }
}
