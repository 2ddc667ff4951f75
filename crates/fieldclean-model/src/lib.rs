//! Data model for the fieldclean workspace.
//!
//! Field kinds, validation verdicts, run configuration and report types shared
//! by the normalizer, the pipeline, and the CLI.

pub mod config;
pub mod error;
pub mod kind;
pub mod report;
pub mod verdict;

pub use config::{
    CleanConfig, DEFAULT_EMAIL_PATTERN, EmailOptions, FieldSpec, NameOptions, NameRepairMode,
    PhoneOptions,
};
pub use error::{ModelError, Result};
pub use kind::FieldKind;
pub use report::{CleanReport, FieldSummary};
pub use verdict::Verdict;
