//! Field normalization and validation.
//!
//! This crate is the pure core of fieldclean. It performs no I/O and keeps no
//! shared mutable state:
//!
//! - **canonical**: generic text canonicalization (trim, strip accents, drop
//!   unexpected symbols)
//! - **name**: name repair strategies and minimum-length validation
//! - **email**: whitespace and doubled-dot repair, pattern validation
//! - **phone**: digit extraction and digit-count validation
//! - **text**: generic text fields
//! - **handler**: the closed [`FieldHandler`] union over the kinds above
//!
//! Every normalize/validate function is total: a null (`None`) value passes
//! through normalization unchanged and fails validation with a reason.

pub mod canonical;
pub mod email;
pub mod error;
pub mod handler;
pub mod messages;
pub mod name;
pub mod phone;
pub mod text;

pub use canonical::{canonicalize, canonicalize_text};
pub use email::EmailHandler;
pub use error::NormalizeError;
pub use handler::{FieldHandler, FieldNormalizer};
pub use name::{NameHandler, repair_name};
pub use phone::PhoneHandler;
pub use text::TextHandler;
