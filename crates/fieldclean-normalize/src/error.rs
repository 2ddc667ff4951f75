use thiserror::Error;

/// Errors raised while building a handler from configuration.
///
/// Normalizing and validating values never fails.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("invalid email pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid phone digit range: {min}..={max}")]
    InvalidRange { min: usize, max: usize },
}
