use thiserror::Error;

/// Validation errors raised at construction time.
///
/// Two failure causes are distinguished: a value of the wrong shape for a
/// field, and a value of the right shape outside its allowed range or enum.
/// Both carry the path of the failing field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("{field}: {constraint}, got {actual}")]
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
        actual: i64,
    },
}
