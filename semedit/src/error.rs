use thiserror::Error;

/// Errors raised while applying an editor.
///
/// Only targets that have no sensible "nothing to edit" behavior fail. An empty
/// container, an absent optional value or a missing map key are edited as no-ops.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("stride must be positive")]
    InvalidStride,
    #[error("field `{field}` not found")]
    FieldNotFound { field: String },
    #[error("expected {expected}")]
    ShapeMismatch { expected: &'static str },
    #[error("value has no counterpart outside its view")]
    OutsideView,
}

pub type EditResult<T> = Result<T, EditError>;
