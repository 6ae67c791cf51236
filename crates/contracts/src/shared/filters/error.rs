use thiserror::Error;

/// Ошибки слоя фильтрации
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Unknown entity kind: {0}")]
    UnknownEntityKind(String),

    #[error("Unknown filter field '{field}' for {entity}")]
    UnknownField { entity: String, field: String },

    #[error("Value '{value}' is not an option of filter '{field}'")]
    InvalidOption { field: String, value: String },

    #[error("Invalid date '{value}' in filter '{field}'")]
    InvalidDate { field: String, value: String },

    #[error("Filter '{field}' expects a {expected} value")]
    ValueShapeMismatch { field: String, expected: &'static str },

    #[error("Invalid filter spec for {entity}: {reason}")]
    InvalidSpec { entity: String, reason: String },

    #[error("Saved filter name must not be empty")]
    EmptySavedFilterName,

    #[error("Saved filter not found: {0}")]
    SavedFilterNotFound(String),
}
