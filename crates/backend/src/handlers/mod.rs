pub mod entities;
pub mod filters;

use axum::http::StatusCode;
use contracts::shared::filters::FilterError;

/// HTTP status of a filter layer error
pub(crate) fn status_for(err: &FilterError) -> StatusCode {
    match err {
        FilterError::UnknownEntityKind(_) | FilterError::SavedFilterNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        FilterError::InvalidSpec { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        FilterError::UnknownField { .. }
        | FilterError::InvalidOption { .. }
        | FilterError::InvalidDate { .. }
        | FilterError::ValueShapeMismatch { .. }
        | FilterError::EmptySavedFilterName => StatusCode::BAD_REQUEST,
    }
}

/// Log and convert a filter layer error
pub(crate) fn reject(err: FilterError) -> StatusCode {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!("{}", err);
    } else {
        tracing::warn!("{}", err);
    }
    status
}
