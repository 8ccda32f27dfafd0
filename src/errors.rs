use crate::date_key::DateKey;
use crate::models::TrackingMode;
use axum::http::StatusCode;
use thiserror::Error;

/// Failures raised by the tracking core. None of them are fatal; the
/// aggregate is left as it was before the call.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{0} is already marked as successful")]
    AlreadyMarked(DateKey),

    #[error("{day} is in the future (today is {today})")]
    FutureDay { day: DateKey, today: DateKey },

    #[error("'{action}' is not available in {mode} mode")]
    UnsupportedInMode {
        action: &'static str,
        mode: TrackingMode,
    },

    #[error("persisted data is malformed: {0}")]
    MalformedPersistedData(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::AlreadyMarked(_) => Self::conflict(err.to_string()),
            TrackerError::FutureDay { .. } | TrackerError::UnsupportedInMode { .. } => {
                Self::bad_request(err.to_string())
            }
            TrackerError::MalformedPersistedData(_) => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
