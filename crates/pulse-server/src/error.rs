// SPDX-License-Identifier: Apache-2.0

//! Conversion from core errors to HTTP responses.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pulse_core::PulseError;
use serde::Serialize;
use tracing::{error, warn};

/// A failed request, rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
    /// The analysis pipeline failed.
    Analysis(PulseError),
    /// The request could not be extracted (bad path segment or query).
    Rejected {
        /// Status chosen by the extractor, normally 400.
        status: StatusCode,
        /// Human-readable rejection reason.
        message: String,
    },
}

impl From<PulseError> for ApiError {
    fn from(err: PulseError) -> Self {
        Self::Analysis(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Maps the error variant to a status code.
    ///
    /// - `NotFound` -> 404
    /// - Extractor rejections keep their own status (400)
    /// - All others -> 500
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Analysis(PulseError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejected { status, .. } => *status,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Analysis(err) => err.to_string(),
            ApiError::Rejected { message, .. } => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();
        if status.is_server_error() {
            error!(error = %message, "Analysis failed");
        } else {
            warn!(error = %message, "Analysis request rejected");
        }

        let body = ErrorBody { error: message };
        (status, Json(body)).into_response()
    }
}
