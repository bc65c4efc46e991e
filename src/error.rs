use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::template::{SERVER_ERROR_MESSAGE, render};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Schedule(#[from] visitplan_schedule::Error),

    #[error("Export failed: {0}")]
    Export(#[from] visitplan_export::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error")]
    InternalError(String),
}

#[derive(askama::Template)]
#[template(path = "error.html")]
pub struct ErrorPageTemplate {
    pub status_code: u16,
    pub error_title: String,
    pub error_message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        use visitplan_schedule::Error as ScheduleError;

        match self {
            AppError::Schedule(ScheduleError::IndexOutOfRange { .. }) => StatusCode::NOT_FOUND,
            AppError::Schedule(_) | AppError::ValidationError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Export(_) | AppError::Template(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show on a page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Schedule(e) => e.to_string(),
            AppError::ValidationError(msg) => msg.to_owned(),
            AppError::Export(e) => format!("Schedule export failed: {e}"),
            AppError::Template(_) | AppError::InternalError(_) => SERVER_ERROR_MESSAGE.to_owned(),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::Schedule(visitplan_schedule::Error::IndexOutOfRange { .. }) => {
                "Visit Not Found"
            }
            AppError::Schedule(_) | AppError::ValidationError(_) => "Validation Error",
            AppError::Export(_) => "Export Failed",
            AppError::Template(_) | AppError::InternalError(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(err = %self, "request failed");
        } else {
            tracing::warn!(err = %self, "request rejected");
        }

        render(
            status_code,
            ErrorPageTemplate {
                status_code: status_code.as_u16(),
                error_title: self.title().to_owned(),
                error_message: self.user_message(),
            },
        )
    }
}
