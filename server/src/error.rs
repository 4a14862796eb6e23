use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "request failed");
        match self.0.current_context() {
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}

/// Outcomes the API reports to clients as `200 OK` with a plain text body.
#[derive(Debug)]
pub enum Rejection {
    MissingField(&'static str),
    NotFound,
    Failed(ErrorStatus),
}

impl From<Report<KernelError>> for Rejection {
    fn from(e: Report<KernelError>) -> Self {
        Rejection::Failed(ErrorStatus::from(e))
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        match self {
            Rejection::MissingField(field) => {
                (StatusCode::OK, format!("missing required field {field}")).into_response()
            }
            Rejection::NotFound => (StatusCode::OK, "no book exists").into_response(),
            Rejection::Failed(status) => status.into_response(),
        }
    }
}
