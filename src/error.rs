use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Trait for errors that can be converted to HTTP responses
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Error code for logs (e.g., "UPSTREAM_STATUS")
    fn error_code(&self) -> &'static str;
}

/// Convert any HttpError into a plain-text Axum response.
///
/// The body is the error's `Display` output; callers see a human-readable
/// string only, the error code stays in the logs.
pub fn into_response<E: HttpError>(err: E) -> Response {
    let status = err.status_code();
    let code = err.error_code();
    let message = err.to_string();

    tracing::error!(
        error = %message,
        status = %status,
        code = code,
        "API error"
    );

    (status, message).into_response()
}

/// Macro to implement IntoResponse for HttpError types
#[macro_export]
macro_rules! impl_into_response {
    ($error_type:ty) => {
        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                $crate::error::into_response(self)
            }
        }
    };
}
