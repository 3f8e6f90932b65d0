use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown activity code: {0}")]
    UnknownCode(String),
    #[error("Wrong number of fields for {code} (expected {expected}, got {got})")]
    Arity {
        code: String,
        expected: usize,
        got: usize,
    },
    #[error("Invalid {field} for {code}: {value}")]
    InvalidField {
        code: String,
        field: &'static str,
        value: f64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Division by zero: {0} must be non-zero")]
    DivisionByZero(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Undecodable bodies (including wrong-typed `data` entries) are bad requests.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Parse(_) | AppError::Process(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
