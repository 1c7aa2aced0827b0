use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;
use thiserror::Error;

/// Failures surfaced by the codec routes. The `Display` text is the message
/// sent back to the client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Text is required")]
    MissingInput,

    #[error("Invalid base64 string")]
    InvalidEncoding,

    #[error("{0}")]
    MalformedBody(String),

    #[error("{message}")]
    UnreadableBody { status: StatusCode, message: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CodecError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CodecError::MissingInput
            | CodecError::InvalidEncoding
            | CodecError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            CodecError::UnreadableBody { status, .. } => *status,
        }
    }
}

impl IntoResponse for CodecError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<base64::DecodeError> for CodecError {
    fn from(_: base64::DecodeError) -> Self {
        CodecError::InvalidEncoding
    }
}

impl From<std::string::FromUtf8Error> for CodecError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        CodecError::InvalidEncoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_format() {
        assert_eq!(CodecError::MissingInput.to_string(), "Text is required");
        assert_eq!(
            CodecError::InvalidEncoding.to_string(),
            "Invalid base64 string"
        );
        assert_eq!(
            CodecError::MalformedBody("bad json".to_string()).to_string(),
            "bad json"
        );
    }

    #[test]
    fn unreadable_body_keeps_its_status() {
        let error = CodecError::UnreadableBody {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".to_string(),
        };
        assert_eq!(error.to_string(), "length limit exceeded");
        assert_eq!(
            error.into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn parse_failures_are_bad_requests() {
        for error in [
            CodecError::MissingInput,
            CodecError::InvalidEncoding,
            CodecError::MalformedBody(String::new()),
        ] {
            assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
