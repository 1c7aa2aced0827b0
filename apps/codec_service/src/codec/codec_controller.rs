use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    routing::post,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codec_error::CodecError;
use crate::app_module::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CodecResponse {
    pub result: String,
}

/// Non-empty `text` pulled from a JSON body.
///
/// A request without a JSON content type, or with an empty body, counts as an
/// empty object, so it is rejected as missing input rather than as an
/// unsupported media type or a parse failure.
pub struct TextPayload(pub String);

#[async_trait]
impl<S> FromRequest<S> for TextPayload
where
    S: Send + Sync,
{
    type Rejection = CodecError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request = if has_json_content_type(req.headers()) {
            let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
                let message = rejection.body_text();
                tracing::warn!("Unable to read request body: {}", message);
                CodecError::UnreadableBody {
                    status: rejection.status(),
                    message,
                }
            })?;
            parse_text_request(&bytes).inspect_err(|e| {
                tracing::warn!("Rejected request body: {}", e);
            })?
        } else {
            TextRequest::default()
        };

        match request.text {
            Some(text) if !text.is_empty() => Ok(TextPayload(text)),
            _ => {
                tracing::warn!("Request without text");
                Err(CodecError::MissingInput)
            }
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Only a JSON object can carry `text`. An empty body or a top-level array
/// yields an empty request; any other top-level value is malformed.
pub fn parse_text_request(bytes: &[u8]) -> Result<TextRequest, CodecError> {
    if bytes.is_empty() {
        return Ok(TextRequest::default());
    }

    let Json(value) = Json::<Value>::from_bytes(bytes)
        .map_err(|rejection| CodecError::MalformedBody(rejection.body_text()))?;

    match value {
        Value::Object(map) => serde_json::from_value(Value::Object(map)).map_err(|e| {
            CodecError::MalformedBody(format!(
                "Failed to deserialize the JSON body into the target type: {}",
                e
            ))
        }),
        Value::Array(_) => Ok(TextRequest::default()),
        _ => Err(CodecError::MalformedBody(
            "Expected a JSON object as the request body".to_string(),
        )),
    }
}

pub fn codec_router() -> Router {
    Router::new()
        .route("/encode", post(encode_text))
        .route("/decode", post(decode_text))
}

pub async fn encode_text(
    Extension(ctx): Extension<AppState>,
    TextPayload(text): TextPayload,
) -> Json<CodecResponse> {
    let result = ctx.service.codec_service.encode(&text);
    Json(CodecResponse { result })
}

pub async fn decode_text(
    Extension(ctx): Extension<AppState>,
    TextPayload(text): TextPayload,
) -> Result<Json<CodecResponse>, CodecError> {
    match ctx.service.codec_service.decode(&text) {
        Ok(result) => Ok(Json(CodecResponse { result })),
        Err(e) => {
            tracing::warn!("Error decoding text of length {}: {}", text.len(), e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(content_type).unwrap(),
        );
        headers
    }

    #[test]
    fn recognises_json_content_types() {
        assert!(has_json_content_type(&headers_with("application/json")));
        assert!(has_json_content_type(&headers_with(
            "Application/JSON; charset=utf-8"
        )));
        assert!(has_json_content_type(&headers_with(
            "application/merge-patch+json"
        )));
        assert!(!has_json_content_type(&headers_with("text/plain")));
        assert!(!has_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn empty_body_is_an_empty_request() {
        assert!(parse_text_request(b"").unwrap().text.is_none());
    }

    #[test]
    fn array_body_carries_no_text() {
        assert!(parse_text_request(br#"["aGk="]"#).unwrap().text.is_none());
    }

    #[test]
    fn object_body_yields_text() {
        let request = parse_text_request(br#"{"text":"hi","extra":1}"#).unwrap();
        assert_eq!(request.text.as_deref(), Some("hi"));
    }

    #[test]
    fn scalar_and_invalid_bodies_are_malformed() {
        let bodies: [&[u8]; 6] = [
            b"\"hi\"",
            b"42",
            b"null",
            b"   ",
            b"{\"text\":",
            b"{\"text\":42}",
        ];
        for body in bodies {
            assert!(matches!(
                parse_text_request(body),
                Err(CodecError::MalformedBody(_))
            ));
        }
    }
}
