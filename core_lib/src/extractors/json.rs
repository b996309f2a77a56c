//! JSON extractor whose rejections use the API response envelope

use crate::models::ApiResponse;
use axum::{
    async_trait,
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiJsonRejection::from(rejection)),
        }
    }
}

#[derive(Debug)]
pub enum ApiJsonRejection {
    MissingContentType,
    InvalidUnicode,
    InvalidJson(String),
    PayloadTooLarge,
    Other(String),
}

impl From<JsonRejection> for ApiJsonRejection {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiJsonRejection::MissingContentType,
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => ApiJsonRejection::PayloadTooLarge,
            other => {
                let error_msg = other.body_text();
                if error_msg.contains("UTF-8") || error_msg.contains("unicode") {
                    ApiJsonRejection::InvalidUnicode
                } else if matches!(other, JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_)) {
                    ApiJsonRejection::InvalidJson(error_msg)
                } else {
                    ApiJsonRejection::Other(error_msg)
                }
            }
        }
    }
}

impl ApiJsonRejection {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiJsonRejection::MissingContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiJsonRejection::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiJsonRejection::MissingContentType => "Expected a JSON request body",
            ApiJsonRejection::InvalidUnicode => "Invalid Unicode characters in JSON",
            ApiJsonRejection::InvalidJson(msg) if msg.contains("EOF while parsing") => {
                "Empty or incomplete JSON request"
            }
            ApiJsonRejection::InvalidJson(_) => "Invalid JSON data",
            ApiJsonRejection::PayloadTooLarge => "Request body is too large",
            ApiJsonRejection::Other(_) => "Failed to parse JSON request",
        }
    }
}

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected JSON body: {}", self);
        let status = self.status_code();
        let body = Json(ApiResponse::<()>::error(self.public_message()));
        (status, body).into_response()
    }
}

impl std::fmt::Display for ApiJsonRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiJsonRejection::MissingContentType => write!(f, "Missing JSON content type"),
            ApiJsonRejection::InvalidUnicode => write!(f, "Invalid Unicode in JSON"),
            ApiJsonRejection::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
            ApiJsonRejection::PayloadTooLarge => write!(f, "Payload too large"),
            ApiJsonRejection::Other(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for ApiJsonRejection {}
