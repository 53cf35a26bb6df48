// src/error.rs
use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// A request body that failed type or format checks.
///
/// Validation failures are permanent for the given input, so callers get a
/// client error and nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: value is not a valid UUID")]
    InvalidUuid { field: &'static str, value: String },

    /// Wrong shape: missing key, wrong type. `path` is the offending field, empty for the body itself.
    #[error("{msg}")]
    Schema { path: Vec<String>, msg: String },

    #[error("{0}")]
    MalformedJson(String),
}

impl ValidationError {
    pub fn invalid_uuid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidUuid { field, value: value.into() }
    }

    /// Classify a serde failure on a JSON body.
    pub fn from_json(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let mut path: Vec<String> = err
            .path()
            .iter()
            .filter_map(|segment| match segment {
                serde_path_to_error::Segment::Seq { index } => Some(index.to_string()),
                serde_path_to_error::Segment::Map { key } => Some(key.clone()),
                serde_path_to_error::Segment::Enum { variant } => Some(variant.clone()),
                serde_path_to_error::Segment::Unknown => None,
            })
            .collect();
        let inner = err.into_inner();

        match inner.classify() {
            serde_json::error::Category::Data => {
                let msg = inner.to_string();
                // serde reports a missing key against the enclosing struct
                if let Some(field) = missing_field(&msg) {
                    path.push(field.to_string());
                }
                Self::Schema { path, msg }
            }
            _ => Self::MalformedJson(inner.to_string()),
        }
    }

    fn detail(&self) -> ErrorDetail {
        match self {
            Self::InvalidUuid { field, value } => ErrorDetail {
                loc: vec!["body".to_string(), field.to_string()],
                msg: "value is not a valid UUID".to_string(),
                kind: "uuid_parsing",
                input: Some(value.clone()),
            },
            Self::Schema { path, msg } => ErrorDetail {
                loc: std::iter::once("body".to_string()).chain(path.iter().cloned()).collect(),
                msg: msg.clone(),
                kind: "schema_error",
                input: None,
            },
            Self::MalformedJson(msg) => ErrorDetail {
                loc: vec!["body".to_string()],
                msg: msg.clone(),
                kind: "json_invalid",
                input: None,
            },
        }
    }
}

fn missing_field(msg: &str) -> Option<&str> {
    let rest = msg.strip_prefix("missing field `")?;
    rest.split('`').next()
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    loc: Vec<String>,
    msg: String,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: Vec<ErrorDetail>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                tracing::debug!(error = %err, "rejected request body");
                let body = ErrorBody { detail: vec![err.detail()] };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            AppError::Body(rejection) => rejection.into_response(),
        }
    }
}
