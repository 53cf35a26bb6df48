// src/routes/extract.rs
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, ValidationError},
    message::Validate,
};

/// JSON body that has been deserialized as `B` and then validated.
///
/// A request without a `Content-Type` is still read as JSON. Any other
/// non-JSON content type is a validation failure. Rejects with [`AppError`]
/// before the handler runs.
pub struct Validated<B: Validate>(pub B::Output);

impl<S, B> FromRequest<S> for Validated<B>
where
    S: Send + Sync,
    B: Validate + DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !accepts_as_json(req.headers()) {
            return Err(ValidationError::Schema {
                path: Vec::new(),
                msg: "expected a JSON object as the request body".to_string(),
            }
            .into());
        }

        let bytes = Bytes::from_request(req, state).await?;
        let mut de = serde_json::Deserializer::from_slice(&bytes);
        let body: B =
            serde_path_to_error::deserialize(&mut de).map_err(ValidationError::from_json)?;
        de.end()
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
        Ok(Self(body.validate()?))
    }
}

fn accepts_as_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
