// src/message.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;

use crate::error::ValidationError;

/// Checks a deserialized request body and turns it into its typed form.
///
/// Runs before any handler logic; a body that fails here never reaches a service.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationError>;
}

fn parse_uuid(field: &'static str, value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| ValidationError::invalid_uuid(field, value))
}

/// Integer field that also takes integral floats (`1.0`) and integer strings (`"1"`).
fn lax_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LaxI64;

    impl de::Visitor<'_> for LaxI64 {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &"an integer without a fractional part"))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &"an integer string"))
        }
    }

    deserializer.deserialize_any(LaxI64)
}

/// Body of `POST /get_message` as it arrives on the wire.
///
/// `last_message_id` must be present but may be `null`.
#[derive(Debug, Deserialize)]
pub struct EchoRequestBody {
    pub dialog_id: String,
    pub last_msg_text: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub last_message_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoRequest {
    pub dialog_id: Uuid,
    pub last_msg_text: String,
    pub last_message_id: Option<Uuid>,
}

impl Validate for EchoRequestBody {
    type Output = EchoRequest;

    fn validate(self) -> Result<EchoRequest, ValidationError> {
        let dialog_id = parse_uuid("dialog_id", &self.dialog_id)?;
        let last_message_id = self
            .last_message_id
            .as_deref()
            .map(|id| parse_uuid("last_message_id", id))
            .transpose()?;

        Ok(EchoRequest {
            dialog_id,
            last_msg_text: self.last_msg_text,
            last_message_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoResponse {
    pub new_msg_text: String,
    pub dialog_id: Uuid,
}

/// Body of `POST /predict` as it arrives on the wire.
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub text: String,
    pub dialog_id: String,
    pub id: String,
    #[serde(deserialize_with = "lax_i64")]
    pub participant_index: i64,
}

/// A single utterance in a dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub dialog_id: Uuid,
    pub text: String,
    pub id: Uuid,
    pub participant_index: i64,
}

impl Validate for MessageBody {
    type Output = Message;

    fn validate(self) -> Result<Message, ValidationError> {
        Ok(Message {
            dialog_id: parse_uuid("dialog_id", &self.dialog_id)?,
            text: self.text,
            id: parse_uuid("id", &self.id)?,
            participant_index: self.participant_index,
        })
    }
}

/// Result of scoring one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: Uuid,
    pub message_id: Uuid,
    pub dialog_id: Uuid,
    pub participant_index: i64,
    pub is_bot_probability: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DIALOG: &str = "11111111-1111-1111-1111-111111111111";

    fn echo_body(value: serde_json::Value) -> Result<EchoRequest, String> {
        let body: EchoRequestBody = serde_json::from_value(value).map_err(|e| e.to_string())?;
        body.validate().map_err(|e| e.to_string())
    }

    #[test]
    fn accepts_null_last_message_id() {
        let req = echo_body(json!({
            "dialog_id": DIALOG,
            "last_msg_text": "hello",
            "last_message_id": null,
        }))
        .unwrap();
        assert_eq!(req.dialog_id.to_string(), DIALOG);
        assert_eq!(req.last_msg_text, "hello");
        assert!(req.last_message_id.is_none());
    }

    #[test]
    fn last_message_id_key_is_required() {
        let err = echo_body(json!({ "dialog_id": DIALOG, "last_msg_text": "hello" })).unwrap_err();
        assert!(err.contains("last_message_id"), "{err}");
    }

    #[test]
    fn text_is_not_coerced_from_numbers_or_booleans() {
        for text in [json!(42), json!(true), json!(1.5)] {
            let res = echo_body(json!({
                "dialog_id": DIALOG,
                "last_msg_text": text,
                "last_message_id": null,
            }));
            assert!(res.is_err());
        }
    }

    #[test]
    fn rejects_malformed_uuids_per_field() {
        let body: EchoRequestBody = serde_json::from_value(json!({
            "dialog_id": DIALOG,
            "last_msg_text": "hi",
            "last_message_id": "1234",
        }))
        .unwrap();
        assert_eq!(
            body.validate().unwrap_err(),
            ValidationError::invalid_uuid("last_message_id", "1234")
        );

        let body: MessageBody = serde_json::from_value(json!({
            "text": "hi",
            "dialog_id": "not-a-uuid",
            "id": DIALOG,
            "participant_index": 0,
        }))
        .unwrap();
        assert_eq!(
            body.validate().unwrap_err(),
            ValidationError::invalid_uuid("dialog_id", "not-a-uuid")
        );
    }

    #[test]
    fn uuids_are_normalized_on_output() {
        let req = echo_body(json!({
            "dialog_id": "{11111111-1111-1111-1111-111111111111}",
            "last_msg_text": "hi",
            "last_message_id": "urn:uuid:22222222-2222-2222-2222-22222222222A",
        }))
        .unwrap();

        let resp = EchoResponse { new_msg_text: req.last_msg_text, dialog_id: req.dialog_id };
        let out = serde_json::to_value(&resp).unwrap();
        assert_eq!(out["dialog_id"], json!(DIALOG));
        assert_eq!(
            req.last_message_id.unwrap().to_string(),
            "22222222-2222-2222-2222-22222222222a"
        );
    }

    fn participant_index(value: serde_json::Value) -> Result<i64, serde_json::Error> {
        let body: MessageBody = serde_json::from_value(json!({
            "text": "hi",
            "dialog_id": DIALOG,
            "id": DIALOG,
            "participant_index": value,
        }))?;
        Ok(body.participant_index)
    }

    #[test]
    fn participant_index_is_lax_about_integral_values() {
        assert_eq!(participant_index(json!(1)).unwrap(), 1);
        assert_eq!(participant_index(json!(-3)).unwrap(), -3);
        assert_eq!(participant_index(json!(1.0)).unwrap(), 1);
        assert_eq!(participant_index(json!("1")).unwrap(), 1);
    }

    #[test]
    fn participant_index_rejects_non_integers() {
        for value in [json!(1.5), json!("zero"), json!("1.5"), json!(true), json!(null)] {
            assert!(participant_index(value.clone()).is_err(), "{value}");
        }
    }
}
