//! Inbound email payload
//!
//! The shape accepted by `POST /emails`. Field names follow the camelCase wire
//! format of the service (`copyTo`, `blindCopyTo`, `files`), with shorter
//! aliases accepted as well.

use lettre::message::header::ContentType;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// An email to send
///
/// The sender identity is never part of the payload; it always comes from the
/// transport configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailMessage {
    /// Email subject
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,

    /// HTML body
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,

    /// Primary recipients (To)
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "email must have at least one recipient"), nested)]
    pub to: Vec<Recipient>,

    /// CC recipients
    #[serde(rename = "copyTo", alias = "cc", default, deserialize_with = "null_as_empty")]
    #[validate(nested)]
    pub cc: Vec<Recipient>,

    /// BCC recipients
    #[serde(rename = "blindCopyTo", alias = "bcc", default, deserialize_with = "null_as_empty")]
    #[validate(nested)]
    pub bcc: Vec<Recipient>,

    /// File attachments
    #[serde(rename = "files", alias = "attachments", default, deserialize_with = "null_as_empty")]
    #[validate(nested)]
    pub attachments: Vec<FileAttachment>,
}

/// A recipient address with an optional display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// Email address
    #[validate(email(message = "recipient address is not a valid email address"))]
    pub address: String,

    /// Display name shown alongside the address
    #[serde(rename = "display", alias = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Recipient {
    /// Create a recipient without a display name
    #[must_use]
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            display_name: None,
        }
    }

    /// Set the display name
    #[must_use]
    pub fn named(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }
}

/// A file attached to an email
///
/// `content` travels as standard base64 on the wire.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    /// File name presented to the recipient
    #[serde(rename = "name", alias = "filename")]
    #[validate(length(min = 1, message = "attachment name must not be empty"))]
    pub filename: String,

    /// MIME content type, e.g. `text/plain`
    #[validate(custom(function = "validate_content_type"))]
    pub content_type: String,

    /// Raw file bytes
    #[serde(rename = "bytes", alias = "content", with = "base64_bytes")]
    #[validate(length(min = 1, message = "attachment content must not be empty"))]
    pub content: Vec<u8>,
}

impl FileAttachment {
    /// Create an attachment
    #[must_use]
    pub fn new(filename: &str, content_type: &str, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            content: content.into(),
        }
    }
}

// Debug output shows attachment length, not bytes.
impl std::fmt::Debug for FileAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAttachment")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("content_len", &self.content.len())
            .finish()
    }
}

fn validate_content_type(content_type: &str) -> Result<(), ValidationError> {
    ContentType::parse(content_type).map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("content_type");
        error.message = Some(format!("`{content_type}` is not a valid MIME type").into());
        error
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_message() -> EmailMessage {
        EmailMessage {
            subject: "Hi".to_string(),
            body: "<b>Hi</b>".to_string(),
            to: vec![Recipient::new("a@b.com")],
            ..EmailMessage::default()
        }
    }

    #[test]
    fn test_deserialize_wire_format() {
        let message: EmailMessage = serde_json::from_value(json!({
            "subject": "Hi",
            "body": "<b>Hi</b>",
            "to": [{ "address": "a@b.com", "display": "Alice" }],
            "copyTo": [{ "address": "c@d.com" }],
            "blindCopyTo": null,
            "files": [{ "name": "f.txt", "contentType": "text/plain", "bytes": "QUI=" }]
        }))
        .unwrap();

        assert_eq!(message.to, vec![Recipient::new("a@b.com").named("Alice")]);
        assert_eq!(message.cc, vec![Recipient::new("c@d.com")]);
        assert!(message.bcc.is_empty());
        assert_eq!(
            message.attachments,
            vec![FileAttachment::new("f.txt", "text/plain", vec![0x41, 0x42])]
        );
    }

    #[test]
    fn test_deserialize_aliases_and_missing_lists() {
        let message: EmailMessage = serde_json::from_value(json!({
            "subject": "Hi",
            "body": "Hello",
            "to": [{ "address": "a@b.com", "displayName": "Alice" }],
            "bcc": [{ "address": "audit@b.com" }]
        }))
        .unwrap();

        assert_eq!(message.to[0].display_name.as_deref(), Some("Alice"));
        assert!(message.cc.is_empty());
        assert_eq!(message.bcc, vec![Recipient::new("audit@b.com")]);
        assert!(message.attachments.is_empty());
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let result = serde_json::from_value::<EmailMessage>(json!({
            "subject": "Hi",
            "body": "Hello",
            "to": [{ "address": "a@b.com" }],
            "files": [{ "name": "f.txt", "contentType": "text/plain", "bytes": "***" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_attachment_serializes_as_base64() {
        let value = serde_json::to_value(FileAttachment::new("f.txt", "text/plain", *b"AB")).unwrap();
        assert_eq!(value["bytes"], "QUI=");
        assert_eq!(value["name"], "f.txt");
    }

    #[test]
    fn test_valid_message() {
        assert!(valid_message().validate().is_ok());
    }

    #[test]
    fn test_no_recipients() {
        let message = EmailMessage {
            to: Vec::new(),
            cc: vec![Recipient::new("c@d.com")],
            ..valid_message()
        };
        let errors = message.validate().unwrap_err();
        assert!(errors.errors().contains_key("to"));
    }

    #[test]
    fn test_empty_subject_and_body() {
        let message = EmailMessage {
            subject: String::new(),
            body: String::new(),
            ..valid_message()
        };
        let errors = message.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("subject"));
        assert!(errors.field_errors().contains_key("body"));
    }

    #[test]
    fn test_invalid_address_in_each_list() {
        let bad = Recipient::new("not-an-address");

        let in_to = EmailMessage {
            to: vec![Recipient::new("a@b.com"), bad.clone()],
            ..valid_message()
        };
        let in_cc = EmailMessage {
            cc: vec![bad.clone()],
            ..valid_message()
        };
        let in_bcc = EmailMessage {
            bcc: vec![bad],
            ..valid_message()
        };

        assert!(in_to.validate().is_err());
        assert!(in_cc.validate().is_err());
        assert!(in_bcc.validate().is_err());
    }

    #[test]
    fn test_attachment_rules() {
        assert!(FileAttachment::new("f.txt", "text/plain", *b"AB").validate().is_ok());
        assert!(FileAttachment::new("", "text/plain", *b"AB").validate().is_err());
        assert!(FileAttachment::new("f.txt", "not a mime", *b"AB").validate().is_err());
        assert!(FileAttachment::new("f.txt", "text/plain", Vec::new()).validate().is_err());
    }

    #[test]
    fn test_empty_attachment_fails_message() {
        let message = EmailMessage {
            attachments: vec![FileAttachment::new("f.txt", "text/plain", Vec::new())],
            ..valid_message()
        };
        assert!(message.validate().is_err());
    }

    #[test]
    fn test_debug_hides_attachment_bytes() {
        let debug = format!("{:?}", FileAttachment::new("f.txt", "text/plain", *b"secret"));
        assert!(debug.contains("content_len: 6"));
        assert!(!debug.contains("content: "));
    }
}
