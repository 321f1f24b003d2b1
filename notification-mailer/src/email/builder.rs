//! Transport message assembly
//!
//! Turns a validated [`EmailMessage`] into an [`OutgoingMail`]: typed
//! mailboxes, the configured sender identity and parsed attachment content
//! types. The SMTP backend converts it into a lettre [`Message`] at send time.

use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    Address, Message,
};

use super::{EmailError, EmailMessage, Recipient};
use crate::config::TransportConfig;

/// A transport-ready email
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    /// Sender, always taken from the transport configuration
    pub from: Mailbox,

    /// Primary recipients, in request order
    pub to: Vec<Mailbox>,

    /// CC recipients
    pub cc: Vec<Mailbox>,

    /// BCC recipients
    pub bcc: Vec<Mailbox>,

    /// Email subject
    pub subject: String,

    /// HTML body
    pub html_body: String,

    /// Attachments
    pub attachments: Vec<OutgoingAttachment>,
}

/// A named, typed attachment
#[derive(Clone, PartialEq)]
pub struct OutgoingAttachment {
    /// File name
    pub filename: String,

    /// Parsed MIME type
    pub content_type: ContentType,

    /// Raw bytes
    pub content: Vec<u8>,
}

impl std::fmt::Debug for OutgoingAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutgoingAttachment")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("content_len", &self.content.len())
            .finish()
    }
}

impl OutgoingMail {
    /// Assemble an outgoing mail from a payload and the sender configuration
    ///
    /// Consumes the payload; attachment buffers are moved, not copied.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::InvalidAddress` or `EmailError::InvalidContentType`
    /// if an address or MIME type does not parse.
    pub fn compose(sender: &TransportConfig, email: EmailMessage) -> Result<Self, EmailError> {
        let display_name = Some(sender.display_name.clone()).filter(|name| !name.is_empty());
        let from = Mailbox::new(display_name, parse_address(&sender.username)?);

        let attachments = email
            .attachments
            .into_iter()
            .map(|file| {
                let content_type = ContentType::parse(&file.content_type)
                    .map_err(|_| EmailError::InvalidContentType(file.content_type.clone()))?;
                Ok(OutgoingAttachment {
                    filename: file.filename,
                    content_type,
                    content: file.content,
                })
            })
            .collect::<Result<Vec<_>, EmailError>>()?;

        Ok(Self {
            from,
            to: to_mailboxes(&email.to)?,
            cc: to_mailboxes(&email.cc)?,
            bcc: to_mailboxes(&email.bcc)?,
            subject: email.subject,
            html_body: email.body,
            attachments,
        })
    }

    /// Convert into a lettre message
    ///
    /// The body is sent as `text/html`. With attachments the message becomes
    /// `multipart/mixed` with the body as its first part.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Build` if lettre rejects the message.
    pub fn into_message(self) -> Result<Message, EmailError> {
        let mut builder = Message::builder().from(self.from).subject(self.subject);

        for to in self.to {
            builder = builder.to(to);
        }
        for cc in self.cc {
            builder = builder.cc(cc);
        }
        for bcc in self.bcc {
            builder = builder.bcc(bcc);
        }

        let body = SinglePart::html(self.html_body);

        let message = if self.attachments.is_empty() {
            builder.singlepart(body)?
        } else {
            let parts = self
                .attachments
                .into_iter()
                .fold(MultiPart::mixed().singlepart(body), |parts, file| {
                    parts.singlepart(Attachment::new(file.filename).body(file.content, file.content_type))
                });
            builder.multipart(parts)?
        };

        Ok(message)
    }
}

fn parse_address(address: &str) -> Result<Address, EmailError> {
    address
        .parse()
        .map_err(|_| EmailError::InvalidAddress(address.to_string()))
}

fn to_mailboxes(recipients: &[Recipient]) -> Result<Vec<Mailbox>, EmailError> {
    recipients
        .iter()
        .map(|recipient| {
            let display_name = recipient.display_name.clone().filter(|name| !name.is_empty());
            Ok(Mailbox::new(display_name, parse_address(&recipient.address)?))
        })
        .collect()
}
