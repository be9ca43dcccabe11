//! Message assembly.
//!
//! `prepare_message` is the simulated send operation: it validates the
//! recipient and attachments, renders the body, and returns the resulting
//! descriptor. Nothing is transmitted anywhere.

use crate::attachment::verify_attachments;
use crate::error::Result;
use crate::recipient::validate_recipient;
use crate::template::{Context, render};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The result of a simulated send: who the message is addressed to, the
/// rendered body, and the attachment paths that were verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    /// Validated recipient address.
    pub recipient: String,

    /// Rendered message body.
    pub body: String,

    /// Attachment paths, each verified to exist at assembly time.
    pub attachments: Vec<PathBuf>,
}

/// Assemble a message descriptor.
///
/// Validation runs before any rendering: an invalid recipient fails first,
/// then the first missing attachment, and only then does template work
/// happen.
///
/// # Returns
///
/// * `Ok(MessageDescriptor)` - Recipient and attachments validated, body rendered
/// * `Err(MissiveError::InvalidRecipient)` - Address failed the format check
/// * `Err(MissiveError::MissingAttachment)` - First attachment path that does not exist
pub fn prepare_message(
    recipient: &str,
    template: &str,
    context: &Context,
    attachments: &[PathBuf],
) -> Result<MessageDescriptor> {
    validate_recipient(recipient)?;
    verify_attachments(attachments)?;

    let body = render(template, context);

    Ok(MessageDescriptor {
        recipient: recipient.to_string(),
        body,
        attachments: attachments.to_vec(),
    })
}
