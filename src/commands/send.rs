//! The `send` command (simulated delivery).

use super::{load_context, load_template};
use crate::cli::SendArgs;
use crate::error::{MissiveError, Result};
use crate::fs::atomic_write_file;
use crate::message::prepare_message;
use crate::template::Context;

pub(super) fn cmd_send(args: SendArgs) -> Result<()> {
    let template = load_template(&args.template)?;
    let context = match &args.context {
        Some(path) => load_context(path)?,
        None => Context::new(),
    };

    let descriptor = prepare_message(&args.to, &template, &context, &args.attachments)?;

    let json = serde_json::to_string_pretty(&descriptor).map_err(|e| {
        MissiveError::UserError(format!("failed to serialize message descriptor: {}", e))
    })?;

    match &args.out {
        Some(out) => {
            atomic_write_file(out, &json)?;
            println!("Message descriptor written to {}", out.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissiveError;
    use crate::message::MessageDescriptor;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_fixtures(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
        let template = temp_dir.path().join("t.html");
        let context = temp_dir.path().join("ctx.json");
        fs::write(&template, "Hello, {{first_name}}!").unwrap();
        fs::write(&context, r#"{"first_name": "Jane"}"#).unwrap();
        (template, context)
    }

    #[test]
    fn writes_descriptor_json_to_out_file() {
        let temp_dir = TempDir::new().unwrap();
        let (template, context) = write_fixtures(&temp_dir);
        let out = temp_dir.path().join("message.json");

        cmd_send(SendArgs {
            to: "jane.doe@example.com".to_string(),
            template,
            context: Some(context),
            attachments: vec![],
            out: Some(out.clone()),
        })
        .unwrap();

        let descriptor: MessageDescriptor =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(descriptor.recipient, "jane.doe@example.com");
        assert_eq!(descriptor.body, "Hello, Jane!");
        assert!(descriptor.attachments.is_empty());
    }

    #[test]
    fn send_without_context_uses_empty_context() {
        let temp_dir = TempDir::new().unwrap();
        let template = temp_dir.path().join("t.html");
        fs::write(&template, "Hello, {{first_name}}!").unwrap();
        let out = temp_dir.path().join("message.json");

        cmd_send(SendArgs {
            to: "jane.doe@example.com".to_string(),
            template,
            context: None,
            attachments: vec![],
            out: Some(out.clone()),
        })
        .unwrap();

        let descriptor: MessageDescriptor =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(descriptor.body, "Hello, {{first_name}}!");
    }

    #[test]
    fn invalid_recipient_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let (template, context) = write_fixtures(&temp_dir);
        let out = temp_dir.path().join("message.json");

        let err = cmd_send(SendArgs {
            to: "invalid-email".to_string(),
            template,
            context: Some(context),
            attachments: vec![],
            out: Some(out.clone()),
        })
        .unwrap_err();

        assert!(matches!(err, MissiveError::InvalidRecipient(_)));
        assert!(!out.exists());
    }

    #[test]
    fn missing_attachment_names_the_path() {
        let temp_dir = TempDir::new().unwrap();
        let (template, context) = write_fixtures(&temp_dir);

        let err = cmd_send(SendArgs {
            to: "jane.doe@example.com".to_string(),
            template,
            context: Some(context),
            attachments: vec![PathBuf::from("/invalid/path.jpg")],
            out: None,
        })
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "attachment file not found: /invalid/path.jpg"
        );
    }

    #[test]
    fn send_with_existing_attachment_carries_it() {
        let temp_dir = TempDir::new().unwrap();
        let (template, context) = write_fixtures(&temp_dir);
        let attachment = temp_dir.path().join("invoice.pdf");
        fs::write(&attachment, b"pdf").unwrap();
        let out = temp_dir.path().join("message.json");

        cmd_send(SendArgs {
            to: "jane.doe@example.com".to_string(),
            template,
            context: Some(context),
            attachments: vec![attachment.clone()],
            out: Some(out.clone()),
        })
        .unwrap();

        let descriptor: MessageDescriptor =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(descriptor.attachments, vec![attachment]);
    }
}
