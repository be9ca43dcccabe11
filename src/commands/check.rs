//! The `check` command.
//!
//! Runs the send-path validations (recipient format, attachment existence)
//! without touching any template.

use crate::attachment::verify_attachments;
use crate::cli::CheckArgs;
use crate::error::Result;
use crate::recipient::validate_recipient;

pub(super) fn cmd_check(args: CheckArgs) -> Result<()> {
    validate_recipient(&args.to)?;
    verify_attachments(&args.attachments)?;

    println!("Recipient:   {} (format OK)", args.to);
    if args.attachments.is_empty() {
        println!("Attachments: none");
    } else {
        println!("Attachments: {} verified", args.attachments.len());
        for path in &args.attachments {
            println!("  {}", path.display());
        }
    }

    Ok(())
}
