//! CLI argument parsing for missive.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Missive: minimal template renderer and outbound message assembler.
///
/// Templates mix literal text with directives:
/// - `{{ name }}` substitutes a context value
/// - `{% if cond %} A {% else %} B {% endif %}` routes on truthiness
/// - `{% for item in list %} ... {% endfor %}` repeats a block per element
#[derive(Parser, Debug)]
#[command(name = "missive")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for missive.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a template against a context file.
    ///
    /// Reads the template and context, runs the substitution passes, and
    /// prints the result (or writes it with --out).
    Render(RenderArgs),

    /// Validate a recipient address and attachment paths.
    ///
    /// Runs the same checks `send` performs, without rendering anything.
    Check(CheckArgs),

    /// Assemble a message descriptor (simulated delivery).
    ///
    /// Validates the recipient and attachments, renders the template, and
    /// emits the resulting descriptor as JSON. Nothing is transmitted.
    Send(SendArgs),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the template file.
    #[arg(long)]
    pub template: PathBuf,

    /// Path to the context file (.json, .yaml or .yml). Empty context if omitted.
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Write the rendered text to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Recipient email address.
    #[arg(long)]
    pub to: String,

    /// Attachment path to verify (repeatable).
    #[arg(long = "attach")]
    pub attachments: Vec<PathBuf>,
}

/// Arguments for the `send` command.
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Recipient email address.
    #[arg(long)]
    pub to: String,

    /// Path to the template file.
    #[arg(long)]
    pub template: PathBuf,

    /// Path to the context file (.json, .yaml or .yml). Empty context if omitted.
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Attachment path to include (repeatable; each must exist).
    #[arg(long = "attach")]
    pub attachments: Vec<PathBuf>,

    /// Write the descriptor JSON to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
