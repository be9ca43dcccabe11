//! Command implementations for missive.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the template/context file loading shared by the
//! handlers.

mod check;
mod render;
mod send;

use crate::cli::Command;
use crate::error::{MissiveError, Result};
use crate::template::Context;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Send(args) => send::cmd_send(args),
    }
}

/// Read a template file into a string.
pub(crate) fn load_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        MissiveError::UserError(format!(
            "failed to read template '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a context file, dispatching on extension.
///
/// `.yaml`/`.yml` parse as YAML; everything else parses as JSON. The top
/// level must be a mapping from string keys to values.
pub(crate) fn load_context(path: &Path) -> Result<Context> {
    let raw = fs::read_to_string(path).map_err(|e| {
        MissiveError::UserError(format!("failed to read context '{}': {}", path.display(), e))
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let values: BTreeMap<String, Value> = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&raw).map_err(|e| {
            MissiveError::UserError(format!(
                "failed to parse context '{}' as YAML: {}",
                path.display(),
                e
            ))
        })?,
        _ => serde_json::from_str(&raw).map_err(|e| {
            MissiveError::UserError(format!(
                "failed to parse context '{}' as JSON: {}",
                path.display(),
                e
            ))
        })?,
    };

    Ok(Context::from(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_template_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("t.html");
        fs::write(&path, "Hello, {{name}}!").unwrap();

        assert_eq!(load_template(&path).unwrap(), "Hello, {{name}}!");
    }

    #[test]
    fn load_template_missing_file_is_user_error() {
        let err = load_template(Path::new("/no/such/template.html")).unwrap_err();
        assert!(matches!(err, MissiveError::UserError(_)));
        assert!(err.to_string().contains("template.html"));
    }

    #[test]
    fn load_context_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ctx.json");
        fs::write(&path, r#"{"name": "Alice", "count": 2}"#).unwrap();

        let context = load_context(&path).unwrap();
        assert_eq!(context.get("name"), Some(&json!("Alice")));
        assert_eq!(context.get("count"), Some(&json!(2)));
    }

    #[test]
    fn load_context_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ctx.yaml");
        fs::write(&path, "name: Alice\nitems:\n  - Milk\n  - Bread\n").unwrap();

        let context = load_context(&path).unwrap();
        assert_eq!(context.get("name"), Some(&json!("Alice")));
        assert_eq!(context.get("items"), Some(&json!(["Milk", "Bread"])));
    }

    #[test]
    fn load_context_yml_extension_parses_as_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ctx.yml");
        fs::write(&path, "greeting: hi\n").unwrap();

        let context = load_context(&path).unwrap();
        assert_eq!(context.get("greeting"), Some(&json!("hi")));
    }

    #[test]
    fn load_context_invalid_json_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ctx.json");
        fs::write(&path, "not json").unwrap();

        let err = load_context(&path).unwrap_err();
        assert!(matches!(err, MissiveError::UserError(_)));
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn load_context_non_mapping_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ctx.json");
        fs::write(&path, r#"["a", "b"]"#).unwrap();

        assert!(load_context(&path).is_err());
    }
}
