//! Recipient address validation.
//!
//! A format check only: one `@`, no whitespace on either side, and a dot
//! somewhere after the `@`. Deliverability is out of scope (delivery is
//! simulated anyway).

use crate::error::{MissiveError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for acceptable recipient addresses.
static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid address regex"));

/// Check whether `address` has an acceptable email format.
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_REGEX.is_match(address)
}

/// Validate a recipient address.
///
/// # Returns
///
/// * `Ok(())` - The address passes the format check
/// * `Err(MissiveError::InvalidRecipient)` - Naming the rejected address
pub fn validate_recipient(address: &str) -> Result<()> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(MissiveError::InvalidRecipient(address.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_address("john.doe@example.com"));
        assert!(is_valid_address("jane+tag@sub.example.co"));
        assert!(is_valid_address("a@b.c"));
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_valid_address("invalid-email"));
        assert!(!is_valid_address("john.doe.example.com"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_valid_address("john doe@example.com"));
        assert!(!is_valid_address("john@exa mple.com"));
        assert!(!is_valid_address(" john@example.com"));
    }

    #[test]
    fn rejects_missing_domain_dot() {
        assert!(!is_valid_address("john@example"));
    }

    #[test]
    fn rejects_multiple_at_signs() {
        assert!(!is_valid_address("john@doe@example.com"));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("@example.com"));
        assert!(!is_valid_address("john@"));
        assert!(!is_valid_address("john@.com"));
    }

    #[test]
    fn validate_names_the_rejected_address() {
        let err = validate_recipient("invalid-email").unwrap_err();
        assert!(matches!(err, MissiveError::InvalidRecipient(_)));
        assert!(err.to_string().contains("invalid-email"));
    }

    #[test]
    fn validate_passes_valid_address() {
        assert!(validate_recipient("john.doe@example.com").is_ok());
    }
}
