//! Client-side form validation.
//!
//! Validation failures block the request entirely: no call reaches the
//! network for empty, whitespace-only, short, or malformed input.

/// A required text input: non-empty after trimming.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub const MIN_PASSWORD_LEN: usize = 6;

/// `local@domain.tld` shape: no whitespace, a non-empty local part, and a
/// dotted domain with text on both sides of the last dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// Validate the registration form, returning the first failing rule's
/// user-facing message.
pub fn validate_registration(email: &str, username: &str, password: &str) -> Result<(), String> {
    if !required(email) || !required(username) || !required(password) {
        return Err("All fields are required.".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters long.".to_string());
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_empty_and_whitespace() {
        assert!(!required(""));
        assert!(!required("   "));
        assert!(!required("\t\n"));
        assert!(required("milk"));
        assert!(required("  milk  "));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("ann@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ann@.com"));
        assert!(!is_valid_email("ann@example."));
        assert!(!is_valid_email("ann smith@example.com"));
        assert!(!is_valid_email("ann@exa mple.com"));
    }

    #[test]
    fn test_registration_requires_all_fields() {
        let err = validate_registration("", "ann", "secret1").unwrap_err();
        assert_eq!(err, "All fields are required.");

        let err = validate_registration("a@b.co", "  ", "secret1").unwrap_err();
        assert_eq!(err, "All fields are required.");

        let err = validate_registration("a@b.co", "ann", "").unwrap_err();
        assert_eq!(err, "All fields are required.");
    }

    #[test]
    fn test_registration_short_password() {
        let err = validate_registration("a@b.co", "ann", "abc").unwrap_err();
        assert_eq!(err, "Password must be at least 6 characters long.");
    }

    #[test]
    fn test_registration_malformed_email() {
        let err = validate_registration("not-an-email", "ann", "secret1").unwrap_err();
        assert_eq!(err, "Please enter a valid email address.");
    }

    #[test]
    fn test_registration_accepts_valid_input() {
        assert!(validate_registration("a@b.co", "ann", "secret1").is_ok());
    }

    #[test]
    fn test_rule_ordering_matches_messages() {
        // An input failing several rules reports the emptiness first,
        // then password length, then email shape.
        assert_eq!(
            validate_registration("", "", "").unwrap_err(),
            "All fields are required."
        );
        assert_eq!(
            validate_registration("bad", "ann", "abc").unwrap_err(),
            "Password must be at least 6 characters long."
        );
    }
}
