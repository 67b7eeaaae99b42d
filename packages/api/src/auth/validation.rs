//! Form checks for the login and register pages.

use crate::error::RequestError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Check a registration form. Mismatched passwords are reported before length.
pub fn validate_registration(username: &str, password: &str, confirm: &str) -> Result<(), RequestError> {
    if username.trim().is_empty() {
        return Err(invalid("Username is required"));
    }
    if password != confirm {
        return Err(invalid("Passwords do not match"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid(&format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

pub fn validate_login(username: &str, password: &str) -> Result<(), RequestError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(invalid("Username and password are required"));
    }
    Ok(())
}

fn invalid(message: &str) -> RequestError {
    RequestError::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password() {
        let err = validate_registration("ada", "short", "short").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters");
    }

    #[test]
    fn test_mismatch() {
        let err = validate_registration("ada", "longenough", "longenougH").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_exactly_min_length() {
        assert!(validate_registration("ada", "12345678", "12345678").is_ok());
        assert!(validate_registration("ada", "1234567", "1234567").is_err());
    }

    #[test]
    fn test_login_requires_fields() {
        assert!(validate_login("  ", "secret").is_err());
        assert!(validate_login("ada", "").is_err());
        assert!(validate_login("ada", "x").is_ok());
    }
}
