use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error("Password must be no more than 128 characters long")]
    TooLong,
    #[error("Password must contain at least one letter")]
    NoLetter,
    #[error("Password must contain at least one number")]
    NoNumber,
    #[error("Failed to hash password")]
    HashingFailed,
    #[error("Failed to verify password")]
    VerificationFailed,
}

/// Validate password strength before hashing
pub fn validate_password_strength(password: &str) -> Result<(), PasswordError> {
    if password.len() < 8 {
        return Err(PasswordError::TooShort);
    }

    if password.len() > 128 {
        return Err(PasswordError::TooLong);
    }

    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err(PasswordError::NoLetter);
    }

    if !password.chars().any(|c| c.is_numeric()) {
        return Err(PasswordError::NoNumber);
    }

    Ok(())
}

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    validate_password_strength(password)?;

    hash(password, DEFAULT_COST).map_err(|_| PasswordError::HashingFailed)
}

/// Verify a password against a bcrypt hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PasswordError> {
    verify(password, password_hash).map_err(|_| PasswordError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("sensible-pw-1").unwrap();

        assert!(verify_password("sensible-pw-1", &hash).unwrap());
        assert!(!verify_password("wrong-password-1", &hash).unwrap());
    }

    #[test]
    fn test_password_policy() {
        assert!(matches!(
            validate_password_strength("sh0rt"),
            Err(PasswordError::TooShort)
        ));
        assert!(matches!(
            validate_password_strength("12345678"),
            Err(PasswordError::NoLetter)
        ));
        assert!(matches!(
            validate_password_strength("onlyletters"),
            Err(PasswordError::NoNumber)
        ));
        assert!(validate_password_strength("sensible-pw-1").is_ok());
    }
}
