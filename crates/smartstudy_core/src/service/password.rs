//! Credential hashing.
//!
//! New passwords are stored as Argon2 PHC strings. Rows written by older
//! releases hold plaintext; they still verify and get upgraded on login.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand_core::OsRng;

pub(crate) fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| err.to_string())
}

/// Checks `password` against a stored PHC string or legacy plaintext.
///
/// Anything that does not parse as a PHC string is compared as plaintext.
pub(crate) fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => password == stored,
    }
}

pub(crate) fn is_hashed(stored: &str) -> bool {
    PasswordHash::new(stored).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{hash_password, is_hashed, verify_password};

    #[test]
    fn hashed_password_verifies_only_itself() {
        let stored = hash_password("chapter-one").unwrap();
        assert!(is_hashed(&stored));
        assert!(verify_password("chapter-one", &stored));
        assert!(!verify_password("chapter-two", &stored));
    }

    #[test]
    fn legacy_plaintext_still_verifies() {
        assert!(verify_password("secret", "secret"));
        assert!(!verify_password("Secret", "secret"));
        assert!(!is_hashed("secret"));
    }

    #[test]
    fn plaintext_that_looks_like_a_hash_prefix_still_verifies() {
        assert!(!is_hashed("$argon2-fan"));
        assert!(verify_password("$argon2-fan", "$argon2-fan"));
        assert!(!verify_password("x", "$argon2id$garbage"));
    }
}
