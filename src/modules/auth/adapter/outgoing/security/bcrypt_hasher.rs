use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::application::ports::outgoing::PasswordHasher;

pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, String> {
        hash(password, DEFAULT_COST).map_err(|e| e.to_string())
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, String> {
        verify(password, hashed).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let hasher = BcryptHasher;

        let hashed = hasher.hash_password("SecurePassword123").unwrap();

        assert!(hasher.verify_password("SecurePassword123", &hashed).unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).unwrap());
    }

    #[test]
    fn invalid_hash_format_is_an_error() {
        let hasher = BcryptHasher;

        let result = hasher.verify_password("password", "invalid-hash");

        assert!(result.is_err());
    }
}
