/// Outgoing port for password hashing. Synchronous by design; bcrypt work
/// happens on the worker thread that is already handling the request.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, String>;

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, String>;
}
