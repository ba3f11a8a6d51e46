/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both run on tokio's blocking pool since
 * a single hash at cost 12 takes a few hundred milliseconds.
 */

use crate::backend::error::BackendError;

/// Hash a plaintext password with a fresh salt
///
/// # Arguments
/// * `password` - Plaintext password
/// * `cost` - bcrypt work factor (4..=31)
///
/// # Errors
/// * `BackendError::Server` - invalid cost or the blocking task panicked
pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Check a plaintext password against a stored hash
///
/// A malformed hash verifies as `false` rather than erroring, so callers can
/// treat every failure as "wrong password".
pub async fn verify_password(password: String, hash: String) -> bool {
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await;
    match outcome {
        Ok(Ok(valid)) => valid,
        Ok(Err(e)) => {
            tracing::warn!("Password verification error: {}", e);
            false
        }
        Err(e) => {
            tracing::error!("Password verification task failed: {}", e);
            false
        }
    }
}
