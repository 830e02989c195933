//! SECRET_HASH computation for the USER_PASSWORD_AUTH flow
//!
//! Cognito app clients configured with a client secret require every
//! password-grant request to carry a proof of secret possession: the
//! base64-encoded HMAC-SHA256 of `username || client_id`, keyed by the
//! client secret.

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Compute the SECRET_HASH for a username / app client pair.
///
/// Deterministic and pure; the output is always valid standard base64 and
/// decodes to the 32-byte SHA-256 digest size.
pub fn secret_hash(username: &str, client_id: &str, client_secret: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(client_secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(username.as_bytes());
    mac.update(client_id.as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_vector() {
        // HMAC-SHA256("s3cr3t", "aliceabc123"), base64-encoded
        assert_eq!(
            secret_hash("alice", "abc123", "s3cr3t"),
            "ZgU4ker5zZiyNDjrr2orkMacXbNQCSGOseG81lQWOiA="
        );
    }

    #[test]
    fn deterministic() {
        let a = secret_hash("bob", "client-1", "hunter2");
        let b = secret_hash("bob", "client-1", "hunter2");
        assert_eq!(a, b);
    }

    #[test]
    fn output_decodes_to_sha256_digest_size() {
        let hash = secret_hash("carol", "client-2", "another-secret");
        let raw = BASE64_STANDARD.decode(&hash).unwrap();
        assert_eq!(raw.len(), 32);
    }

    #[test]
    fn distinct_inputs_produce_distinct_hashes() {
        assert_ne!(
            secret_hash("alice", "abc123", "s3cr3t"),
            secret_hash("alice", "abc124", "s3cr3t")
        );
        assert_ne!(
            secret_hash("alice", "abc123", "s3cr3t"),
            secret_hash("alice", "abc123", "s3cr3u")
        );
    }
}
