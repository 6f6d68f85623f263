use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a token. Only digests are persisted, never raw tokens.
pub fn digest_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compares `token` against a stored digest without short-circuiting on the
/// first differing byte.
pub fn matches_digest(token: &str, stored_digest: &str) -> bool {
    let candidate = digest_token(token);
    if candidate.len() != stored_digest.len() {
        return false;
    }
    candidate
        .bytes()
        .zip(stored_digest.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
