use base64::Engine as _;
use rand::RngCore;
use rand::rngs::OsRng;

/// Entropy drawn per token; 32 bytes encode to a 44-char base64 value.
const TOKEN_ENTROPY_BYTES: usize = 32;

/// Generates a single-use bearer token from OS entropy.
///
/// Tokens are pairwise distinct in practice; a failing entropy source
/// aborts the process rather than surfacing as a per-attempt error.
#[must_use]
pub fn random_bearer() -> String {
    let mut bytes = [0u8; TOKEN_ENTROPY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
