//! Password-based key derivation.
//!
//! PBKDF2-HMAC-SHA256 with a fixed 100,000 rounds and a 32-byte output.
//! The same (password, salt) pair always yields the same key; the salt is
//! fresh per token, so no two tokens share a key.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Salt length in bytes, stored at the front of every token.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count for all production tokens.
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// A derived key, wiped from memory on drop.
pub type DerivedKey = Zeroizing<[u8; KEY_LEN]>;

/// Derive the key for `password` and `salt` with the production round count.
pub fn derive(password: &[u8], salt: &[u8]) -> DerivedKey {
    derive_with_rounds(password, salt, PBKDF2_ROUNDS)
}

/// Derive a key with an explicit round count.
///
/// Empty passwords are accepted and simply produce a weak key.
pub fn derive_with_rounds(password: &[u8], salt: &[u8], rounds: u32) -> DerivedKey {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut key[..]);
    key
}
