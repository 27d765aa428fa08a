//! AES-256-CFB envelope tokens.
//!
//! A token is `base64url(salt || iv || ciphertext [|| tag])`. The salt and IV
//! are drawn fresh from the OS random source on every call, so encrypting the
//! same plaintext twice gives two different tokens. CFB is a stream mode:
//! the ciphertext is exactly as long as the plaintext.
//!
//! In the [`TokenFormat::Sealed`] layout a 32-byte HMAC-SHA256 tag over
//! `salt || iv || ciphertext` is appended, keyed by an HKDF expansion of the
//! derived key. [`TokenFormat::Legacy`] has no tag, and decrypting with the
//! wrong password returns garbage instead of failing.

use aes::cipher::{AsyncStreamCipher, KeyIvInit};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use strongbox_core::TokenFormat;
use zeroize::Zeroizing;

use crate::error::{Result, VaultError};
use crate::kdf::{self, SALT_LEN};

/// IV length in bytes (one AES block).
pub const IV_LEN: usize = 16;

/// Length of the sealed-format HMAC-SHA256 tag.
pub const TAG_LEN: usize = 32;

/// HKDF info string for the tag key.
const MAC_INFO: &[u8] = b"strongbox-envelope-mac-v1";

type Aes256CfbEnc = cfb_mode::Encryptor<aes::Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<aes::Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Encrypts and decrypts self-describing envelope tokens.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeCodec {
    format: TokenFormat,
    rounds: u32,
}

impl Default for EnvelopeCodec {
    fn default() -> Self {
        Self::new(TokenFormat::default())
    }
}

impl EnvelopeCodec {
    /// Codec for `format` using the production PBKDF2 round count.
    pub fn new(format: TokenFormat) -> Self {
        Self {
            format,
            rounds: kdf::PBKDF2_ROUNDS,
        }
    }

    /// Override the PBKDF2 round count. Tokens written with one count cannot
    /// be read with another.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn format(&self) -> TokenFormat {
        self.format
    }

    /// Smallest decoded length a well-formed token can have.
    pub fn min_token_len(&self) -> usize {
        match self.format {
            TokenFormat::Legacy => SALT_LEN + IV_LEN,
            TokenFormat::Sealed => SALT_LEN + IV_LEN + TAG_LEN,
        }
    }

    /// Encrypt `plaintext` under `password` into a new token.
    pub fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> Result<String> {
        let mut salt = [0u8; SALT_LEN];
        fill_random(&mut salt)?;
        let mut iv = [0u8; IV_LEN];
        fill_random(&mut iv)?;

        let key = kdf::derive_with_rounds(password, &salt, self.rounds);

        let mut body = plaintext.to_vec();
        Aes256CfbEnc::new_from_slices(&key[..], &iv)
            .map_err(|e| VaultError::MalformedToken(format!("cipher init failed: {e}")))?
            .encrypt(&mut body);

        let mut combined = Vec::with_capacity(self.min_token_len() + body.len());
        combined.extend_from_slice(&salt);
        combined.extend_from_slice(&iv);
        combined.extend_from_slice(&body);

        if self.format == TokenFormat::Sealed {
            let tag = mac_for(&key[..])?.chain_update(&combined).finalize().into_bytes();
            combined.extend_from_slice(&tag);
        }

        Ok(URL_SAFE.encode(combined))
    }

    /// Decrypt a token produced by [`encrypt`](Self::encrypt).
    ///
    /// The key is derived from the supplied password and the salt embedded
    /// in the token.
    pub fn decrypt(&self, token: &str, password: &[u8]) -> Result<Vec<u8>> {
        let data = URL_SAFE
            .decode(token.trim())
            .map_err(|e| VaultError::MalformedToken(format!("base64 decode failed: {e}")))?;

        let min = self.min_token_len();
        if data.len() < min {
            return Err(VaultError::MalformedToken(format!(
                "token is {} bytes, need at least {min}",
                data.len()
            )));
        }

        let (salt, rest) = data.split_at(SALT_LEN);
        let (iv, rest) = rest.split_at(IV_LEN);
        let key = kdf::derive_with_rounds(password, salt, self.rounds);

        let ciphertext = match self.format {
            TokenFormat::Legacy => rest,
            TokenFormat::Sealed => {
                let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);
                mac_for(&key[..])?
                    .chain_update(&data[..data.len() - TAG_LEN])
                    .verify_slice(tag)
                    .map_err(|_| VaultError::IntegrityCheckFailed)?;
                ciphertext
            }
        };

        let mut plaintext = ciphertext.to_vec();
        Aes256CfbDec::new_from_slices(&key[..], iv)
            .map_err(|e| VaultError::MalformedToken(format!("cipher init failed: {e}")))?
            .decrypt(&mut plaintext);

        Ok(plaintext)
    }
}

/// Fill `buf` from the OS random source.
fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| VaultError::RandomnessUnavailable(e.to_string()))
}

/// HMAC keyed by the HKDF expansion of the derived key.
fn mac_for(key: &[u8]) -> Result<HmacSha256> {
    let mut mac_key = Zeroizing::new([0u8; 32]);
    Hkdf::<Sha256>::new(None, key)
        .expand(MAC_INFO, &mut mac_key[..])
        .map_err(|e| VaultError::MalformedToken(format!("tag key expansion failed: {e}")))?;
    <HmacSha256 as Mac>::new_from_slice(&mac_key[..])
        .map_err(|e| VaultError::MalformedToken(format!("tag key rejected: {e}")))
}
