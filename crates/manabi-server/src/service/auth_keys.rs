//! Cryptographic keys for authentication token handling.

use std::fmt;
use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey};

/// Shared-secret keys used to sign and verify authentication tokens.
///
/// Both keys are derived from the same HMAC secret and are cheap to clone.
#[must_use]
#[derive(Clone)]
pub struct AuthKeys {
    inner: Arc<AuthKeysInner>,
}

struct AuthKeysInner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthKeys {
    /// Creates authentication keys from the given HMAC secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        let inner = AuthKeysInner {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns the key used for signing tokens.
    #[inline]
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.inner.encoding_key
    }

    /// Returns the key used for verifying token signatures.
    #[inline]
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.inner.decoding_key
    }
}

impl fmt::Debug for AuthKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthKeys").finish_non_exhaustive()
    }
}
