/*
[INPUT]:  Canonical query strings and the account API secret
[OUTPUT]: Hex-encoded HMAC-SHA256 request signatures
[POS]:    HTTP layer - request signing for signed endpoints
[UPDATE]: When changing signing algorithm or parameter format
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs request query strings for USER_DATA/TRADE endpoints
#[derive(Clone)]
pub struct RequestSigner {
    api_secret: String,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a new request signer with the given API secret
    pub fn new(api_secret: impl Into<String>) -> Self {
        Self {
            api_secret: api_secret.into(),
        }
    }

    /// Sign a canonical query string per the Binance signed-endpoint rules
    ///
    /// Payload: the full query string including `timestamp` (and
    /// `recvWindow` when present). Returns the hex-encoded signature to be
    /// appended as the `signature` query parameter.
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
