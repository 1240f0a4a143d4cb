/*
[INPUT]:  HTTP configuration (base URLs, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::signature::RequestSigner;
use crate::http::{BinanceError, Result};
use crate::http::error::ApiErrorBody;
use crate::types::Network;
use chrono::Utc;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Base URLs for the Binance USDT-M futures API
const LIVE_BASE_URL: &str = "https://fapi.binance.com";
const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Header carrying the API key on signed requests
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Milliseconds the exchange will accept a signed request after its
    /// timestamp (`recvWindow` parameter)
    pub recv_window: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            recv_window: 5000,
        }
    }
}

/// Credentials for signed requests
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .finish()
    }
}

/// HTTP client for the Binance USDT-M futures REST API
#[derive(Debug)]
pub struct FuturesClient {
    http_client: Client,
    base_url: Url,
    recv_window: u64,
    credentials: Option<Credentials>,
    signer: Option<RequestSigner>,
}

impl FuturesClient {
    /// Create a new client for the given network with default configuration
    pub fn new(network: Network) -> Result<Self> {
        Self::with_config(ClientConfig::default(), network)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, network: Network) -> Result<Self> {
        let base_url = match network {
            Network::Live => LIVE_BASE_URL,
            Network::Testnet => TESTNET_BASE_URL,
        };
        Self::with_config_and_base_url(config, base_url)
    }

    /// Create a new client against an explicit base URL (mock servers,
    /// alternate gateways)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            recv_window: config.recv_window,
            credentials: None,
            signer: None,
        })
    }

    /// Set credentials for signed requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.signer = Some(RequestSigner::new(credentials.api_secret.clone()));
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Build a request for a public (unsigned) endpoint
    pub(crate) fn public_request<P: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        params: &P,
    ) -> Result<RequestBuilder> {
        let query = serde_urlencoded::to_string(params)?;
        let mut url = self.base_url.join(endpoint)?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(self.http_client.request(method, url))
    }

    /// Build a request for a signed (USER_DATA/TRADE) endpoint
    ///
    /// Appends `recvWindow`, `timestamp`, and the HMAC `signature` to the
    /// query string, and attaches the API-key header.
    pub(crate) fn signed_request<P: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        params: &P,
    ) -> Result<RequestBuilder> {
        let (credentials, signer) = match (&self.credentials, &self.signer) {
            (Some(credentials), Some(signer)) => (credentials, signer),
            _ => return Err(BinanceError::MissingCredentials),
        };

        let mut query = serde_urlencoded::to_string(params)?;
        if !query.is_empty() {
            query.push('&');
        }
        let timestamp = Utc::now().timestamp_millis();
        query.push_str(&format!(
            "recvWindow={}&timestamp={}",
            self.recv_window, timestamp
        ));

        let signature = signer.sign(&query);
        query.push_str(&format!("&signature={signature}"));

        let mut url = self.base_url.join(endpoint)?;
        url.set_query(Some(&query));

        Ok(self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, &credentials.api_key))
    }

    /// Send a request and deserialize the JSON response
    ///
    /// Non-2xx responses carrying Binance's `{code, msg}` body are mapped
    /// to [`BinanceError::Api`].
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(err) => Err(BinanceError::Api {
                    code: err.code,
                    message: err.msg,
                }),
                Err(_) => Err(BinanceError::api_error(status, body)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> FuturesClient {
        FuturesClient::new(Network::Testnet).expect("client init")
    }

    #[test]
    fn test_network_selects_base_url() {
        let live = FuturesClient::new(Network::Live).expect("client init");
        assert_eq!(live.base_url.as_str(), "https://fapi.binance.com/");

        let testnet = test_client();
        assert_eq!(
            testnet.base_url.as_str(),
            "https://testnet.binancefuture.com/"
        );
    }

    #[test]
    fn test_signed_request_requires_credentials() {
        let client = test_client();
        let err = client
            .signed_request(Method::GET, "/fapi/v2/account", &[] as &[(&str, &str)])
            .err()
            .expect("should fail without credentials");
        assert!(matches!(err, BinanceError::MissingCredentials));
    }

    #[test]
    fn test_credentials_roundtrip() {
        let mut client = test_client();
        client.set_credentials(Credentials {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
        });

        let stored = client.credentials().expect("credentials should be set");
        assert_eq!(stored.api_key, "key");
        assert_eq!(stored.api_secret, "secret");
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = Credentials {
            api_key: "key-material".to_string(),
            api_secret: "secret-material".to_string(),
        };
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("key-material"));
        assert!(!rendered.contains("secret-material"));
    }
}
