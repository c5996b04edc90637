/*
[INPUT]:  HTTP configuration (base URL, timeouts) and merchant credentials
[OUTPUT]: Configured gateway client owning a reqwest session
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::auth::{RequestSigner, SignValue};
use crate::http::{BetatransferError, Result};

/// Base URL for the Betatransfer merchant API
const BASE_URL: &str = "https://merchant.betatransfer.io";

// Relative so that a path prefix on the base URL is kept
const ACCOUNT_INFO_PATH: &str = "api/account-info";
const HISTORY_PATH: &str = "api/history";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Default timeouts against a different host (staging, mock servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Merchant API tokens
///
/// The public token travels with every request; the private token only
/// feeds the signature and never leaves the process.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_token: String,
    private_token: String,
}

impl Credentials {
    pub fn new(public_token: impl Into<String>, private_token: impl Into<String>) -> Self {
        Self {
            public_token: public_token.into(),
            private_token: private_token.into(),
        }
    }

    pub fn public_token(&self) -> &str {
        &self.public_token
    }

    pub fn private_token(&self) -> &str {
        &self.private_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_token", &self.public_token)
            .field("private_token", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Betatransfer merchant API
///
/// Owns its transport session. Operations take `&self` and may run
/// concurrently; release the session with [`BetatransferClient::close`].
#[derive(Debug)]
pub struct BetatransferClient {
    http_client: Client,
    account_info_url: Url,
    history_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
}

impl BetatransferClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| BetatransferError::Config(format!("failed to build HTTP client: {err}")))?;

        Self::with_http_client(credentials, config, http_client)
    }

    /// Create a client on top of an existing session
    ///
    /// `reqwest::Client` is a pooled handle, so several gateway clients
    /// can share one. Timeouts in `config` are ignored here; they belong
    /// to whoever built `http_client`.
    pub fn with_http_client(
        credentials: Credentials,
        config: ClientConfig,
        http_client: Client,
    ) -> Result<Self> {
        let base_url = base_url_as_directory(&config.base_url)?;
        let signer = RequestSigner::new(credentials.private_token());

        Ok(Self {
            http_client,
            account_info_url: base_url.join(ACCOUNT_INFO_PATH)?,
            history_url: base_url.join(HISTORY_PATH)?,
            credentials,
            signer,
        })
    }

    /// Get the credentials this client signs with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn public_token(&self) -> &str {
        self.credentials.public_token()
    }

    pub(crate) fn account_info_url(&self) -> &Url {
        &self.account_info_url
    }

    pub(crate) fn history_url(&self) -> &Url {
        &self.history_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http_client
    }

    /// Sign values in the order given
    pub(crate) fn sign(&self, values: &[SignValue]) -> String {
        debug!(signed_values = values.len(), "signing request");
        self.signer.sign(values)
    }

    /// Send a request and decode the JSON body into `T`
    ///
    /// Non-2xx and non-JSON bodies are transport errors; JSON that does not
    /// fit `T` is a protocol error.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<T> {
        let value = self.send_value(operation, builder).await?;
        serde_json::from_value(value).map_err(|err| {
            warn!(operation, error = %err, "response does not match schema");
            BetatransferError::protocol(operation, err.to_string())
        })
    }

    pub(crate) async fn send_value(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(operation, status = status.as_u16(), "gateway returned error status");
            return Err(BetatransferError::status_error(status, body));
        }

        debug!(operation, status = status.as_u16(), bytes = body.len(), "response received");
        serde_json::from_str(&body).map_err(BetatransferError::InvalidJson)
    }

    /// Release the transport session
    ///
    /// Consumes the client, so no operation can run on a closed session.
    /// Pooled connections shut down once the last clone of the session is
    /// dropped.
    pub fn close(self) {
        info!(endpoint = %self.account_info_url.origin().ascii_serialization(), "closing gateway client");
        drop(self.http_client);
    }
}

/// Parse the base URL so that relative joins append to its path
fn base_url_as_directory(raw: &str) -> Result<Url> {
    let mut base_url = Url::parse(raw)?;
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    Ok(base_url)
}
