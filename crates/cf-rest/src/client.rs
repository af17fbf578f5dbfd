//! Main REST client implementation

use crate::endpoints::{
    AccountEndpoints, Auth, Endpoint, FundingEndpoints, MarketEndpoints, Method, TradingEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::params::split_form;
use crate::types::{ApiVersion, EditOrder, OrderSide, OrderType};
use cf_auth::{Credentials, NonceGenerator};
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, info};

/// Default API base path
const DEFAULT_BASE_URL: &str = "https://www.cryptofacilities.com/derivatives";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Derivatives REST API client
///
/// Provides access to both public and private endpoints. Every method
/// returns the raw response body; JSON decoding is left to the caller.
///
/// # Example
///
/// ```no_run
/// use cf_rest::{CfRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CfRestClient::new();
///     let tickers = client.get_tickers().await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = CfRestClient::with_credentials(creds);
///     let accounts = auth_client.get_accounts().await?;
///
///     Ok(())
/// }
/// ```
pub struct CfRestClient {
    http_client: Client,
    base_url: String,
    credentials: Option<Credentials>,
    api_version: ApiVersion,
    nonce: NonceGenerator,
}

impl CfRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create an authenticated client from environment variables
    ///
    /// Reads `CF_API_KEY` and `CF_API_SECRET`; fails if either is missing or
    /// the secret is not valid base64.
    pub fn from_env() -> RestResult<Self> {
        let credentials = Credentials::from_env()?;
        Ok(Self::with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("cf-rest/0.1.0"))
            .danger_accept_invalid_certs(!config.verify_certificates)
            .build()
            .expect("Failed to create HTTP client");

        info!(base_url = %config.base_url, "Created derivatives REST client");

        Self {
            http_client,
            base_url: config.base_url,
            credentials: config.credentials,
            api_version: config.api_version,
            nonce: NonceGenerator::new(),
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build, sign and dispatch one request, returning the raw body text
    ///
    /// The URL is `base_url + path + "?" + post_url` (the `?` is kept even
    /// for an empty query, matching the server's expectation). When
    /// credentials are configured the signature covers exactly
    /// `post_url + post_body`. POST is used only when there is a body to
    /// upload, split into its form fields and submitted URL-encoded;
    /// body-less operations are fetched as GET against the constructed URL.
    pub(crate) async fn execute(
        &self,
        endpoint: &Endpoint,
        post_url: &str,
        post_body: &str,
    ) -> RestResult<String> {
        if endpoint.auth == Auth::Private && self.credentials.is_none() {
            return Err(RestError::AuthRequired);
        }

        let url = format!("{}{}?{}", self.base_url, endpoint.path, post_url);

        let has_body = endpoint.method == Method::Post && !post_body.is_empty();
        let mut request = if has_body {
            self.http_client.post(&url)
        } else {
            self.http_client.get(&url)
        };

        if let Some(credentials) = &self.credentials {
            let post_data = format!("{}{}", post_url, post_body);
            let nonce = match self.api_version {
                ApiVersion::V2 => self.nonce.next(),
                ApiVersion::V3 => String::new(),
            };
            let signature = credentials.sign(endpoint.path, &nonce, &post_data);

            request = request
                .header("APIKey", credentials.api_key())
                .header("Authent", signature);
            if self.api_version == ApiVersion::V2 {
                request = request.header("Nonce", nonce);
            }
        }

        if has_body {
            let fields = split_form(post_body);
            let encoded = serde_urlencoded::to_string(&fields)
                .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
            request = request
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(encoded);
        }

        let verb = if has_body { "POST" } else { "GET" };
        debug!(method = verb, path = endpoint.path, "Dispatching request");

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get all instruments with specifications
    pub async fn get_instruments(&self) -> RestResult<String> {
        self.market().get_instruments().await
    }

    /// Get market data for all instruments
    pub async fn get_tickers(&self) -> RestResult<String> {
        self.market().get_tickers().await
    }

    /// Get the entire order book for a futures contract
    pub async fn get_orderbook(&self, symbol: &str) -> RestResult<String> {
        self.market().get_orderbook(symbol).await
    }

    /// Get historical data for futures and indices
    pub async fn get_history(
        &self,
        symbol: &str,
        last_time: Option<DateTime<Utc>>,
    ) -> RestResult<String> {
        self.market().get_history(symbol, last_time).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(AccountEndpoints::new(self))
    }

    /// Get key account information
    pub async fn get_accounts(&self) -> RestResult<String> {
        self.account()?.get_accounts().await
    }

    /// Get all open orders
    pub async fn get_open_orders(&self) -> RestResult<String> {
        self.account()?.get_open_orders().await
    }

    /// Get filled orders, optionally only those after `last_fill_time`
    pub async fn get_fills(&self, last_fill_time: Option<DateTime<Utc>>) -> RestResult<String> {
        self.account()?.get_fills(last_fill_time).await
    }

    /// Get all open positions
    pub async fn get_open_positions(&self) -> RestResult<String> {
        self.account()?.get_open_positions().await
    }

    /// Get recent orders, optionally filtered by symbol
    pub async fn get_recent_orders(&self, symbol: Option<&str>) -> RestResult<String> {
        self.account()?.get_recent_orders(symbol).await
    }

    /// Get platform notifications
    pub async fn get_notifications(&self) -> RestResult<String> {
        self.account()?.get_notifications().await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(TradingEndpoints::new(self))
    }

    /// Place an order
    pub async fn send_order(
        &self,
        order_type: OrderType,
        symbol: &str,
        side: OrderSide,
        size: Decimal,
        limit_price: Decimal,
        stop_price: Option<Decimal>,
    ) -> RestResult<String> {
        self.trading()?
            .send_order(order_type, symbol, side, size, limit_price, stop_price)
            .await
    }

    /// Edit an existing order
    pub async fn edit_order(&self, edit: &EditOrder) -> RestResult<String> {
        self.trading()?.edit_order(edit).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<String> {
        self.trading()?.cancel_order(order_id).await
    }

    /// Cancel all open orders
    pub async fn cancel_all_orders(&self) -> RestResult<String> {
        self.trading()?.cancel_all_orders().await
    }

    /// Dead man's switch: cancel all orders unless re-armed within `timeout_secs`
    pub async fn cancel_all_orders_after(&self, timeout_secs: u32) -> RestResult<String> {
        self.trading()?.cancel_all_orders_after(timeout_secs).await
    }

    /// Place or cancel orders in batch from a JSON document
    pub async fn send_batch_order(&self, batch: &serde_json::Value) -> RestResult<String> {
        self.trading()?.send_batch_order(batch).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(FundingEndpoints::new(self))
    }

    /// Get transfers, optionally only those after `last_transfer_time`
    pub async fn get_transfers(
        &self,
        last_transfer_time: Option<DateTime<Utc>>,
    ) -> RestResult<String> {
        self.funding()?.get_transfers(last_transfer_time).await
    }

    /// Request a withdrawal to the given address
    pub async fn send_withdrawal(
        &self,
        target_address: &str,
        currency: &str,
        amount: Decimal,
    ) -> RestResult<String> {
        self.funding()?
            .send_withdrawal(target_address, currency, amount)
            .await
    }
}

impl Default for CfRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CfRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CfRestClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base path, e.g. `https://www.cryptofacilities.com/derivatives`
    pub base_url: String,
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Verify TLS certificates (disable only against test environments)
    pub verify_certificates: bool,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Protocol variant spoken by the server
    pub api_version: ApiVersion,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: None,
            verify_certificates: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            api_version: ApiVersion::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base path
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Enable or disable TLS certificate verification for this client only
    pub fn with_certificate_verification(mut self, verify: bool) -> Self {
        self.verify_certificates = verify;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the protocol variant
    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }
}
