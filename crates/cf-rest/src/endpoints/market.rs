//! Public market data endpoints
//!
//! These endpoints don't require authentication, although a client with
//! credentials configured signs them anyway, as the server allows.

use crate::client::CfRestClient;
use crate::error::RestResult;
use crate::params::{format_timestamp, Params};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a CfRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a CfRestClient) -> Self {
        Self { client }
    }

    /// Get all instruments with specifications
    #[instrument(skip(self))]
    pub async fn get_instruments(&self) -> RestResult<String> {
        debug!("Fetching instruments");
        self.client.execute(&super::INSTRUMENTS, "", "").await
    }

    /// Get market data for all instruments
    #[instrument(skip(self))]
    pub async fn get_tickers(&self) -> RestResult<String> {
        debug!("Fetching tickers");
        self.client.execute(&super::TICKERS, "", "").await
    }

    /// Get the entire order book for a futures contract
    ///
    /// # Arguments
    /// * `symbol` - Instrument symbol (e.g., "PI_XBTUSD")
    #[instrument(skip(self))]
    pub async fn get_orderbook(&self, symbol: &str) -> RestResult<String> {
        let query = Params::new().push("symbol", symbol).encode();
        debug!("Fetching orderbook for {}", symbol);
        self.client.execute(&super::ORDERBOOK, &query, "").await
    }

    /// Get historical data for futures and indices
    ///
    /// # Arguments
    /// * `symbol` - Instrument symbol (e.g., "PI_XBTUSD")
    /// * `last_time` - Only return entries before this time (optional)
    #[instrument(skip(self))]
    pub async fn get_history(
        &self,
        symbol: &str,
        last_time: Option<DateTime<Utc>>,
    ) -> RestResult<String> {
        let query = Params::new()
            .push("symbol", symbol)
            .push_opt("lastTime", last_time.map(format_timestamp))
            .encode();
        debug!("Fetching history for {}", symbol);
        self.client.execute(&super::HISTORY, &query, "").await
    }
}
