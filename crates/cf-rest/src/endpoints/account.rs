//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::client::CfRestClient;
use crate::error::RestResult;
use crate::params::{format_timestamp, Params};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a CfRestClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a CfRestClient) -> Self {
        Self { client }
    }

    /// Get key account information
    #[instrument(skip(self))]
    pub async fn get_accounts(&self) -> RestResult<String> {
        self.client.execute(&super::ACCOUNTS, "", "").await
    }

    /// Get all open orders
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self) -> RestResult<String> {
        self.client.execute(&super::OPEN_ORDERS, "", "").await
    }

    /// Get filled orders
    ///
    /// # Arguments
    /// * `last_fill_time` - Only return fills after this time (optional)
    #[instrument(skip(self))]
    pub async fn get_fills(&self, last_fill_time: Option<DateTime<Utc>>) -> RestResult<String> {
        let query = Params::new()
            .push_opt("lastFillTime", last_fill_time.map(format_timestamp))
            .encode();
        debug!("Fetching fills");
        self.client.execute(&super::FILLS, &query, "").await
    }

    /// Get all open positions
    #[instrument(skip(self))]
    pub async fn get_open_positions(&self) -> RestResult<String> {
        self.client.execute(&super::OPEN_POSITIONS, "", "").await
    }

    /// Get recent orders
    ///
    /// # Arguments
    /// * `symbol` - Restrict to one instrument (optional)
    #[instrument(skip(self))]
    pub async fn get_recent_orders(&self, symbol: Option<&str>) -> RestResult<String> {
        let query = Params::new().push_opt("symbol", symbol).encode();
        self.client.execute(&super::RECENT_ORDERS, &query, "").await
    }

    /// Get platform notifications
    #[instrument(skip(self))]
    pub async fn get_notifications(&self) -> RestResult<String> {
        self.client.execute(&super::NOTIFICATIONS, "", "").await
    }
}
