//! Private funding endpoints: transfers and withdrawals
//!
//! These endpoints require authentication.

use crate::client::CfRestClient;
use crate::error::RestResult;
use crate::params::{format_timestamp, Params};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Private funding endpoints
pub struct FundingEndpoints<'a> {
    client: &'a CfRestClient,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(client: &'a CfRestClient) -> Self {
        Self { client }
    }

    /// Get transfers
    ///
    /// # Arguments
    /// * `last_transfer_time` - Only return transfers after this time (optional)
    #[instrument(skip(self))]
    pub async fn get_transfers(
        &self,
        last_transfer_time: Option<DateTime<Utc>>,
    ) -> RestResult<String> {
        let query = Params::new()
            .push_opt("lastTransferTime", last_transfer_time.map(format_timestamp))
            .encode();
        debug!("Fetching transfers");
        self.client.execute(&super::TRANSFERS, &query, "").await
    }

    /// Request a withdrawal
    ///
    /// # Arguments
    /// * `target_address` - Destination address
    /// * `currency` - Currency to withdraw (e.g., "xbt")
    /// * `amount` - Amount to withdraw
    #[instrument(skip(self, target_address))]
    pub async fn send_withdrawal(
        &self,
        target_address: &str,
        currency: &str,
        amount: Decimal,
    ) -> RestResult<String> {
        let body = Params::new()
            .push("targetAddress", target_address)
            .push("currency", currency)
            .push("amount", amount)
            .encode();
        debug!("Requesting {} {} withdrawal", amount, currency);
        self.client.execute(&super::WITHDRAWAL, "", &body).await
    }
}
