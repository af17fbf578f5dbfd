//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::client::CfRestClient;
use crate::error::{RestError, RestResult};
use crate::params::Params;
use crate::types::{EditOrder, OrderSide, OrderType};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a CfRestClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a CfRestClient) -> Self {
        Self { client }
    }

    /// Place an order
    ///
    /// # Arguments
    /// * `order_type` - Limit or stop
    /// * `symbol` - Instrument symbol (e.g., "PI_XBTUSD")
    /// * `side` - Buy or sell
    /// * `size` - Order size in contracts
    /// * `limit_price` - Limit price
    /// * `stop_price` - Stop price; required for stop orders
    #[instrument(skip(self), fields(symbol = symbol, side = %side, order_type = %order_type))]
    pub async fn send_order(
        &self,
        order_type: OrderType,
        symbol: &str,
        side: OrderSide,
        size: Decimal,
        limit_price: Decimal,
        stop_price: Option<Decimal>,
    ) -> RestResult<String> {
        if order_type == OrderType::Stop && stop_price.is_none() {
            return Err(RestError::InvalidParameter(
                "Stop orders require a stop price".to_string(),
            ));
        }

        let body = Params::new()
            .push("orderType", order_type)
            .push("symbol", symbol)
            .push("side", side)
            .push("size", size)
            .push("limitPrice", limit_price)
            .push_opt("stopPrice", stop_price)
            .encode();

        debug!("Placing {} {} order for {} {}", side, order_type, size, symbol);
        self.client.execute(&super::SEND_ORDER, "", &body).await
    }

    /// Edit an existing order
    ///
    /// The edit is serialized to JSON and submitted as a single `json=` form
    /// parameter.
    #[instrument(skip(self, edit), fields(order_id = %edit.order_id))]
    pub async fn edit_order(&self, edit: &EditOrder) -> RestResult<String> {
        let payload = serde_json::to_string(edit)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        let body = format!("json={}", payload);

        debug!("Editing order {}", edit.order_id);
        self.client.execute(&super::EDIT_ORDER, "", &body).await
    }

    /// Cancel an order
    ///
    /// # Arguments
    /// * `order_id` - ID of the order to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<String> {
        let body = Params::new().push("order_id", order_id).encode();
        debug!("Cancelling order {}", order_id);
        self.client.execute(&super::CANCEL_ORDER, "", &body).await
    }

    /// Cancel all open orders
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self) -> RestResult<String> {
        debug!("Cancelling all open orders");
        self.client.execute(&super::CANCEL_ALL_ORDERS, "", "").await
    }

    /// Dead man's switch: cancel all orders unless re-armed within the timeout
    ///
    /// The timeout travels in the query string, not the POST body.
    ///
    /// # Arguments
    /// * `timeout_secs` - Timeout in seconds (0 disables the switch)
    #[instrument(skip(self))]
    pub async fn cancel_all_orders_after(&self, timeout_secs: u32) -> RestResult<String> {
        let query = Params::new().push("timeout", timeout_secs).encode();
        debug!("Setting cancel-all-after to {} seconds", timeout_secs);
        self.client
            .execute(&super::CANCEL_ALL_ORDERS_AFTER, &query, "")
            .await
    }

    /// Place or cancel orders in batch
    ///
    /// The document is submitted as a single `json=` form parameter, e.g.
    /// `{"batchOrder": [{"order": "send", ...}, {"order": "cancel", ...}]}`.
    #[instrument(skip(self, batch))]
    pub async fn send_batch_order(&self, batch: &serde_json::Value) -> RestResult<String> {
        let body = format!("json={}", batch);
        debug!("Submitting batch order");
        self.client.execute(&super::BATCH_ORDER, "", &body).await
    }
}
