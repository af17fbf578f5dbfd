//! Request-side types
//!
//! The client carries no response models — bodies come back as raw text —
//! so the types here only describe what goes out on the wire.

use rust_decimal::Decimal;
use serde::Serialize;

/// Protocol variant spoken by the server
///
/// V3 signs `post_data + endpoint` with no nonce. V2 additionally requires a
/// strictly increasing nonce, signed between the data and the endpoint path
/// and sent in the `Nonce` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Legacy variant with a per-request nonce
    V2,
    /// Current variant, no nonce
    #[default]
    V3,
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Stop order (requires a stop price)
    Stop,
}

impl OrderType {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "lmt",
            Self::Stop => "stp",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields for the edit-order endpoint
///
/// Serialized to JSON and embedded as a single `json=` form parameter.
/// Absent fields are omitted from the payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOrder {
    /// ID of the order to edit
    pub order_id: String,
    /// New size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Decimal>,
    /// New limit price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Decimal>,
    /// New stop price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
}

impl EditOrder {
    /// Start an edit for the given order, with no field changes yet
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            size: None,
            limit_price: None,
            stop_price: None,
        }
    }

    /// Set the new size
    pub fn with_size(mut self, size: Decimal) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the new limit price
    pub fn with_limit_price(mut self, limit_price: Decimal) -> Self {
        self.limit_price = Some(limit_price);
        self
    }

    /// Set the new stop price
    pub fn with_stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }
}
