//! API endpoint implementations
//!
//! Every exchange operation is described by one [`Endpoint`] table entry
//! (path, HTTP method, authentication requirement). The wrapper methods in
//! the submodules only format parameters and hand the entry to the client's
//! executor, so the request/signing logic exists in exactly one place.

pub mod account;
pub mod funding;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use funding::FundingEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

/// HTTP method of a table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
}

/// Whether an endpoint requires credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    Public,
    Private,
}

/// One exchange operation
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint {
    /// URL path segment, e.g. `/api/v3/sendorder`
    pub path: &'static str,
    pub method: Method,
    pub auth: Auth,
}

impl Endpoint {
    const fn get(path: &'static str, auth: Auth) -> Self {
        Self {
            path,
            method: Method::Get,
            auth,
        }
    }

    const fn post(path: &'static str, auth: Auth) -> Self {
        Self {
            path,
            method: Method::Post,
            auth,
        }
    }
}

// Public market data
pub(crate) const INSTRUMENTS: Endpoint = Endpoint::get("/api/v3/instruments", Auth::Public);
pub(crate) const TICKERS: Endpoint = Endpoint::get("/api/v3/tickers", Auth::Public);
pub(crate) const ORDERBOOK: Endpoint = Endpoint::get("/api/v3/orderbook", Auth::Public);
pub(crate) const HISTORY: Endpoint = Endpoint::get("/api/v3/history", Auth::Public);

// Account
pub(crate) const ACCOUNTS: Endpoint = Endpoint::get("/api/v3/accounts", Auth::Private);
pub(crate) const OPEN_ORDERS: Endpoint = Endpoint::get("/api/v3/openorders", Auth::Private);
pub(crate) const FILLS: Endpoint = Endpoint::get("/api/v3/fills", Auth::Private);
pub(crate) const OPEN_POSITIONS: Endpoint = Endpoint::get("/api/v3/openpositions", Auth::Private);
pub(crate) const RECENT_ORDERS: Endpoint = Endpoint::get("/api/v3/recentorders", Auth::Private);
pub(crate) const NOTIFICATIONS: Endpoint = Endpoint::get("/api/v3/notifications", Auth::Private);

// Trading
pub(crate) const SEND_ORDER: Endpoint = Endpoint::post("/api/v3/sendorder", Auth::Private);
pub(crate) const EDIT_ORDER: Endpoint = Endpoint::post("/api/v3/editorder", Auth::Private);
pub(crate) const CANCEL_ORDER: Endpoint = Endpoint::post("/api/v3/cancelorder", Auth::Private);
pub(crate) const CANCEL_ALL_ORDERS: Endpoint =
    Endpoint::post("/api/v3/cancelallorders", Auth::Private);
pub(crate) const CANCEL_ALL_ORDERS_AFTER: Endpoint =
    Endpoint::post("/api/v3/cancelallordersafter", Auth::Private);
pub(crate) const BATCH_ORDER: Endpoint = Endpoint::post("/api/v3/batchorder", Auth::Private);

// Funding
pub(crate) const TRANSFERS: Endpoint = Endpoint::get("/api/v3/transfers", Auth::Private);
pub(crate) const WITHDRAWAL: Endpoint = Endpoint::post("/api/v3/withdrawal", Auth::Private);
