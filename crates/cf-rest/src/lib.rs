//! REST API client for the Crypto Facilities / Kraken Futures derivatives exchange
//!
//! This crate provides one method per exchange endpoint: market data,
//! order placement and cancellation, account, position and transfer queries.
//!
//! Every method returns the raw response body as text. The exchange returns
//! JSON, but decoding it is deliberately left to the caller — this client
//! only guarantees that the request reaches the wire correctly signed.
//!
//! # Authentication
//!
//! Private endpoints are signed with HMAC-SHA512 over a SHA-256 digest of the
//! request data, keyed by the base64-decoded API secret (see `cf-auth`). The
//! signature travels in the `Authent` header next to `APIKey` and, under the
//! V2 protocol variant, `Nonce`.
//!
//! # Example
//!
//! ```no_run
//! use cf_rest::{CfRestClient, ClientConfig, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints only
//!     let client = CfRestClient::new();
//!     let instruments = client.get_instruments().await?;
//!     println!("{}", instruments);
//!
//!     // With authentication for private endpoints
//!     let creds = Credentials::from_env()?;
//!     let auth_client = CfRestClient::with_credentials(creds);
//!     let accounts = auth_client.get_accounts().await?;
//!     println!("{}", accounts);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod types;

// Re-export main types
pub use cf_auth::Credentials;
pub use client::{CfRestClient, ClientConfig};
pub use error::{RestError, RestResult};
pub use types::{ApiVersion, EditOrder, OrderSide, OrderType};
