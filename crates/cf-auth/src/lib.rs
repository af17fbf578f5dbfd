//! Authentication primitives for the Crypto Facilities derivatives REST API
//!
//! Private endpoints are authenticated with three headers: the API key, an
//! optional nonce (protocol-version dependent) and a message signature. The
//! signature chain is:
//!
//! 1. SHA-256 over `post_data + nonce + endpoint_path` (UTF-8, no separators)
//! 2. HMAC-SHA512 over that digest, keyed with the base64-decoded API secret
//! 3. base64-encode the MAC output
//!
//! The V3 protocol omits the nonce entirely (it signs with an empty string);
//! the V2 protocol requires a strictly increasing nonce per request, which
//! [`NonceGenerator`] produces.
//!
//! # Security
//!
//! Decoded secrets are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

pub mod credentials;
pub mod error;
pub mod nonce;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use nonce::NonceGenerator;
