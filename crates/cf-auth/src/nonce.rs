//! Nonce generation for the V2 protocol variant
//!
//! V2 requires every signed request to carry a strictly increasing nonce.
//! The token is the millisecond epoch timestamp followed by a zero-padded
//! 4-digit sequence number, so requests issued within the same millisecond
//! still compare as increasing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-client nonce source
///
/// Owned by the client instance rather than shared process-wide, so two
/// clients never contend for the same sequence. The increment is atomic,
/// which makes a single client safe to share across tasks.
///
/// The sequence number is not wrapped: past 9999 calls the token grows by a
/// digit. Values keep increasing numerically, but the fixed-width assumption
/// of the original scheme no longer holds.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    counter: AtomicU64,
}

impl NonceGenerator {
    /// Create a new generator starting at sequence 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next nonce
    pub fn next(&self) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64;

        let seq = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}{:04}", timestamp, seq)
    }
}
