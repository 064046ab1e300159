//! Transport abstraction for fetching raw registers
//!
//! This crate never opens a socket. A `RegisterTransport` implementation owns
//! the Modbus TCP client, the connection lifecycle and the framing; the
//! reader only asks it for raw 16-bit words.

use async_trait::async_trait;

use crate::address::RegisterSpace;
use crate::error::Result;

/// Raw 16-bit register words as returned by a Modbus read
pub type RawWords = Vec<u16>;

/// Connection to a Modbus device, as consumed by the scaled reader.
///
/// Implementations map `space` to the matching read function code
/// (`RegisterSpace::function_code`) and report failures through the crate
/// error type:
///
/// - connection and timeout failures as `RegMapError::Connection` /
///   `RegMapError::Timeout`: transient, eligible for retry;
/// - device exception responses as `RegMapError::Exception`: a definitive
///   rejection, never retried.
///
/// Bit spaces (coils, discrete inputs) return one word per bit, 0 or 1.
/// Per-call timeouts are the transport's responsibility; the reader adds no
/// timing of its own beyond the inter-retry delay.
#[async_trait]
pub trait RegisterTransport {
    /// Open the underlying connection.
    async fn connect(&mut self) -> Result<()>;

    /// Read `count` raw words starting at `offset` in `space`.
    async fn read(&mut self, space: RegisterSpace, offset: u16, count: u16) -> Result<RawWords>;

    /// Close the connection. Idempotent; always safe to call.
    async fn close(&mut self) -> Result<()>;
}
