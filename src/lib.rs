//! # Voltage RegMap - Modicon Register Addressing and Decoding
//!
//! Reads numeric values from industrial and energy devices (inverters,
//! battery systems) over Modbus TCP and presents them in application units.
//! The crate owns the two pieces of Modbus integration that devices get wrong
//! in incompatible ways:
//!
//! - **Addressing**: conventional 5-digit Modicon references (40001, 30002)
//!   resolved to the zero-based protocol address and register space a request
//!   needs.
//! - **Decoding**: one or more raw 16-bit registers reassembled into typed
//!   values under explicit, independent byte order and word order axes, with
//!   a linear scale factor on top.
//!
//! The TCP transport itself stays behind the [`RegisterTransport`] trait; the
//! crate never opens a socket, and the caller owns the connection lifecycle.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use voltage_regmap::{
//!     async_trait, ByteOrder, NumericType, RawWords, RegisterSpace, RegisterTransport,
//!     Result, ScaledReader, WordOrder,
//! };
//!
//! struct InverterLink; // wraps a Modbus TCP client
//!
//! #[async_trait]
//! impl RegisterTransport for InverterLink {
//!     async fn connect(&mut self) -> Result<()> { Ok(()) }
//!     async fn read(&mut self, _space: RegisterSpace, _offset: u16, count: u16) -> Result<RawWords> {
//!         Ok(vec![0; count as usize])
//!     }
//!     async fn close(&mut self) -> Result<()> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut reader = ScaledReader::new(InverterLink, ByteOrder::Big, WordOrder::Big);
//!     reader.connect().await?;
//!
//!     // Battery state of charge: holding register 40092, one u16, 0.1 % per count
//!     let soc = reader
//!         .read(40092, NumericType::U16, 1, 0.1, 2, Duration::from_millis(200))
//!         .await?;
//!     println!("SoC: {:.1} %", soc[0].value);
//!
//!     reader.close().await
//! }
//! ```

// ============================================================================
// Core modules
// ============================================================================

/// Core error types and result handling
pub mod error;

/// Modicon register addressing
pub mod address;

/// Numeric data types and typed register values
pub mod value;

/// Byte and word order handling for multi-register values
pub mod bytes;

/// Encoding and decoding of register data with byte order support
pub mod codec;

/// Transport abstraction for fetching raw registers
pub mod transport;

/// Scaled register reads with bounded retry
pub mod reader;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// === Async runtime (users can use voltage_regmap::tokio) ===
pub use async_trait::async_trait;
pub use tokio;

// === Error handling ===
pub use error::{RegMapError, Result};

// === Addressing ===
pub use address::{resolve, resolve_str, ProtocolAddress, RegisterSpace};

// === Decoding ===
pub use bytes::{ByteOrder, WordOrder};
pub use codec::{combine32, decode, encode};
pub use value::{NumericType, Value};

// === Reading ===
pub use reader::{DecodedValue, RetryPolicy, ScaledReader};
pub use transport::{RawWords, RegisterTransport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
