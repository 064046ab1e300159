//! Scaled register reads with bounded retry
//!
//! Orchestrates one logical read: resolve the Modicon reference, fetch the
//! raw registers through the transport with a bounded retry budget, decode
//! each value and apply the linear scale factor.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::address::{resolve, ProtocolAddress, RegisterSpace};
use crate::bytes::{ByteOrder, WordOrder};
use crate::codec;
use crate::error::{RegMapError, Result};
use crate::transport::{RawWords, RegisterTransport};
use crate::value::NumericType;

/// A scaled numeric result tagged with the type it was decoded as
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecodedValue {
    pub dtype: NumericType,
    pub value: f64,
}

/// Retry budget for transient transport failures
///
/// Only connection/timeout-class failures consume the budget; a device
/// exception response aborts immediately regardless of how many retries
/// remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Additional attempts after the first (0 = fail on the first transient error)
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// Delay between attempts in milliseconds; there is no delay before the
    /// first attempt
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl RetryPolicy {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// Reads typed, scaled values from a Modbus device through a transport.
///
/// The byte and word order are fixed per device at construction time, the
/// way a channel configuration fixes them, so no read can fall back to an
/// implicit default. The reader issues one request at a time and holds no
/// shared state; the caller owns the connection scope (connect once, read
/// any number of times, close).
pub struct ScaledReader<T: RegisterTransport> {
    transport: T,
    byte_order: ByteOrder,
    word_order: WordOrder,
}

impl<T: RegisterTransport> ScaledReader<T> {
    pub fn new(transport: T, byte_order: ByteOrder, word_order: WordOrder) -> Self {
        Self {
            transport,
            byte_order,
            word_order,
        }
    }

    /// Open the underlying transport.
    pub async fn connect(&mut self) -> Result<()> {
        self.transport.connect().await
    }

    /// Close the underlying transport. Idempotent.
    pub async fn close(&mut self) -> Result<()> {
        self.transport.close().await
    }

    /// Give the transport back to the caller.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Read `value_count` values of `dtype` starting at the Modicon
    /// `reference`, scale each by `scale`, and return them in request order.
    ///
    /// The raw register count is derived from the type width: `value_count`
    /// counts typed values, never registers. Transient transport failures are
    /// retried up to `retries` times with `retry_delay` between attempts; a
    /// device exception response is surfaced immediately.
    ///
    /// # Arguments
    /// * `reference` - Modicon register reference (e.g. 40001)
    /// * `dtype` - numeric interpretation of each value
    /// * `value_count` - number of typed values to read (must be positive)
    /// * `scale` - linear scale factor applied to each decoded value
    /// * `retries` - additional attempts after the first
    /// * `retry_delay` - fixed delay between attempts
    pub async fn read(
        &mut self,
        reference: u32,
        dtype: NumericType,
        value_count: u16,
        scale: f64,
        retries: u32,
        retry_delay: Duration,
    ) -> Result<Vec<DecodedValue>> {
        if value_count == 0 {
            return Err(RegMapError::invalid_argument(
                "value_count must be at least 1",
            ));
        }

        let ProtocolAddress { space, offset } = resolve(reference)?;
        let words_per_value = dtype.register_count();
        let raw_count = u32::from(value_count) * words_per_value as u32;
        if raw_count > u32::from(u16::MAX) {
            return Err(RegMapError::invalid_argument(format!(
                "{value_count} values of {dtype} need {raw_count} registers, more than one request can address"
            )));
        }

        let words = self
            .fetch(space, offset, raw_count as u16, reference, dtype, retries, retry_delay)
            .await?;
        if words.len() < raw_count as usize {
            return Err(RegMapError::InsufficientData {
                dtype,
                needed: raw_count as usize,
                got: words.len(),
            });
        }

        // Chunk in transport order; word order applies only inside one value.
        let mut values = Vec::with_capacity(value_count as usize);
        for chunk in words.chunks_exact(words_per_value).take(value_count as usize) {
            let decoded = codec::decode(chunk, dtype, self.byte_order, self.word_order)?;
            values.push(DecodedValue {
                dtype,
                value: decoded.as_f64() * scale,
            });
        }
        Ok(values)
    }

    /// [`ScaledReader::read`] with the retry budget taken from a policy.
    pub async fn read_with_policy(
        &mut self,
        reference: u32,
        dtype: NumericType,
        value_count: u16,
        scale: f64,
        policy: &RetryPolicy,
    ) -> Result<Vec<DecodedValue>> {
        self.read(
            reference,
            dtype,
            value_count,
            scale,
            policy.retries,
            policy.retry_delay(),
        )
        .await
    }

    /// Fetch raw words, retrying transient failures up to `retries` times.
    #[allow(clippy::too_many_arguments)]
    async fn fetch(
        &mut self,
        space: RegisterSpace,
        offset: u16,
        count: u16,
        reference: u32,
        dtype: NumericType,
        retries: u32,
        retry_delay: Duration,
    ) -> Result<RawWords> {
        let mut attempt: u32 = 0;
        loop {
            match self.transport.read(space, offset, count).await {
                Ok(words) => {
                    debug!(
                        "Read {} words for reference {} ({}) on attempt {}",
                        words.len(),
                        reference,
                        dtype,
                        attempt + 1
                    );
                    return Ok(words);
                },
                Err(err) if err.is_transient() && attempt < retries => {
                    attempt += 1;
                    warn!(
                        "Transient failure reading reference {} ({} at {} offset {}, attempt {}/{}): {} - retrying in {:?}",
                        reference,
                        dtype,
                        space,
                        offset,
                        attempt,
                        retries + 1,
                        err,
                        retry_delay
                    );
                    sleep(retry_delay).await;
                },
                Err(err) => {
                    if err.is_transient() {
                        warn!(
                            "Giving up on reference {} ({}) after {} attempts: {}",
                            reference,
                            dtype,
                            attempt + 1,
                            err
                        );
                    } else {
                        warn!(
                            "Read of reference {} ({}) rejected by device: {}",
                            reference, dtype, err
                        );
                    }
                    return Err(err);
                },
            }
        }
    }
}
