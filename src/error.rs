//! Core error types and result handling
//!
//! One typed error enum covers address resolution, register decoding and
//! transport failures; `is_transient()` is the single place that decides
//! which failures a retry can possibly fix.

use thiserror::Error;

use crate::value::NumericType;

/// Result type for voltage-regmap operations
pub type Result<T> = std::result::Result<T, RegMapError>;

/// Errors produced by address resolution, register decoding and scaled reads
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegMapError {
    /// Register reference outside the four Modicon ranges
    #[error("register reference {0} is out of range (expected 10001-19999, 20001-29999, 30001-39999 or 40001-49999)")]
    AddressOutOfRange(u32),

    /// Caller contract violation (zero count, mismatched value/type, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Fewer raw registers than the requested type needs
    #[error("insufficient data for {dtype}: need {needed} registers, got {got}")]
    InsufficientData {
        dtype: NumericType,
        needed: usize,
        got: usize,
    },

    /// Unrecognized data type name
    #[error("unsupported data type: {0}")]
    UnsupportedType(String),

    /// Transport-level connection failure (retryable)
    #[error("connection error: {0}")]
    Connection(String),

    /// Transport timed out waiting for a response (retryable)
    #[error("timeout: {0}")]
    Timeout(String),

    /// Device returned a Modbus exception response (never retried)
    #[error("device exception response: function {function:#04X}, exception code {code:#04X}")]
    Exception { function: u8, code: u8 },
}

// Helper methods for creating errors
impl RegMapError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        RegMapError::InvalidArgument(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        RegMapError::Connection(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        RegMapError::Timeout(msg.into())
    }

    /// Check whether a retry of the failed operation can possibly succeed.
    ///
    /// Connection and timeout failures are transient network conditions.
    /// A device exception response is a well-formed rejection of the request
    /// as formed, and everything else is a caller error; retrying either
    /// cannot change the outcome.
    pub fn is_transient(&self) -> bool {
        matches!(self, RegMapError::Connection(_) | RegMapError::Timeout(_))
    }
}

impl From<std::io::Error> for RegMapError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => {
                RegMapError::Timeout(err.to_string())
            },
            _ => RegMapError::Connection(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(RegMapError::connection("reset by peer").is_transient());
        assert!(RegMapError::timeout("no response in 2s").is_transient());

        assert!(!RegMapError::AddressOutOfRange(50000).is_transient());
        assert!(!RegMapError::invalid_argument("count must be positive").is_transient());
        assert!(!RegMapError::Exception {
            function: 0x03,
            code: 0x02
        }
        .is_transient());
        assert!(!RegMapError::UnsupportedType("u128".to_string()).is_transient());
    }

    #[test]
    fn test_io_error_conversion() {
        let timeout = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
        assert!(matches!(
            RegMapError::from(timeout),
            RegMapError::Timeout(_)
        ));

        let reset = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer reset");
        assert!(matches!(
            RegMapError::from(reset),
            RegMapError::Connection(_)
        ));
    }

    #[test]
    fn test_exception_display_includes_codes() {
        let err = RegMapError::Exception {
            function: 0x03,
            code: 0x02,
        };
        let msg = err.to_string();
        assert!(msg.contains("0x03"));
        assert!(msg.contains("0x02"));
    }
}
