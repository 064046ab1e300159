//! Modicon register addressing
//!
//! Maps conventional 5-digit register references (40001, 30002, ...) onto the
//! zero-based protocol address and register space a Modbus request needs.
//! The mapping is a fixed industry convention; an off-by-one here silently
//! reads the wrong physical register.

use serde::{Deserialize, Serialize};

use crate::error::{RegMapError, Result};

/// Modbus register spaces addressable through Modicon references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterSpace {
    /// Read/write single-bit outputs, references 10001-19999 (FC01)
    Coil,
    /// Read-only single-bit inputs, references 20001-29999 (FC02)
    DiscreteInput,
    /// Read-only 16-bit registers, references 30001-39999 (FC04)
    InputRegister,
    /// Read/write 16-bit registers, references 40001-49999 (FC03)
    HoldingRegister,
}

impl RegisterSpace {
    /// Modbus read function code for this space
    pub fn function_code(&self) -> u8 {
        match self {
            RegisterSpace::Coil => 0x01,
            RegisterSpace::DiscreteInput => 0x02,
            RegisterSpace::InputRegister => 0x04,
            RegisterSpace::HoldingRegister => 0x03,
        }
    }

    /// Whether reads in this space yield single bits rather than 16-bit words
    pub fn is_bit_space(&self) -> bool {
        matches!(self, RegisterSpace::Coil | RegisterSpace::DiscreteInput)
    }

    /// First valid Modicon reference of this space
    fn first_reference(&self) -> u32 {
        match self {
            RegisterSpace::Coil => 10001,
            RegisterSpace::DiscreteInput => 20001,
            RegisterSpace::InputRegister => 30001,
            RegisterSpace::HoldingRegister => 40001,
        }
    }
}

impl std::fmt::Display for RegisterSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RegisterSpace::Coil => "coil",
            RegisterSpace::DiscreteInput => "discrete input",
            RegisterSpace::InputRegister => "input register",
            RegisterSpace::HoldingRegister => "holding register",
        };
        write!(f, "{name}")
    }
}

/// Protocol-level address: register space plus zero-based offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolAddress {
    pub space: RegisterSpace,
    pub offset: u16,
}

/// Resolve a Modicon register reference into space and zero-based offset.
///
/// | Reference     | Space            | Offset  |
/// |---------------|------------------|---------|
/// | 10001..=19999 | Coil             | 0..=9998 |
/// | 20001..=29999 | Discrete input   | 0..=9998 |
/// | 30001..=39999 | Input register   | 0..=9998 |
/// | 40001..=49999 | Holding register | 0..=9998 |
///
/// The first reference of each range (x0001) maps to protocol address 0.
/// References outside all four ranges, including the gaps between them,
/// fail with `AddressOutOfRange`.
pub fn resolve(reference: u32) -> Result<ProtocolAddress> {
    let space = match reference {
        10001..=19999 => RegisterSpace::Coil,
        20001..=29999 => RegisterSpace::DiscreteInput,
        30001..=39999 => RegisterSpace::InputRegister,
        40001..=49999 => RegisterSpace::HoldingRegister,
        _ => return Err(RegMapError::AddressOutOfRange(reference)),
    };
    Ok(ProtocolAddress {
        space,
        offset: (reference - space.first_reference()) as u16,
    })
}

/// Resolve a caller-supplied string reference such as `"40001"`.
pub fn resolve_str(reference: &str) -> Result<ProtocolAddress> {
    let parsed = reference.trim().parse::<u32>().map_err(|_| {
        RegMapError::invalid_argument(format!(
            "register reference '{reference}' is not a number"
        ))
    })?;
    resolve(parsed)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    // ========== Range boundary tests ==========

    #[test]
    fn test_resolve_range_boundaries() {
        let cases = [
            (10001, RegisterSpace::Coil, 0),
            (19999, RegisterSpace::Coil, 9998),
            (20001, RegisterSpace::DiscreteInput, 0),
            (29999, RegisterSpace::DiscreteInput, 9998),
            (30001, RegisterSpace::InputRegister, 0),
            (39999, RegisterSpace::InputRegister, 9998),
            (40001, RegisterSpace::HoldingRegister, 0),
            (49999, RegisterSpace::HoldingRegister, 9998),
        ];

        for (reference, space, offset) in cases {
            let addr = resolve(reference).unwrap();
            assert_eq!(addr.space, space, "reference {reference}");
            assert_eq!(addr.offset, offset, "reference {reference}");
        }
    }

    #[test]
    fn test_resolve_rejects_gaps_and_out_of_range() {
        for reference in [0, 1, 9000, 9999, 10000, 20000, 30000, 40000, 50000, 99999] {
            assert_eq!(
                resolve(reference),
                Err(RegMapError::AddressOutOfRange(reference)),
                "reference {reference} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_mid_range() {
        let addr = resolve(40092).unwrap();
        assert_eq!(addr.space, RegisterSpace::HoldingRegister);
        assert_eq!(addr.offset, 91);

        let addr = resolve(33143).unwrap();
        assert_eq!(addr.space, RegisterSpace::InputRegister);
        assert_eq!(addr.offset, 3142);
    }

    // ========== Function code tests ==========

    #[test]
    fn test_function_codes() {
        assert_eq!(RegisterSpace::Coil.function_code(), 0x01);
        assert_eq!(RegisterSpace::DiscreteInput.function_code(), 0x02);
        assert_eq!(RegisterSpace::HoldingRegister.function_code(), 0x03);
        assert_eq!(RegisterSpace::InputRegister.function_code(), 0x04);
    }

    #[test]
    fn test_bit_spaces() {
        assert!(RegisterSpace::Coil.is_bit_space());
        assert!(RegisterSpace::DiscreteInput.is_bit_space());
        assert!(!RegisterSpace::InputRegister.is_bit_space());
        assert!(!RegisterSpace::HoldingRegister.is_bit_space());
    }

    // ========== String reference tests ==========

    #[test]
    fn test_resolve_str() {
        let addr = resolve_str("40001").unwrap();
        assert_eq!(addr.space, RegisterSpace::HoldingRegister);
        assert_eq!(addr.offset, 0);

        let addr = resolve_str(" 30002 ").unwrap();
        assert_eq!(addr.space, RegisterSpace::InputRegister);
        assert_eq!(addr.offset, 1);
    }

    #[test]
    fn test_resolve_str_rejects_non_numeric() {
        assert!(matches!(
            resolve_str("forty thousand"),
            Err(RegMapError::InvalidArgument(_))
        ));
        assert!(matches!(
            resolve_str("-40001"),
            Err(RegMapError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_register_space_serde_names() {
        let json = serde_json::to_string(&RegisterSpace::HoldingRegister).unwrap();
        assert_eq!(json, "\"holding_register\"");

        let space: RegisterSpace = serde_json::from_str("\"discrete_input\"").unwrap();
        assert_eq!(space, RegisterSpace::DiscreteInput);
    }
}
