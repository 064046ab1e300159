//! Numeric data types and typed register values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegMapError;

/// Numeric interpretation applied to one or more 16-bit registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericType {
    U16,
    S16,
    U32,
    S32,
    F32,
    U64,
    S64,
    F64,
    Bool,
}

impl NumericType {
    /// Number of 16-bit registers one value of this type occupies
    pub fn register_count(&self) -> usize {
        match self {
            NumericType::U16 | NumericType::S16 | NumericType::Bool => 1,
            NumericType::U32 | NumericType::S32 | NumericType::F32 => 2,
            NumericType::U64 | NumericType::S64 | NumericType::F64 => 4,
        }
    }

    /// Width of this type in bytes
    pub fn byte_width(&self) -> usize {
        self.register_count() * 2
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NumericType::U16 => "u16",
            NumericType::S16 => "s16",
            NumericType::U32 => "u32",
            NumericType::S32 => "s32",
            NumericType::F32 => "f32",
            NumericType::U64 => "u64",
            NumericType::S64 => "s64",
            NumericType::F64 => "f64",
            NumericType::Bool => "bool",
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NumericType {
    type Err = RegMapError;

    /// Parse a data type name.
    ///
    /// Accepts both the short names ("u16", "f32") and the long names common
    /// in device point tables ("uint16", "float32"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "u16" | "uint16" | "word" => Ok(NumericType::U16),
            "s16" | "i16" | "int16" | "short" => Ok(NumericType::S16),
            "u32" | "uint32" | "dword" => Ok(NumericType::U32),
            "s32" | "i32" | "int32" | "long" => Ok(NumericType::S32),
            "f32" | "float32" | "float" => Ok(NumericType::F32),
            "u64" | "uint64" | "qword" => Ok(NumericType::U64),
            "s64" | "i64" | "int64" | "longlong" => Ok(NumericType::S64),
            "f64" | "float64" | "double" => Ok(NumericType::F64),
            "bool" | "boolean" | "coil" => Ok(NumericType::Bool),
            other => Err(RegMapError::UnsupportedType(other.to_string())),
        }
    }
}

/// A decoded register value, tagged with its numeric type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    U16(u16),
    S16(i16),
    U32(u32),
    S32(i32),
    F32(f32),
    U64(u64),
    S64(i64),
    F64(f64),
    Bool(bool),
}

impl Value {
    pub fn numeric_type(&self) -> NumericType {
        match self {
            Value::U16(_) => NumericType::U16,
            Value::S16(_) => NumericType::S16,
            Value::U32(_) => NumericType::U32,
            Value::S32(_) => NumericType::S32,
            Value::F32(_) => NumericType::F32,
            Value::U64(_) => NumericType::U64,
            Value::S64(_) => NumericType::S64,
            Value::F64(_) => NumericType::F64,
            Value::Bool(_) => NumericType::Bool,
        }
    }

    /// Numeric view used by the scaling path.
    ///
    /// Booleans map to 1.0/0.0; 64-bit integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::U16(v) => f64::from(*v),
            Value::S16(v) => f64::from(*v),
            Value::U32(v) => f64::from(*v),
            Value::S32(v) => f64::from(*v),
            Value::F32(v) => f64::from(*v),
            Value::U64(v) => *v as f64,
            Value::S64(v) => *v as f64,
            Value::F64(v) => *v,
            Value::Bool(v) => {
                if *v {
                    1.0
                } else {
                    0.0
                }
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U16(v) => write!(f, "{v}"),
            Value::S16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::S32(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::S64(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_register_counts() {
        assert_eq!(NumericType::U16.register_count(), 1);
        assert_eq!(NumericType::S16.register_count(), 1);
        assert_eq!(NumericType::Bool.register_count(), 1);
        assert_eq!(NumericType::U32.register_count(), 2);
        assert_eq!(NumericType::S32.register_count(), 2);
        assert_eq!(NumericType::F32.register_count(), 2);
        assert_eq!(NumericType::U64.register_count(), 4);
        assert_eq!(NumericType::S64.register_count(), 4);
        assert_eq!(NumericType::F64.register_count(), 4);
    }

    #[test]
    fn test_byte_widths() {
        assert_eq!(NumericType::U16.byte_width(), 2);
        assert_eq!(NumericType::F32.byte_width(), 4);
        assert_eq!(NumericType::F64.byte_width(), 8);
    }

    #[test]
    fn test_from_str_short_and_long_names() {
        assert_eq!("u16".parse::<NumericType>().unwrap(), NumericType::U16);
        assert_eq!("UINT16".parse::<NumericType>().unwrap(), NumericType::U16);
        assert_eq!("s16".parse::<NumericType>().unwrap(), NumericType::S16);
        assert_eq!("int16".parse::<NumericType>().unwrap(), NumericType::S16);
        assert_eq!("f32".parse::<NumericType>().unwrap(), NumericType::F32);
        assert_eq!("float32".parse::<NumericType>().unwrap(), NumericType::F32);
        assert_eq!("double".parse::<NumericType>().unwrap(), NumericType::F64);
        assert_eq!("bool".parse::<NumericType>().unwrap(), NumericType::Bool);
    }

    #[test]
    fn test_from_str_unsupported() {
        assert_eq!(
            "u128".parse::<NumericType>(),
            Err(RegMapError::UnsupportedType("u128".to_string()))
        );
        assert!("".parse::<NumericType>().is_err());
    }

    #[test]
    fn test_serde_names_match_cli_names() {
        assert_eq!(
            serde_json::to_string(&NumericType::F32).unwrap(),
            "\"f32\""
        );
        let dtype: NumericType = serde_json::from_str("\"s64\"").unwrap();
        assert_eq!(dtype, NumericType::S64);
    }

    #[test]
    fn test_value_as_f64() {
        assert_eq!(Value::U16(100).as_f64(), 100.0);
        assert_eq!(Value::S16(-5).as_f64(), -5.0);
        assert_eq!(Value::Bool(true).as_f64(), 1.0);
        assert_eq!(Value::Bool(false).as_f64(), 0.0);
        assert!((Value::F32(2.5).as_f64() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_value_type_tags() {
        assert_eq!(Value::U32(7).numeric_type(), NumericType::U32);
        assert_eq!(Value::F64(0.0).numeric_type(), NumericType::F64);
        assert_eq!(Value::Bool(false).numeric_type(), NumericType::Bool);
    }
}
