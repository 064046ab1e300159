//! Byte and word order handling for multi-register values
//!
//! Word order governs which 16-bit register is most significant when several
//! registers combine into a wider value; byte order governs which byte within
//! a single register is most significant. Devices in the field disagree on
//! each axis separately, so both are explicit, required parameters on every
//! conversion.

use serde::{Deserialize, Serialize};

/// Byte order within one 16-bit register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most significant byte first (network order)
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

/// Order of 16-bit registers when forming a 32/64-bit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordOrder {
    /// Most significant register first
    #[default]
    Big,
    /// Least significant register first
    Little,
}

/// Serialize registers into a byte buffer honoring byte and word order.
///
/// When `word_order` is little the registers are taken in reverse; each
/// register then contributes two bytes in `byte_order`. The resulting buffer
/// reads most-significant-first, so decoding a wider type from it is a plain
/// big-endian interpretation of its leading bytes.
pub fn words_to_bytes(words: &[u16], byte_order: ByteOrder, word_order: WordOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * 2);
    let mut push = |word: u16| {
        let [hi, lo] = word.to_be_bytes();
        match byte_order {
            ByteOrder::Big => {
                out.push(hi);
                out.push(lo);
            },
            ByteOrder::Little => {
                out.push(lo);
                out.push(hi);
            },
        }
    };
    match word_order {
        WordOrder::Big => {
            for &word in words {
                push(word);
            }
        },
        WordOrder::Little => {
            for &word in words.iter().rev() {
                push(word);
            }
        },
    }
    out
}

/// Split a most-significant-first byte buffer back into registers.
///
/// Exact structural inverse of [`words_to_bytes`]. The buffer length must be
/// even; callers always produce it from whole registers, so a trailing odd
/// byte would be a programming error and is ignored.
pub fn bytes_to_words(bytes: &[u8], byte_order: ByteOrder, word_order: WordOrder) -> Vec<u16> {
    let mut words: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| match byte_order {
            ByteOrder::Big => u16::from_be_bytes([pair[0], pair[1]]),
            ByteOrder::Little => u16::from_le_bytes([pair[0], pair[1]]),
        })
        .collect();
    if word_order == WordOrder::Little {
        words.reverse();
    }
    words
}
