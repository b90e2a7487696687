//! String-to-byte conversion for signature material.

use thiserror::Error;

/// Malformed hex input. Always a hard failure, never a truncated buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("hex input has odd length ({0})")]
    OddLength(usize),

    #[error("invalid hex character at index {0}")]
    InvalidHex(usize),
}

/// Convert a string into raw bytes.
///
/// With `is_hex` set, every 2-character slice is parsed as a base-16 byte;
/// otherwise the input is taken as UTF-8. Pure, no side effects.
pub fn to_bytes(input: &str, is_hex: bool) -> Result<Vec<u8>, CodecError> {
    if !is_hex {
        return Ok(input.as_bytes().to_vec());
    }
    if input.len() % 2 != 0 {
        return Err(CodecError::OddLength(input.len()));
    }
    hex::decode(input).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { index, .. } => CodecError::InvalidHex(index),
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            CodecError::OddLength(input.len())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hex_pairs() {
        assert_eq!(to_bytes("00ff", true).unwrap(), vec![0x00, 0xFF]);
    }

    #[test]
    fn passes_through_utf8() {
        assert_eq!(to_bytes("ab", false).unwrap(), vec![0x61, 0x62]);
    }

    #[test]
    fn rejects_odd_length_hex() {
        assert_eq!(to_bytes("abc", true), Err(CodecError::OddLength(3)));
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert_eq!(to_bytes("zz00", true), Err(CodecError::InvalidHex(0)));
    }

    #[test]
    fn empty_hex_is_empty_buffer() {
        assert_eq!(to_bytes("", true).unwrap(), Vec::<u8>::new());
    }
}
