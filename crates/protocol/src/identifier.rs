//! Chain identifier parsing.
//!
//! A chain identifier is an opaque byte sequence. When supplied as a number
//! (decimal or `0x`-hex) it is stored as the minimal big-endian byte encoding
//! of that value, so decimal `10` and hex `0xa` both produce `[0x0a]`.

use crate::error::CodecError;
use alloy_primitives::U256;
use std::fmt;

/// Opaque chain identifier bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainIdentifier(Vec<u8>);

impl ChainIdentifier {
    /// Wrap an already-formed byte sequence. Any length is valid, including
    /// empty.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Minimal big-endian encoding of a numeric chain id.
    pub fn from_u64(id: u64) -> Self {
        Self(U256::from(id).to_be_bytes_trimmed_vec())
    }

    /// Parse a user-supplied identifier string.
    ///
    /// Accepts `0x`-prefixed hex (odd-length digits are left-padded) or plain
    /// decimal. Anything else is rejected rather than guessed at.
    pub fn parse(input: &str) -> Result<Self, CodecError> {
        let malformed = || CodecError::MalformedIdentifier {
            input: input.to_string(),
        };

        if let Some(digits) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
            let padded;
            let digits = if digits.len() % 2 == 0 {
                digits
            } else {
                padded = format!("0{digits}");
                &padded
            };
            return hex::decode(digits).map(Self).map_err(|_| malformed());
        }

        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            let value = U256::from_str_radix(input, 10).map_err(|_| malformed())?;
            return Ok(Self(value.to_be_bytes_trimmed_vec()));
        }

        Err(malformed())
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ChainIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}
