//! Lookup key construction and display-name composition.
//!
//! A lookup key is the literal prefix `chain-name:` followed by the chain
//! identifier in one of two historically grown conventions. Deployed
//! resolvers exist under both, so the convention is an explicit switch and is
//! never unified silently.

use crate::error::CodecError;
use crate::identifier::ChainIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed key prefix, 11 ASCII bytes. Interoperability with deployed
/// resolvers breaks if this changes.
pub const KEY_PREFIX: &str = "chain-name:";

/// Suffix appended to a resolved chain name for display.
pub const DISPLAY_SUFFIX: &str = ".cid.eth";

/// How the identifier bytes are embedded in the lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyEncoding {
    /// Identifier bytes appended verbatim, one byte per character, no
    /// charset validation. The key is byte-transparent, not UTF-8.
    #[serde(rename = "raw")]
    RawBytes,
    /// Lowercase hex digits of the identifier bytes, two per byte, no `0x`.
    #[default]
    #[serde(rename = "hex")]
    HexSuffix,
}

impl FromStr for KeyEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Self::RawBytes),
            "hex" => Ok(Self::HexSuffix),
            _ => Err(CodecError::UnknownKeyEncoding {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for KeyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawBytes => f.write_str("raw"),
            Self::HexSuffix => f.write_str("hex"),
        }
    }
}

/// A constructed lookup key. Raw-byte keys may not be valid UTF-8, so the
/// key is carried as bytes end to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey(Vec<u8>);

impl LookupKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lossy only for display; the wire form is the exact bytes
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Build the lookup key for an identifier. Pure and total: the empty
/// identifier yields the bare prefix.
pub fn build_key(id: &ChainIdentifier, encoding: KeyEncoding) -> LookupKey {
    let mut key = Vec::with_capacity(KEY_PREFIX.len() + 2 * id.len());
    key.extend_from_slice(KEY_PREFIX.as_bytes());
    match encoding {
        KeyEncoding::RawBytes => key.extend_from_slice(id.as_bytes()),
        KeyEncoding::HexSuffix => key.extend_from_slice(hex::encode(id.as_bytes()).as_bytes()),
    }
    LookupKey(key)
}

/// Compose the canonical display name. Deliberately permissive: an empty
/// chain name composes to `".cid.eth"` and is shown as-is.
pub fn compose_display_name(chain_name: &str) -> String {
    format!("{chain_name}{DISPLAY_SUFFIX}")
}
