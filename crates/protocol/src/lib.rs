//! ChainResolver Protocol Codec
//!
//! Pure reverse-resolution codec for the ChainResolver contract: turns a
//! chain identifier into a `chain-name:` lookup key, builds the ABI calls
//! that carry it, and decodes the contract's answer into a display name.
//! No I/O lives here; transport belongs to the client crate.

pub mod abi;
pub mod error;
pub mod identifier;
pub mod key;

pub use abi::{
    decode_chain_name_result, decode_data_result, decode_resolve_result, decode_text_result,
    encode_chain_name_call, encode_data_call, encode_resolve_call, encode_text_call,
    ANONYMOUS_NODE,
};
pub use error::CodecError;
pub use identifier::ChainIdentifier;
pub use key::{build_key, compose_display_name, KeyEncoding, LookupKey, DISPLAY_SUFFIX, KEY_PREFIX};
