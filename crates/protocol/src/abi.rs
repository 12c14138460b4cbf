//! ABI call construction and answer decoding for the resolver surface.
//!
//! The resolver is reached either through the generic
//! `resolve(bytes,bytes) -> bytes` wrapper carrying an inner
//! `text(bytes32,string)` or `data(bytes32,string)` call, or through the
//! direct `chainName(bytes) -> string` read path. Keys are ABI-encoded
//! byte-transparently (string and bytes share one wire layout), so raw-byte
//! keys that are not valid UTF-8 still encode losslessly.

use crate::error::CodecError;
use crate::key::LookupKey;
use alloy_primitives::{Bytes, B256};
use alloy_sol_types::{sol, SolCall, SolValue};

sol! {
    interface IChainResolver {
        function resolve(bytes name, bytes data) external view returns (bytes);
        function chainName(bytes chainId) external view returns (string);
        function text(bytes32 node, string key) external view returns (string);
        function data(bytes32 node, string key) external view returns (bytes);
    }
}

use IChainResolver::{chainNameCall, dataCall, resolveCall, textCall};

/// Node value for anonymous reverse lookups. The resolver keys purely on the
/// lookup key, not the namespace node.
pub const ANONYMOUS_NODE: B256 = B256::ZERO;

// The inner calls are assembled by hand instead of through the generated
// call structs: the generated `key` field is a `String`, which would reject
// raw-byte keys. At the ABI level `string` and `bytes` encode identically.
fn encode_key_call(selector: [u8; 4], node: B256, key: &LookupKey) -> Bytes {
    let params = (node, Bytes::copy_from_slice(key.as_bytes())).abi_encode_params();
    let mut call = Vec::with_capacity(4 + params.len());
    call.extend_from_slice(&selector);
    call.extend_from_slice(&params);
    call.into()
}

/// Calldata for `text(bytes32,string) -> string`.
pub fn encode_text_call(node: B256, key: &LookupKey) -> Bytes {
    encode_key_call(textCall::SELECTOR, node, key)
}

/// Calldata for `data(bytes32,string) -> bytes`.
pub fn encode_data_call(node: B256, key: &LookupKey) -> Bytes {
    encode_key_call(dataCall::SELECTOR, node, key)
}

/// Calldata for the `resolve(bytes,bytes)` wrapper. `name` carries the
/// lookup key bytes; `data` carries one of the inner calls above.
pub fn encode_resolve_call(name: &LookupKey, inner: Bytes) -> Bytes {
    resolveCall {
        name: Bytes::copy_from_slice(name.as_bytes()),
        data: inner,
    }
    .abi_encode()
    .into()
}

/// Calldata for the direct `chainName(bytes) -> string` read path.
pub fn encode_chain_name_call(chain_id: &[u8]) -> Bytes {
    chainNameCall {
        chainId: Bytes::copy_from_slice(chain_id),
    }
    .abi_encode()
    .into()
}

/// Unwrap the `resolve` return value into the inner answer bytes.
pub fn decode_resolve_result(output: &[u8]) -> Result<Bytes, CodecError> {
    Ok(resolveCall::abi_decode_returns(output)?)
}

/// Decode a `text` selector answer: a single ABI string, nothing more.
pub fn decode_text_result(output: &[u8]) -> Result<String, CodecError> {
    Ok(textCall::abi_decode_returns(output)?)
}

/// Decode a `chainName` answer.
pub fn decode_chain_name_result(output: &[u8]) -> Result<String, CodecError> {
    Ok(chainNameCall::abi_decode_returns(output)?)
}

/// Decode a `data` selector answer.
///
/// Resolvers disagree on whether the answer is an ABI-wrapped string or the
/// bare UTF-8 bytes, so both are accepted: first attempt the structured
/// decode, and only when that fails interpret the whole byte sequence as
/// text (lossily, matching the permissive display behavior elsewhere). A
/// well-formed structured answer never reaches the fallback.
pub fn decode_data_result(output: &[u8]) -> String {
    match String::abi_decode(output) {
        Ok(name) => name,
        Err(_) => String::from_utf8_lossy(output).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::ChainIdentifier;
    use crate::key::{build_key, KeyEncoding};
    use alloy_primitives::keccak256;

    #[test]
    fn test_selectors_match_signatures() {
        assert_eq!(textCall::SELECTOR, keccak256(b"text(bytes32,string)")[..4]);
        assert_eq!(dataCall::SELECTOR, keccak256(b"data(bytes32,string)")[..4]);
        assert_eq!(resolveCall::SELECTOR, keccak256(b"resolve(bytes,bytes)")[..4]);
        assert_eq!(chainNameCall::SELECTOR, keccak256(b"chainName(bytes)")[..4]);
    }

    #[test]
    fn test_text_call_matches_generated_encoding() {
        // For UTF-8 keys the hand-assembled calldata must be identical to
        // what the generated call struct produces
        let id = ChainIdentifier::parse("0xa").unwrap();
        let key = build_key(&id, KeyEncoding::HexSuffix);
        let manual = encode_text_call(ANONYMOUS_NODE, &key);
        let generated = textCall {
            node: ANONYMOUS_NODE,
            key: String::from_utf8(key.as_bytes().to_vec()).unwrap(),
        }
        .abi_encode();
        assert_eq!(manual.as_ref(), generated.as_slice());
    }

    #[test]
    fn test_raw_key_encodes_losslessly() {
        let id = ChainIdentifier::from_bytes(vec![0xff, 0xfe]);
        let key = build_key(&id, KeyEncoding::RawBytes);
        let call = encode_data_call(ANONYMOUS_NODE, &key);
        // selector + (node, offset, len) words, then the padded key bytes
        let payload = &call[4 + 32 * 3..];
        assert_eq!(&payload[..key.len()], key.as_bytes());
    }

    #[test]
    fn test_structured_answer_round_trip() {
        // Identifier 0x000000010001010a00, hex-suffix key, data selector,
        // synthetic ABI-wrapped "optimism" answer
        let id = ChainIdentifier::parse("0x000000010001010a00").unwrap();
        let key = build_key(&id, KeyEncoding::HexSuffix);
        assert_eq!(key.as_bytes(), b"chain-name:000000010001010a00");

        let inner = encode_data_call(ANONYMOUS_NODE, &key);
        assert_eq!(inner[..4], dataCall::SELECTOR);

        let answer = "optimism".abi_encode();
        assert_eq!(decode_data_result(&answer), "optimism");
    }

    #[test]
    fn test_data_fallback_on_bare_utf8() {
        // Not ABI-wrapped at all; the raw fallback must yield it verbatim
        assert_eq!(decode_data_result(b"testchain"), "testchain");
    }

    #[test]
    fn test_data_structured_path_wins() {
        // Valid structured answers never reach the fallback, even when the
        // payload would also be readable as bare text
        let answer = "base".abi_encode();
        assert_eq!(decode_data_result(&answer), "base");
        assert_eq!(decode_data_result(&"".abi_encode()), "");
    }

    #[test]
    fn test_resolve_wrapper_round_trip() {
        let id = ChainIdentifier::parse("10").unwrap();
        let key = build_key(&id, KeyEncoding::HexSuffix);
        let inner = encode_text_call(ANONYMOUS_NODE, &key);
        let call = encode_resolve_call(&key, inner.clone());
        assert_eq!(call[..4], resolveCall::SELECTOR);

        // Synthetic wrapper answer carrying an encoded text result
        let text_answer: Bytes = "optimism".abi_encode().into();
        let wrapped = text_answer.abi_encode();
        let unwrapped = decode_resolve_result(&wrapped).unwrap();
        assert_eq!(unwrapped, text_answer);
        assert_eq!(decode_text_result(&unwrapped).unwrap(), "optimism");
    }

    #[test]
    fn test_chain_name_call_round_trip() {
        let id = ChainIdentifier::parse("0xa").unwrap();
        let call = encode_chain_name_call(id.as_bytes());
        assert_eq!(call[..4], chainNameCall::SELECTOR);

        let answer = "optimism".abi_encode();
        assert_eq!(decode_chain_name_result(&answer).unwrap(), "optimism");
    }

    #[test]
    fn test_malformed_text_answer_is_an_error() {
        assert!(decode_text_result(b"\x01\x02\x03").is_err());
    }
}
