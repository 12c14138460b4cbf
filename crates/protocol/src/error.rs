//! Codec error types.

use thiserror::Error;

/// Errors produced by the reverse-key codec.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("chain identifier '{input}' is neither hexadecimal nor decimal")]
    MalformedIdentifier { input: String },

    #[error("unknown key encoding '{input}' (expected 'raw' or 'hex')")]
    UnknownKeyEncoding { input: String },

    #[error("malformed resolver answer: {0}")]
    MalformedAnswer(#[from] alloy_sol_types::Error),
}
