//! Client configuration.
//!
//! Built once at startup from the environment and passed in explicitly;
//! nothing here is process-wide mutable state.

use alloy::primitives::Address;
use anyhow::{Context, Result};
use cid_protocol::KeyEncoding;
use std::env;
use url::Url;

/// Environment variable naming the JSON-RPC endpoint.
pub const ENV_RPC_URL: &str = "RESOLVER_RPC_URL";
/// Environment variable naming the deployed ChainResolver address.
pub const ENV_RESOLVER_ADDRESS: &str = "RESOLVER_ADDRESS";
/// Optional environment variable selecting the key convention (`raw`/`hex`).
pub const ENV_KEY_ENCODING: &str = "RESOLVER_KEY_ENCODING";

/// Explicit resolver client configuration.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// JSON-RPC endpoint of the node.
    pub rpc_url: Url,
    /// Address of the deployed ChainResolver contract.
    pub resolver_address: Address,
    /// Default key convention; overridable per invocation.
    pub key_encoding: KeyEncoding,
}

impl ResolverConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let rpc_url = env::var(ENV_RPC_URL).with_context(|| format!("{ENV_RPC_URL} is not set"))?;
        let address = env::var(ENV_RESOLVER_ADDRESS)
            .with_context(|| format!("{ENV_RESOLVER_ADDRESS} is not set"))?;
        let encoding = env::var(ENV_KEY_ENCODING).ok();
        Self::from_parts(&rpc_url, &address, encoding.as_deref())
    }

    /// Build a configuration from raw string parts. A missing encoding
    /// selects the hex-suffix convention.
    pub fn from_parts(rpc_url: &str, address: &str, encoding: Option<&str>) -> Result<Self> {
        let rpc_url = rpc_url
            .parse::<Url>()
            .with_context(|| format!("invalid RPC URL '{rpc_url}'"))?;
        let resolver_address = address
            .parse::<Address>()
            .with_context(|| format!("invalid resolver address '{address}'"))?;
        let key_encoding = match encoding {
            Some(s) => s
                .parse::<KeyEncoding>()
                .context("invalid key encoding in configuration")?,
            None => KeyEncoding::default(),
        };
        Ok(Self {
            rpc_url,
            resolver_address,
            key_encoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    #[test]
    fn test_from_parts_defaults_to_hex() {
        let cfg = ResolverConfig::from_parts("http://localhost:8545", ADDR, None).unwrap();
        assert_eq!(cfg.key_encoding, KeyEncoding::HexSuffix);
        assert_eq!(cfg.rpc_url.as_str(), "http://localhost:8545/");
    }

    #[test]
    fn test_from_parts_accepts_raw_encoding() {
        let cfg = ResolverConfig::from_parts("http://localhost:8545", ADDR, Some("raw")).unwrap();
        assert_eq!(cfg.key_encoding, KeyEncoding::RawBytes);
    }

    #[test]
    fn test_from_parts_rejects_bad_values() {
        assert!(ResolverConfig::from_parts("not a url", ADDR, None).is_err());
        assert!(ResolverConfig::from_parts("http://localhost:8545", "0x1234", None).is_err());
        assert!(
            ResolverConfig::from_parts("http://localhost:8545", ADDR, Some("base64")).is_err()
        );
    }
}
