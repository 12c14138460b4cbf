//! ChainResolver Client
//!
//! Off-chain client for the ChainResolver contract: explicit configuration
//! plus the `eth_call` plumbing for the generic `resolve` path and the
//! direct `chainName` read path. All codec work lives in `cid-protocol`.

pub mod config;
pub mod provider;

pub use config::{ResolverConfig, ENV_KEY_ENCODING, ENV_RESOLVER_ADDRESS, ENV_RPC_URL};
pub use provider::ResolverClient;
