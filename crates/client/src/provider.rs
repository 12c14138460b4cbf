//! Resolver client over an Alloy HTTP provider.
//!
//! One read-only `eth_call` per operation, surfaced verbatim on failure.
//! Resolution is an idempotent query, so nothing is retried or cached.

use crate::config::ResolverConfig;
use alloy::{
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};
use anyhow::{bail, Context, Result};
use cid_protocol::{
    build_key, decode_chain_name_result, decode_data_result, decode_resolve_result,
    decode_text_result, encode_chain_name_call, encode_data_call, encode_resolve_call,
    encode_text_call, ChainIdentifier, KeyEncoding, ANONYMOUS_NODE,
};
use tracing::debug;

/// Client for a deployed ChainResolver contract.
#[derive(Debug, Clone)]
pub struct ResolverClient {
    provider: DynProvider,
    resolver: Address,
}

impl ResolverClient {
    /// Connect to the configured node.
    pub fn connect(config: &ResolverConfig) -> Result<Self> {
        let provider = ProviderBuilder::new()
            .connect_http(config.rpc_url.clone())
            .erased();
        Ok(Self {
            provider,
            resolver: config.resolver_address,
        })
    }

    /// The resolver contract address.
    #[inline]
    pub fn resolver_address(&self) -> Address {
        self.resolver
    }

    /// Check that contract code is actually deployed at the resolver
    /// address; an `eth_call` against an empty account would return empty
    /// bytes instead of failing.
    pub async fn ensure_deployed(&self) -> Result<()> {
        let code = self
            .provider
            .get_code_at(self.resolver)
            .await
            .context("failed to fetch resolver code")?;
        debug!("code at {:?}: {} bytes", self.resolver, code.len());
        if code.is_empty() {
            bail!("no contract code at resolver address {:?}", self.resolver);
        }
        Ok(())
    }

    /// Reverse-resolve via the `text(bytes32,string)` selector wrapped in
    /// `resolve(bytes,bytes)`.
    pub async fn resolve_text(
        &self,
        id: &ChainIdentifier,
        encoding: KeyEncoding,
    ) -> Result<String> {
        let key = build_key(id, encoding);
        debug!("text lookup key: {}", key);
        let inner = encode_text_call(ANONYMOUS_NODE, &key);
        let answer = self.call(encode_resolve_call(&key, inner)).await?;
        let inner_answer =
            decode_resolve_result(&answer).context("malformed resolve(…) answer")?;
        decode_text_result(&inner_answer).context("malformed text(…) answer")
    }

    /// Reverse-resolve via the `data(bytes32,string)` selector wrapped in
    /// `resolve(bytes,bytes)`. Accepts both ABI-wrapped and bare UTF-8
    /// answers.
    pub async fn resolve_data(
        &self,
        id: &ChainIdentifier,
        encoding: KeyEncoding,
    ) -> Result<String> {
        let key = build_key(id, encoding);
        debug!("data lookup key: {}", key);
        let inner = encode_data_call(ANONYMOUS_NODE, &key);
        let answer = self.call(encode_resolve_call(&key, inner)).await?;
        let inner_answer =
            decode_resolve_result(&answer).context("malformed resolve(…) answer")?;
        Ok(decode_data_result(&inner_answer))
    }

    /// Direct `chainName(bytes)` read path, bypassing the generic wrapper.
    pub async fn chain_name(&self, id: &ChainIdentifier) -> Result<String> {
        let answer = self.call(encode_chain_name_call(id.as_bytes())).await?;
        decode_chain_name_result(&answer).context("malformed chainName(…) answer")
    }

    async fn call(&self, calldata: Bytes) -> Result<Bytes> {
        debug!(
            "eth_call to {:?} with {} bytes of calldata",
            self.resolver,
            calldata.len()
        );
        let tx = TransactionRequest::default()
            .to(self.resolver)
            .input(calldata.into());
        self.provider
            .call(tx)
            .await
            .context("resolver call failed")
    }
}
