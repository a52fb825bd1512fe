use crate::utils::parse_wei_value;
use alloy_consensus::BlockHeader;
use alloy_eips::eip1559::BaseFeeParams;
use alloy_primitives::{Address, Bytes, TxKind, U256};
use alloy_provider::Provider;
use alloy_rpc_types::{BlockId, TransactionInput, TransactionRequest};
use evoke_config::Config;
use eyre::Result;

/// A connection to an Ethereum endpoint, or an offline stand-in.
///
/// Mirrors what a single command needs from the chain: read-only calls and
/// the base fee. Offline (no provider), the base fee comes from the
/// configured override and is cached on first use. The cache is written
/// nowhere else; a `Connection` shared across threads must be serialized by
/// the caller.
pub struct Connection<P> {
    provider: Option<P>,
    base_fee_override: Option<String>,
    base_fee_per_gas: Option<U256>,
}

impl<P: Provider> Connection<P> {
    /// Creates a connection from an optional provider and the invocation's
    /// configuration.
    pub fn new(provider: Option<P>, config: &Config) -> Self {
        Self {
            provider,
            base_fee_override: config.base_fee_per_gas.clone(),
            base_fee_per_gas: None,
        }
    }

    /// Whether this connection can reach an endpoint.
    pub fn is_offline(&self) -> bool {
        self.provider.is_none()
    }

    /// Makes a read-only call to `to` and returns the raw result bytes.
    pub async fn call(&self, to: Address, data: Vec<u8>, block: Option<BlockId>) -> Result<Bytes> {
        let provider = self.provider()?;
        trace!(%to, data = data.len(), "calling contract");
        let tx = TransactionRequest {
            to: Some(TxKind::Call(to)),
            input: TransactionInput::new(data.into()),
            ..Default::default()
        };
        Ok(provider.call(tx).block(block.unwrap_or_default()).await?)
    }

    /// Returns the base fee of the next block.
    ///
    /// Connected, this is computed from the latest block header with the
    /// standard EIP-1559 schedule; offline, the configured override is
    /// parsed once and cached.
    pub async fn current_base_fee(&mut self) -> Result<U256> {
        let Some(provider) = &self.provider else {
            if let Some(fee) = self.base_fee_per_gas {
                return Ok(fee);
            }
            let raw = self.base_fee_override.as_deref().ok_or_else(|| {
                eyre::eyre!("no connection; supply a base fee with base-fee-per-gas")
            })?;
            let fee = parse_wei_value(raw)?;
            self.base_fee_per_gas = Some(fee);
            return Ok(fee);
        };

        let number = provider.get_block_number().await?;
        let block = provider
            .get_block_by_number(number.into())
            .await?
            .ok_or_else(|| eyre::eyre!("block {number} not found"))?;
        trace!(number, "computing next-block base fee");
        let next = block
            .header
            .next_block_base_fee(BaseFeeParams::ethereum())
            .ok_or_else(|| eyre::eyre!("chain does not price gas with a base fee"))?;
        Ok(U256::from(next))
    }

    fn provider(&self) -> Result<&P> {
        self.provider
            .as_ref()
            .ok_or_else(|| eyre::eyre!("this command requires a connection; set an RPC endpoint"))
    }
}
