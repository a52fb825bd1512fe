//! Provider construction.

use alloy_provider::RootProvider;
use evoke_config::Config;
use eyre::{Context, Result};
use url::Url;

/// Returns an HTTP provider for the configured RPC endpoint, or `None` when
/// no endpoint is configured and the command runs offline.
pub fn try_get_provider(config: &Config) -> Result<Option<RootProvider>> {
    let Some(rpc) = config.rpc_url.as_deref() else {
        debug!("no RPC endpoint configured, running offline");
        return Ok(None);
    };
    let url: Url = rpc.parse().wrap_err_with(|| format!("invalid RPC endpoint {rpc}"))?;
    Ok(Some(RootProvider::new_http(url)))
}
