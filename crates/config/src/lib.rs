//! Per-invocation configuration for evoke's commands.

#![warn(missing_docs, unused_crate_dependencies)]

use alloy_primitives::Address;
use serde::Deserialize;
use std::path::Path;

/// Configuration for a single command invocation.
///
/// Built once from command-line flags by the binary and passed by reference
/// to everything that needs it; nothing here is process-global or mutated
/// after construction.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// RPC endpoint. The command runs offline when unset.
    pub rpc_url: Option<String>,
    /// Address of the contract being called.
    pub contract: Option<Address>,
    /// Inline ABI JSON, or a path to an ABI document.
    pub abi: Option<String>,
    /// Path to a document produced by `solc --combined-json abi,bin`.
    pub json: Option<String>,
    /// Contract name; required with `json` unless derivable from the file
    /// stem.
    pub name: Option<String>,
    /// Base fee to assume when no endpoint is available, in human units
    /// such as `10gwei`.
    pub base_fee_per_gas: Option<String>,
}

impl Config {
    /// The contract name, falling back to the combined-JSON file stem when
    /// no explicit name is configured.
    pub fn contract_name(&self) -> Option<String> {
        if let Some(name) = &self.name {
            return Some(name.clone());
        }
        let base = Path::new(self.json.as_deref()?).file_name()?.to_str()?;
        base.split('.').next().map(str::to_string)
    }
}
