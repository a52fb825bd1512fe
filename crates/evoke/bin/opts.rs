use alloy_primitives::Address;
use clap::Parser;
use evoke_config::Config;

/// Options describing the contract being called.
#[derive(Clone, Debug, Default, Parser)]
pub struct ContractOpts {
    /// Address of the contract.
    #[arg(long, value_name = "ADDRESS")]
    pub contract: Option<Address>,

    /// ABI, or path to the ABI, for the contract.
    #[arg(long)]
    pub abi: Option<String>,

    /// Path to the contract JSON as output by `solc --combined-json abi,bin`.
    #[arg(long)]
    pub json: Option<String>,

    /// Name of the contract (required when using --json, unless derivable
    /// from the file name).
    #[arg(long)]
    pub name: Option<String>,
}

impl ContractOpts {
    pub fn apply(&self, config: &mut Config) {
        config.contract = self.contract;
        config.abi = self.abi.clone();
        config.json = self.json.clone();
        config.name = self.name.clone();
    }
}

/// Options describing the endpoint to talk to.
#[derive(Clone, Debug, Default, Parser)]
pub struct RpcOpts {
    /// The RPC endpoint.
    #[arg(short = 'r', long = "rpc-url", env = "ETH_RPC_URL", value_name = "URL")]
    pub url: Option<String>,

    /// Base fee to assume when no endpoint is available, e.g. `10gwei`.
    #[arg(long, env = "ETH_BASE_FEE_PER_GAS", value_name = "FEE")]
    pub base_fee_per_gas: Option<String>,
}

impl RpcOpts {
    pub fn apply(&self, config: &mut Config) {
        config.rpc_url = self.url.clone();
        config.base_fee_per_gas = self.base_fee_per_gas.clone();
    }
}
