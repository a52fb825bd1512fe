use crate::opts::{ContractOpts, RpcOpts};
use alloy_rpc_types::BlockId;
use clap::Parser;
use evoke::Connection;
use evoke_abi::{encode_function_args, format_value, unpack_result, AbiType};
use evoke_common::{contracts::ContractData, provider::try_get_provider};
use evoke_config::Config;
use eyre::Result;

/// CLI arguments for `evoke call`.
#[derive(Debug, Parser)]
pub struct CallArgs {
    /// The name of the method to call.
    method: String,

    /// The arguments of the method.
    args: Vec<String>,

    /// The block height to query at.
    ///
    /// Can also be the tags earliest, finalized, safe, latest, or pending.
    #[arg(long, short)]
    block: Option<BlockId>,

    /// Print the decoded outputs as a JSON array.
    #[arg(long, short)]
    json: bool,

    #[command(flatten)]
    contract: ContractOpts,

    #[command(flatten)]
    rpc: RpcOpts,
}

impl CallArgs {
    pub async fn run(self) -> Result<()> {
        let mut config = Config::default();
        self.contract.apply(&mut config);
        self.rpc.apply(&mut config);

        let contract = ContractData::from_config(&config)?;
        let abi = contract.abi()?;
        let to = config
            .contract
            .ok_or_else(|| eyre::eyre!("an address is required; pass --contract"))?;

        let func = abi
            .function(&self.method)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| eyre::eyre!("the method {} does not exist", self.method))?;
        eyre::ensure!(
            func.inputs.len() == self.args.len(),
            "{} takes {} argument(s), got {}",
            self.method,
            func.inputs.len(),
            self.args.len()
        );

        let data = encode_function_args(func, &self.args)?;
        let provider = try_get_provider(&config)?;
        let connection = Connection::new(provider, &config);
        let res = connection.call(to, data, self.block).await?;

        let values = unpack_result(abi, &self.method, &res)?;
        let mut rendered = Vec::with_capacity(values.len());
        for (param, value) in std::iter::zip(&func.outputs, &values) {
            let ty = AbiType::parse(&param.selector_type())?;
            rendered.push(format_value(&ty, value)?);
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        } else {
            for line in &rendered {
                println!("{line}");
            }
        }
        Ok(())
    }
}
