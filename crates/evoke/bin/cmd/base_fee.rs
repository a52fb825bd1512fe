use crate::opts::RpcOpts;
use clap::Parser;
use evoke::Connection;
use evoke_common::provider::try_get_provider;
use evoke_config::Config;
use eyre::Result;

/// CLI arguments for `evoke base-fee`.
#[derive(Debug, Parser)]
pub struct BaseFeeArgs {
    #[command(flatten)]
    rpc: RpcOpts,
}

impl BaseFeeArgs {
    pub async fn run(self) -> Result<()> {
        let mut config = Config::default();
        self.rpc.apply(&mut config);

        let provider = try_get_provider(&config)?;
        let mut connection = Connection::new(provider, &config);
        println!("{}", connection.current_base_fee().await?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_base_fee_args() {
        let args =
            BaseFeeArgs::parse_from(["evoke", "--base-fee-per-gas", "10gwei"]);
        assert_eq!(args.rpc.base_fee_per_gas.as_deref(), Some("10gwei"));
    }
}
