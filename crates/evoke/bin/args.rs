use crate::cmd::{base_fee::BaseFeeArgs, call::CallArgs};
use clap::{Parser, Subcommand};

/// Call contracts directly.
#[derive(Debug, Parser)]
#[command(name = "evoke", version, about = "Call Ethereum contracts from the command line")]
pub struct Evoke {
    #[command(subcommand)]
    pub cmd: EvokeSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum EvokeSubcommand {
    /// Call a contract method and print its decoded outputs.
    #[command(visible_alias = "c")]
    Call(CallArgs),

    /// Print the base fee of the next block.
    #[command(name = "base-fee", visible_alias = "bf")]
    BaseFee(BaseFeeArgs),
}
