use clap::Parser;
use eyre::Result;

mod args;
mod cmd;
mod opts;

use args::{Evoke, EvokeSubcommand};

fn main() -> Result<()> {
    subscriber();
    let args = Evoke::parse();
    main_args(args)
}

#[tokio::main]
async fn main_args(args: Evoke) -> Result<()> {
    match args.cmd {
        EvokeSubcommand::Call(cmd) => cmd.run().await,
        EvokeSubcommand::BaseFee(cmd) => cmd.run().await,
    }
}

fn subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
