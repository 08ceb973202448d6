use anyhow::Result;
use clap::{Parser, Subcommand};
use minichain_core::chain::Chain;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "minichain-cli")]
#[command(about = "Mine payloads onto an in-memory proof-of-work chain")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mine each payload in order and print the resulting chain as JSON
    Mine {
        /// Payloads to mine, one block each
        #[arg(required = true)]
        payloads: Vec<String>,

        /// Required number of leading zero characters in each block hash
        #[arg(long, default_value_t = minichain_core::constants::POW_DIFFICULTY)]
        difficulty: u32,
    },
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .pretty()
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Mine {
            payloads,
            difficulty,
        } => {
            let mut chain = Chain::with_difficulty(difficulty);
            for payload in payloads {
                let block = chain.mine(&payload)?;
                info!("appended block {} ({})", block.index, block.hash);
            }
            println!("{}", serde_json::to_string_pretty(chain.blocks())?);
        }
    }
    Ok(())
}
