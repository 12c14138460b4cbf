use anyhow::{bail, Context, Result};
use cid_client::{ResolverClient, ResolverConfig};
use cid_protocol::{compose_display_name, ChainIdentifier, KeyEncoding};
use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Input;
use dotenv::dotenv;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reverse chain-name resolution against a ChainResolver contract", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a chain identifier through the generic resolve(bytes,bytes) path
    Resolve {
        /// Chain identifier, decimal or 0x-hex (prompted for if omitted)
        chain_id: Option<String>,
        /// Which selector carries the lookup key
        #[arg(long, value_enum, default_value = "data")]
        selector: Selector,
        /// Key convention override (raw|hex); defaults to the configured one
        #[arg(long)]
        encoding: Option<KeyEncoding>,
    },
    /// Read the name through the direct chainName(bytes) path
    ChainName {
        /// Chain identifier, decimal or 0x-hex (prompted for if omitted)
        chain_id: Option<String>,
    },
    /// Resolve through both paths and check that they agree
    Verify {
        /// Chain identifier, decimal or 0x-hex (prompted for if omitted)
        chain_id: Option<String>,
        /// Key convention override (raw|hex); defaults to the configured one
        #[arg(long)]
        encoding: Option<KeyEncoding>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Selector {
    /// text(bytes32,string) -> string
    Text,
    /// data(bytes32,string) -> bytes
    Data,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = ResolverConfig::from_env().context("failed to load resolver configuration")?;
    info!(
        "resolver {:?} via {} (default key encoding: {})",
        config.resolver_address, config.rpc_url, config.key_encoding
    );

    let client = ResolverClient::connect(&config)?;
    client.ensure_deployed().await?;

    match args.command {
        Commands::Resolve {
            chain_id,
            selector,
            encoding,
        } => {
            let id = read_identifier(chain_id)?;
            let encoding = encoding.unwrap_or(config.key_encoding);
            let name = match selector {
                Selector::Text => client.resolve_text(&id, encoding).await?,
                Selector::Data => client.resolve_data(&id, encoding).await?,
            };
            // An empty name is a valid answer and composes to ".cid.eth"
            println!("{}", compose_display_name(&name));
        }
        Commands::ChainName { chain_id } => {
            let id = read_identifier(chain_id)?;
            let name = client.chain_name(&id).await?;
            println!("{}", compose_display_name(&name));
        }
        Commands::Verify { chain_id, encoding } => {
            let id = read_identifier(chain_id)?;
            let encoding = encoding.unwrap_or(config.key_encoding);
            let resolved = client.resolve_data(&id, encoding).await?;
            let direct = client.chain_name(&id).await?;
            if resolved != direct {
                bail!(
                    "paths disagree for {}: resolve gave '{}', chainName gave '{}'",
                    id,
                    resolved,
                    direct
                );
            }
            println!(
                "{} -> {} (both paths agree)",
                id,
                compose_display_name(&direct)
            );
        }
    }

    Ok(())
}

/// Take the identifier from the command line, or prompt for it.
fn read_identifier(arg: Option<String>) -> Result<ChainIdentifier> {
    let input = match arg {
        Some(s) => s,
        None => Input::<String>::new()
            .with_prompt("Chain identifier (decimal or 0x-hex)")
            .interact_text()
            .context("failed to read chain identifier")?,
    };
    Ok(ChainIdentifier::parse(input.trim())?)
}
