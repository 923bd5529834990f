//! Definitions of CLI arguments and commands for the deploy scripts

use alloy::providers::DynProvider;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, show_addresses},
    constants::DEFAULT_DEPLOYMENTS_PATH,
    errors::ScriptError,
    types::UnitTag,
};

/// Deploy the Dibs protocol contracts & inspect deployed addresses
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PRIV_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long)]
    pub rpc_url: String,

    /// Name of the target network, used to key the deployments file
    #[arg(short, long)]
    pub network: String,

    /// Path to the deployments file
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy script subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the units selected by tag, along with any units they reference
    Deploy(DeployArgs),
    /// Print the addresses recorded for the target network
    Addresses,
}

impl Command {
    /// Dispatch the subcommand
    pub async fn run(
        self,
        client: DynProvider,
        network: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, client, network, deployments_path).await,
            Command::Addresses => show_addresses(network, deployments_path),
        }
    }
}

/// Deploy one or more deployment units by tag
#[derive(Args)]
pub struct DeployArgs {
    /// Tags of the units to deploy; all units are deployed when omitted
    #[arg(short, long = "tag")]
    pub tags: Vec<UnitTag>,

    /// Address of the DAO fund
    #[arg(long)]
    pub dao: String,

    /// Address of the dev fund
    #[arg(long)]
    pub dev: String,

    /// Path to a folder containing `<contract>.bin` creation bytecode artifacts
    #[arg(long, default_value = "artifacts")]
    pub artifacts_path: String,
}
