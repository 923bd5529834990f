//! Implementations of the deploy script subcommands

use std::str::FromStr;

use alloy::providers::DynProvider;
use alloy_primitives::Address;
use itertools::Itertools;
use tracing::info;

use crate::{
    cli::DeployArgs,
    deployer::RpcDeployer,
    errors::ScriptError,
    registry::AddressRegistry,
    sequencer::Sequencer,
    types::NamedAccounts,
    units::protocol_units,
};

/// Deploy the selected units, and their transitive references, to the target network
pub async fn deploy(
    args: DeployArgs,
    client: DynProvider,
    network: &str,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let dao = Address::from_str(&args.dao)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    let dev = Address::from_str(&args.dev)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    let accounts = NamedAccounts { dao, dev };

    if !args.tags.is_empty() {
        info!("selected tags: {}", args.tags.iter().format(", "));
    }

    let mut registry = AddressRegistry::load(deployments_path, network)?;
    let deployer = RpcDeployer::new(client, args.artifacts_path);
    let sequencer = Sequencer::new(deployer, protocol_units(&accounts));

    let outcomes = sequencer.run(&mut registry, &args.tags, None).await?;

    for outcome in outcomes {
        let status = if outcome.fresh { "deployed at" } else { "already at" };
        println!("{} {} {:#x}", outcome.name, status, outcome.address);
    }

    Ok(())
}

/// Print the addresses recorded for the target network
pub fn show_addresses(network: &str, deployments_path: &str) -> Result<(), ScriptError> {
    let registry = AddressRegistry::load(deployments_path, network)?;

    for (name, address) in registry.entries() {
        println!("{}: {:#x}", name, address);
    }

    Ok(())
}
