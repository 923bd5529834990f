//! The external deploy mechanism that construction requests are submitted to

use std::path::PathBuf;

use alloy::{
    network::TransactionBuilder,
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use alloy_primitives::{Address, Bytes};
use itertools::Itertools;
use tracing::info;

use crate::{
    constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError,
    types::ResolvedArg,
    utils::{encode_constructor_args, read_artifact_bytecode},
};

/// An external mechanism that constructs one named contract and returns its address.
///
/// The sequencer guards against double submission by registry lookup, so
/// implementations only see each unit name once per network.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Construct the named contract with the given, fully resolved, constructor args
    async fn deploy(&self, name: &str, args: &[ResolvedArg]) -> Result<Address, ScriptError>;
}

impl<D: Deployer> Deployer for &D {
    async fn deploy(&self, name: &str, args: &[ResolvedArg]) -> Result<Address, ScriptError> {
        (**self).deploy(name, args).await
    }
}

/// Deploys contracts through an RPC provider, reading creation bytecode from
/// per-contract artifact files
pub struct RpcDeployer {
    /// The provider used to submit construction transactions
    provider: DynProvider,
    /// The directory holding `<name>.bin` hex bytecode artifacts
    artifacts_path: PathBuf,
}

impl RpcDeployer {
    /// Create a deployer submitting through the given provider
    pub fn new(provider: DynProvider, artifacts_path: impl Into<PathBuf>) -> Self {
        Self { provider, artifacts_path: artifacts_path.into() }
    }
}

impl Deployer for RpcDeployer {
    async fn deploy(&self, name: &str, args: &[ResolvedArg]) -> Result<Address, ScriptError> {
        let mut code = read_artifact_bytecode(&self.artifacts_path, name)?;
        code.extend(encode_constructor_args(args));

        info!("deploying {} with args [{}]", name, args.iter().format(", "));

        let tx = TransactionRequest::default().with_deploy_code(Bytes::from(code));
        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ConstructionFailed(e.to_string()))?
            .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ConstructionFailed(e.to_string()))?;

        if !receipt.status() {
            return Err(ScriptError::ConstructionFailed(format!(
                "constructor of {} reverted",
                name
            )));
        }

        receipt.contract_address.ok_or_else(|| {
            ScriptError::ConstructionFailed(format!("no contract address in receipt for {}", name))
        })
    }
}
