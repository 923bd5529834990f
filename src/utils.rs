//! Utilities for the deploy scripts

use std::{
    fs::{self, File},
    io::Read,
    path::Path,
    str::FromStr,
};

use alloy::{
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_sol_types::SolValue;
use json::JsonValue;

use crate::{constants::BYTECODE_EXTENSION, errors::ScriptError, types::ResolvedArg};

/// Set up an RPC client with the deployer key attached
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let url =
        Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

    Ok(DynProvider::new(provider))
}

/// Parse the JSON file at the given path
pub fn get_json_from_file(path: &Path) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Read the creation bytecode of the named contract from its hex artifact file
pub fn read_artifact_bytecode(
    artifacts_path: &Path,
    name: &str,
) -> Result<Vec<u8>, ScriptError> {
    let path = artifacts_path.join(name).with_extension(BYTECODE_EXTENSION);
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

    let stripped = contents.trim().trim_start_matches("0x");
    hex::decode(stripped).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

/// ABI-encode resolved constructor arguments, as appended to the creation code.
///
/// All argument types in the unit set are statically sized, so the encoding is
/// the concatenation of one 32-byte word per argument.
pub fn encode_constructor_args(args: &[ResolvedArg]) -> Vec<u8> {
    args.iter()
        .flat_map(|arg| match arg {
            ResolvedArg::Address(addr) => addr.abi_encode(),
            ResolvedArg::Uint(value) => value.abi_encode(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};

    use super::encode_constructor_args;
    use crate::types::ResolvedArg;

    #[test]
    fn constructor_args_encode_as_one_word_each() {
        let addr = Address::with_last_byte(0x42);
        let args = vec![
            ResolvedArg::Address(addr),
            ResolvedArg::Uint(U256::from(1641135600u64)),
        ];

        let encoded = encode_constructor_args(&args);
        assert_eq!(encoded.len(), 64);

        // address is left-padded to 32 bytes
        assert!(encoded[..12].iter().all(|b| *b == 0));
        assert_eq!(&encoded[12..32], addr.as_slice());

        // uint word is big-endian
        assert_eq!(encoded[32..64], U256::from(1641135600u64).to_be_bytes::<32>());
    }

    #[test]
    fn empty_arg_list_encodes_to_nothing() {
        assert!(encode_constructor_args(&[]).is_empty());
    }
}
