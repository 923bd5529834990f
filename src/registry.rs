//! The persistent address registry backed by the deployments file

use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
    str::FromStr,
};

use alloy_primitives::Address;
use json::JsonValue;

use crate::{errors::ScriptError, utils::get_json_from_file};

/// The mapping from unit name to deployed address for one target network.
///
/// Backed by a JSON file keyed by network name, shared across runs and with
/// other tooling that needs deployed addresses. Entries are write-once: a name
/// is absent until its unit has completed deployment, and stable afterwards.
#[derive(Debug)]
pub struct AddressRegistry {
    /// The path of the backing deployments file
    path: PathBuf,
    /// The network whose deployments this registry tracks
    network: String,
    /// The in-memory view of the unit name -> address entries
    addresses: BTreeMap<String, Address>,
}

impl AddressRegistry {
    /// Load the registry for the given network, empty if the file does not exist
    pub fn load(
        path: impl Into<PathBuf>,
        network: impl Into<String>,
    ) -> Result<Self, ScriptError> {
        let path = path.into();
        let network = network.into();

        let mut addresses = BTreeMap::new();
        if path.exists() {
            let parsed = get_json_from_file(&path)?;
            for (name, value) in parsed[network.as_str()].entries() {
                let addr_str = value.as_str().ok_or_else(|| {
                    ScriptError::ReadDeployments(format!("malformed address for unit `{}`", name))
                })?;
                let address = Address::from_str(addr_str)
                    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
                addresses.insert(name.to_string(), address);
            }
        }

        Ok(Self { path, network, addresses })
    }

    /// The network this registry is scoped to
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Look up the address of a deployed unit
    pub fn get(&self, name: &str) -> Option<Address> {
        self.addresses.get(name).copied()
    }

    /// Record a freshly deployed address and persist it.
    ///
    /// Entries are write-once; recording the same name twice is a sequencing bug.
    pub fn record(&mut self, name: &str, address: Address) -> Result<(), ScriptError> {
        debug_assert!(
            !self.addresses.contains_key(name),
            "unit `{name}` recorded twice"
        );

        self.write_deployed_address(name, address)?;
        self.addresses.insert(name.to_string(), address);

        Ok(())
    }

    /// Iterate over all recorded (unit name, address) entries
    pub fn entries(&self) -> impl Iterator<Item = (&str, Address)> + '_ {
        self.addresses.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    /// Read-modify-write the backing file, preserving other networks' entries
    fn write_deployed_address(&self, name: &str, address: Address) -> Result<(), ScriptError> {
        // If the file doesn't exist, create it
        if !self.path.exists() {
            fs::write(&self.path, "{}")
                .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
        }
        let mut parsed = get_json_from_file(&self.path)?;

        parsed[self.network.as_str()][name] = JsonValue::String(format!("{address:#x}"));

        fs::write(&self.path, json::stringify_pretty(parsed, 4))
            .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;
    use tempfile::tempdir;

    use super::AddressRegistry;

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let registry =
            AddressRegistry::load(dir.path().join("deployments.json"), "testnet").unwrap();

        assert_eq!(registry.network(), "testnet");
        assert!(registry.get("DShare").is_none());
        assert_eq!(registry.entries().count(), 0);
    }

    #[test]
    fn recorded_addresses_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let address = Address::with_last_byte(0x11);

        let mut registry = AddressRegistry::load(&path, "testnet").unwrap();
        registry.record("DShare", address).unwrap();
        assert_eq!(registry.get("DShare"), Some(address));

        let reloaded = AddressRegistry::load(&path, "testnet").unwrap();
        assert_eq!(reloaded.get("DShare"), Some(address));
    }

    #[test]
    fn networks_are_isolated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let mainnet_addr = Address::with_last_byte(0x01);
        let testnet_addr = Address::with_last_byte(0x02);

        let mut mainnet = AddressRegistry::load(&path, "mainnet").unwrap();
        mainnet.record("Dibs", mainnet_addr).unwrap();

        let mut testnet = AddressRegistry::load(&path, "testnet").unwrap();
        assert!(testnet.get("Dibs").is_none());
        testnet.record("Dibs", testnet_addr).unwrap();

        // recording on one network must not clobber the other
        let mainnet = AddressRegistry::load(&path, "mainnet").unwrap();
        assert_eq!(mainnet.get("Dibs"), Some(mainnet_addr));
        let testnet = AddressRegistry::load(&path, "testnet").unwrap();
        assert_eq!(testnet.get("Dibs"), Some(testnet_addr));
    }
}
