//! The deployment sequencer: dependency ordering and address resolution

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use alloy_primitives::Address;
use tracing::{debug, info};

use crate::{
    deployer::Deployer,
    errors::ScriptError,
    registry::AddressRegistry,
    types::{ConstructorArg, DeployOutcome, DeploymentUnit, ResolvedArg, UnitTag},
};

/// Resolve a previously deployed unit's address through the registry
pub fn resolve(registry: &AddressRegistry, name: &str) -> Result<Address, ScriptError> {
    registry
        .get(name)
        .ok_or_else(|| ScriptError::UnresolvedDependency(name.to_string()))
}

/// Deploys a declared set of units in dependency order against one network's registry.
///
/// Deployments are strictly sequential: each construction is awaited before the
/// next unit is considered, since later units may resolve the resulting address.
pub struct Sequencer<D> {
    /// The external deploy mechanism
    deployer: D,
    /// The declared unit set
    units: Vec<DeploymentUnit>,
}

impl<D: Deployer> Sequencer<D> {
    /// Create a sequencer over the given unit set
    pub fn new(deployer: D, units: Vec<DeploymentUnit>) -> Self {
        Self { deployer, units }
    }

    /// Deploy the units selected by `tags` (all units when no tags are given)
    /// along with any units they transitively reference.
    ///
    /// When `order` is given the named units are deployed in exactly that
    /// order; otherwise the selection is topologically sorted over its
    /// reference edges. Cycles anywhere in the declared unit set are rejected
    /// before any deployment is submitted. Units already present in the
    /// registry are skipped, so an interrupted run can be re-invoked safely.
    pub async fn run(
        &self,
        registry: &mut AddressRegistry,
        tags: &[UnitTag],
        order: Option<&[&str]>,
    ) -> Result<Vec<DeployOutcome>, ScriptError> {
        let by_name = self.index_by_name()?;

        // Reject cycles over the full declared set before anything is submitted
        let all_names: BTreeSet<&'static str> = by_name.keys().copied().collect();
        self.topological_order(&by_name, &all_names)?;

        let sequence: Vec<&DeploymentUnit> = match order {
            Some(order) => order
                .iter()
                .map(|&name| {
                    by_name
                        .get(name)
                        .copied()
                        .ok_or_else(|| ScriptError::UnknownUnit(name.to_string()))
                })
                .collect::<Result<_, _>>()?,
            None => {
                let selected = self.selection(&by_name, tags);
                self.topological_order(&by_name, &selected)?
            }
        };

        info!(
            "deploying {} unit(s) on {}",
            sequence.len(),
            registry.network()
        );

        let mut outcomes = Vec::with_capacity(sequence.len());
        for unit in sequence {
            outcomes.push(self.deploy(registry, unit).await?);
        }

        Ok(outcomes)
    }

    /// Deploy one unit, or return its cached address if already deployed on
    /// this network
    pub async fn deploy(
        &self,
        registry: &mut AddressRegistry,
        unit: &DeploymentUnit,
    ) -> Result<DeployOutcome, ScriptError> {
        if let Some(address) = registry.get(unit.name) {
            debug!("{} already deployed at {:#x}, skipping", unit.name, address);
            return Ok(DeployOutcome { name: unit.name, address, fresh: false });
        }

        // Replace references with resolved addresses, pass constants through verbatim
        let args = unit
            .args
            .iter()
            .map(|arg| match arg {
                ConstructorArg::Address(addr) => Ok(ResolvedArg::Address(*addr)),
                ConstructorArg::Uint(value) => Ok(ResolvedArg::Uint(*value)),
                ConstructorArg::Ref(name) => resolve(registry, name).map(ResolvedArg::Address),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let address = self.deployer.deploy(unit.name, &args).await?;
        registry.record(unit.name, address)?;
        info!("{} deployed at {:#x}", unit.name, address);

        Ok(DeployOutcome { name: unit.name, address, fresh: true })
    }

    /// Index the declared unit set by name, validating that every reference
    /// names a declared unit
    fn index_by_name(&self) -> Result<BTreeMap<&'static str, &DeploymentUnit>, ScriptError> {
        let by_name: BTreeMap<&'static str, &DeploymentUnit> =
            self.units.iter().map(|unit| (unit.name, unit)).collect();

        for unit in &self.units {
            for dep in unit.dependencies() {
                if !by_name.contains_key(dep) {
                    return Err(ScriptError::UnknownUnit(dep.to_string()));
                }
            }
        }

        Ok(by_name)
    }

    /// The names of the units matching the requested tags, expanded with the
    /// names of the units they transitively reference
    fn selection(
        &self,
        by_name: &BTreeMap<&'static str, &DeploymentUnit>,
        tags: &[UnitTag],
    ) -> BTreeSet<&'static str> {
        let mut queue: VecDeque<&'static str> = self
            .units
            .iter()
            .filter(|unit| tags.is_empty() || unit.tags.iter().any(|tag| tags.contains(tag)))
            .map(|unit| unit.name)
            .collect();

        let mut selected = BTreeSet::new();
        while let Some(name) = queue.pop_front() {
            if !selected.insert(name) {
                continue;
            }
            if let Some(unit) = by_name.get(name) {
                queue.extend(unit.dependencies());
            }
        }

        selected
    }

    /// Kahn's algorithm over the reference edges among `selected`, visiting
    /// units in declaration order for determinism.
    ///
    /// Fails if the edges admit no topological order.
    fn topological_order<'a>(
        &self,
        by_name: &BTreeMap<&'static str, &'a DeploymentUnit>,
        selected: &BTreeSet<&'static str>,
    ) -> Result<Vec<&'a DeploymentUnit>, ScriptError> {
        // One indegree entry per selected unit, one edge per in-selection reference
        let mut indegree: BTreeMap<&'static str, usize> =
            selected.iter().map(|name| (*name, 0)).collect();
        let mut dependents: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();

        for unit in self.units.iter().filter(|unit| selected.contains(unit.name)) {
            for dep in unit.dependencies().filter(|dep| selected.contains(dep)) {
                if let Some(count) = indegree.get_mut(unit.name) {
                    *count += 1;
                }
                dependents.entry(dep).or_default().push(unit.name);
            }
        }

        // Seed with the dependency-free units, in declaration order
        let mut ready: VecDeque<&'static str> = self
            .units
            .iter()
            .filter(|unit| indegree.get(unit.name) == Some(&0))
            .map(|unit| unit.name)
            .collect();

        let mut sorted = Vec::with_capacity(selected.len());
        while let Some(name) = ready.pop_front() {
            if let Some(unit) = by_name.get(name) {
                sorted.push(*unit);
            }
            for dependent in dependents.remove(name).unwrap_or_default() {
                if let Some(count) = indegree.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        ready.push_back(dependent);
                    }
                }
            }
        }

        if sorted.len() != selected.len() {
            let ordered: BTreeSet<&'static str> =
                sorted.iter().map(|unit| unit.name).collect();
            let cyclic: Vec<&str> = selected
                .iter()
                .copied()
                .filter(|name| !ordered.contains(name))
                .collect();
            return Err(ScriptError::CyclicDependency(cyclic.join(", ")));
        }

        Ok(sorted)
    }
}
