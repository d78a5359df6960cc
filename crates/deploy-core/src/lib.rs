//! Shared data types for building contract deployments.
//!
//! Everything in here is plain data: compiled artifacts, the network
//! descriptor, transaction overrides and the HD derivation path table.

pub mod hdpath;
pub mod network;
pub mod overrides;

pub use network::{
    ChainFamily,
    NetworkConfig,
    NetworkConfigError,
};
pub use overrides::DeployOverrides;

use alloy::primitives::Bytes;
use alloy_json_abi::JsonAbi;
use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

/// Dependency hash to fully qualified contract name (`path/File.sol:Name`),
/// in the order the compiler emitted them.
pub type FactoryDeps = IndexMap<String, String>;

/// A compiled contract, as emitted by the compiler toolchain.
///
/// `factory_deps` is only present on artifacts compiled for zkSync. Keys are
/// the bytecode hashes the contract references, values are the names the
/// resolver can look the dependency up by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(default)]
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory_deps: Option<FactoryDeps>,
}

impl Artifact {
    pub fn new(contract_name: impl Into<String>, abi: JsonAbi, bytecode: Bytes) -> Self {
        Self {
            contract_name: contract_name.into(),
            abi,
            bytecode,
            factory_deps: None,
        }
    }

    /// Attach a zkSync factory dependency map.
    pub fn with_factory_deps(mut self, factory_deps: FactoryDeps) -> Self {
        self.factory_deps = Some(factory_deps);
        self
    }

    /// Number of inputs declared by the constructor. Contracts without an
    /// explicit constructor take none.
    pub fn constructor_input_count(&self) -> usize {
        self.abi
            .constructor
            .as_ref()
            .map_or(0, |constructor| constructor.inputs.len())
    }

    /// Whether the artifact declares any factory dependencies.
    pub fn has_factory_deps(&self) -> bool {
        self.factory_deps
            .as_ref()
            .is_some_and(|deps| !deps.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_hardhat_artifact() {
        let raw = r#"{
            "_format": "hh-zksolc-artifact-1",
            "contractName": "Greeter",
            "sourceName": "contracts/Greeter.sol",
            "abi": [{
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [{ "name": "greeting", "type": "string", "internalType": "string" }]
            }],
            "bytecode": "0x0000000100200190",
            "deployedBytecode": "0x0000000100200190",
            "linkReferences": {},
            "factoryDeps": {
                "0x0100000b1d2e": "contracts/Child.sol:Child",
                "0x0100000a0c9f": "contracts/Other.sol:Other"
            }
        }"#;

        let artifact: Artifact = serde_json::from_str(raw).unwrap();
        assert_eq!(artifact.contract_name, "Greeter");
        assert_eq!(artifact.constructor_input_count(), 1);
        assert_eq!(artifact.bytecode.len(), 8);
        assert!(artifact.has_factory_deps());

        let names: Vec<_> = artifact.factory_deps.unwrap().into_values().collect();
        assert_eq!(
            names,
            vec!["contracts/Child.sol:Child", "contracts/Other.sol:Other"]
        );
    }

    #[test]
    fn test_factory_deps_keep_document_order() {
        // `json!` sorts object keys, so parse the text directly.
        let artifact: Artifact = serde_json::from_str(
            r#"{
                "abi": [],
                "bytecode": "0x00",
                "factoryDeps": { "0xcc": "C", "0xaa": "A", "0xbb": "B" }
            }"#,
        )
        .unwrap();

        let hashes: Vec<_> = artifact.factory_deps.unwrap().into_keys().collect();
        assert_eq!(hashes, vec!["0xcc", "0xaa", "0xbb"]);
    }

    #[test]
    fn test_no_constructor_means_no_inputs() {
        let artifact: Artifact = serde_json::from_value(json!({
            "abi": [],
            "bytecode": "0x00"
        }))
        .unwrap();

        assert_eq!(artifact.constructor_input_count(), 0);
        assert!(!artifact.has_factory_deps());
        assert!(artifact.contract_name.is_empty());
    }
}
