use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::hdpath;

/// The virtual machine family a network runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    /// Standard EVM chain. Contracts are created by sending init code.
    #[default]
    Evm,
    /// zkSync-style chain. Contracts are created through the ContractDeployer
    /// system contract and reference their dependencies by bytecode hash.
    ZkSync,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkConfigError {
    #[error("invalid network configuration: {0}")]
    Invalid(String),
}

/// Network descriptor handed to the deployment factory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Human readable network name (e.g. `mainnet`, `zksync-era`).
    pub name: String,
    /// Chain id, if known ahead of time.
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Set for zkSync-style networks.
    #[serde(default)]
    pub zksync: bool,
}

impl NetworkConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the chain id of the network
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Mark the network as a zkSync-style network
    pub fn with_zksync(mut self, zksync: bool) -> Self {
        self.zksync = zksync;
        self
    }

    pub fn chain_family(&self) -> ChainFamily {
        if self.zksync {
            ChainFamily::ZkSync
        } else {
            ChainFamily::Evm
        }
    }

    /// HD wallet derivation path for the configured chain id, if supported.
    pub fn derivation_path(&self) -> Option<String> {
        self.chain_id.and_then(hdpath::derivation_path)
    }

    /// Validates a configuration loaded from disk.
    pub fn validate(self) -> Result<Self, NetworkConfigError> {
        if self.name.trim().is_empty() {
            return Err(NetworkConfigError::Invalid(
                "network name must not be empty".to_string(),
            ));
        }

        if self.chain_id == Some(0) {
            return Err(NetworkConfigError::Invalid(
                "chain id must be non-zero".to_string(),
            ));
        }

        Ok(self)
    }
}
