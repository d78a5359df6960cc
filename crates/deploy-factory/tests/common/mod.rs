#![allow(dead_code)]

use alloy::primitives::{
    Address,
    Bytes,
    U256,
    address,
};
use alloy_dyn_abi::DynSolValue;
use deploy_core::{
    Artifact,
    DeployOverrides,
    FactoryDeps,
    NetworkConfig,
};
use deploy_factory::{
    DeploymentFactory,
    InMemoryResolver,
};
use serde_json::json;

pub const OWNER: Address = address!("36615cf349d7f6344891b1e7ca7c72883f5dc049");
pub const SIGNER: Address = address!("a0ee7a142d267c1f36714e4a8f75612f20a79720");

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 32 byte bytecode filled with `fill`, a valid zkSync bytecode of one word.
pub fn zk_bytecode(fill: u8) -> Bytes {
    Bytes::from(vec![fill; 32])
}

/// Artifact for `constructor(uint256 supply, address owner)`.
pub fn token_artifact(bytecode: Bytes) -> Artifact {
    serde_json::from_value(json!({
        "contractName": "Token",
        "abi": [{
            "type": "constructor",
            "stateMutability": "nonpayable",
            "inputs": [
                { "name": "supply", "type": "uint256", "internalType": "uint256" },
                { "name": "owner", "type": "address", "internalType": "address" }
            ]
        }],
        "bytecode": bytecode,
    }))
    .expect("valid artifact json")
}

/// Artifact without a constructor.
pub fn plain_artifact(name: &str, bytecode: Bytes) -> Artifact {
    Artifact {
        contract_name: name.to_string(),
        bytecode,
        ..Default::default()
    }
}

pub fn token_args() -> Vec<DynSolValue> {
    vec![
        DynSolValue::Uint(U256::from(1_000_000u64), 256),
        DynSolValue::Address(OWNER),
    ]
}

/// A zkSync factory artifact deploying `Child` and `Helper`.
pub fn zk_factory_artifact() -> Artifact {
    token_artifact(zk_bytecode(0x01)).with_factory_deps(FactoryDeps::from([
        ("0x02".to_string(), "contracts/Child.sol:Child".to_string()),
        ("0x01".to_string(), "contracts/Helper.sol:Helper".to_string()),
    ]))
}

pub fn zk_resolver() -> InMemoryResolver {
    InMemoryResolver::new()
        .with_artifact(
            "contracts/Child.sol:Child",
            plain_artifact("Child", zk_bytecode(0xcc)),
        )
        .with_artifact(
            "contracts/Helper.sol:Helper",
            plain_artifact("Helper", zk_bytecode(0xee)),
        )
}

pub fn mainnet() -> NetworkConfig {
    NetworkConfig::new("mainnet").with_chain_id(1)
}

pub fn zksync_era() -> NetworkConfig {
    NetworkConfig::new("zksync-era")
        .with_chain_id(324)
        .with_zksync(true)
}

pub fn evm_factory() -> DeploymentFactory<InMemoryResolver> {
    DeploymentFactory::new(
        InMemoryResolver::new(),
        token_artifact(Bytes::from_static(&[0x60, 0x80, 0x60, 0x40])),
        token_args(),
        &mainnet(),
        Some(SIGNER),
        DeployOverrides::default(),
    )
    .expect("valid evm factory")
}

pub fn zk_factory() -> DeploymentFactory<InMemoryResolver> {
    DeploymentFactory::new(
        zk_resolver(),
        zk_factory_artifact(),
        token_args(),
        &zksync_era(),
        Some(SIGNER),
        DeployOverrides::default(),
    )
    .expect("valid zksync factory")
}
