//! Deployment transactions for EVM and zkSync chains.
//!
//! A [`DeploymentFactory`] is created once per artifact, constructor
//! arguments and network. It then builds the deployment transaction, derives
//! the CREATE2 address of the contract and tells whether a previously
//! broadcast deployment is still up to date.
//!
//! ```no_run
//! use alloy::primitives::{Address, B256};
//! use deploy_core::{Artifact, DeployOverrides, NetworkConfig};
//! use deploy_factory::{DeploymentFactory, InMemoryResolver};
//!
//! # async fn run(artifact: Artifact) -> Result<(), deploy_factory::FactoryError> {
//! let network = NetworkConfig::new("mainnet").with_chain_id(1);
//! let factory = DeploymentFactory::new(
//!     InMemoryResolver::new(),
//!     artifact,
//!     vec![],
//!     &network,
//!     None,
//!     DeployOverrides::default(),
//! )?;
//!
//! let tx = factory.get_deploy_transaction().await?;
//! let address = factory.get_create2_address(Address::ZERO, B256::ZERO).await?;
//! # Ok(())
//! # }
//! ```

pub mod encode_args;
mod error;
mod factory;
pub mod resolver;
pub mod signer;
pub mod strategy;
pub mod transaction;

pub use error::{
    FactoryError,
    Result,
};
pub use factory::DeploymentFactory;
pub use resolver::{
    ArtifactResolver,
    FnResolver,
    InMemoryResolver,
    ResolverError,
};
pub use signer::{
    UnknownSignerError,
    ensure_known_signer,
};
pub use transaction::{
    BroadcastTransaction,
    DeployTransaction,
};
