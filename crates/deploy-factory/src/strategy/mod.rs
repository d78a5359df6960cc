//! Chain specific deployment logic.
//!
//! Each chain family gets one [`ChainStrategy`] implementation. The factory
//! picks one when it is constructed and never looks at the chain family again.

mod evm;
mod zksync;

pub use evm::EvmStrategy;
pub use zksync::ZkSyncStrategy;

use alloy::{
    primitives::{
        Address,
        B256,
        Bytes,
    },
    rpc::types::TransactionRequest,
};
use alloy_dyn_abi::DynSolValue;
use async_trait::async_trait;
use deploy_core::{
    Artifact,
    ChainFamily,
    DeployOverrides,
};

use crate::{
    encode_args::encode_constructor_args,
    error::Result,
    resolver::{
        ArtifactResolver,
        resolve_factory_deps,
    },
    transaction::{
        BroadcastTransaction,
        DeployTransaction,
    },
};

/// Everything a strategy needs from the factory, borrowed for one call.
pub struct DeployContext<'a> {
    pub artifact: &'a Artifact,
    pub args: &'a [DynSolValue],
    pub overrides: &'a DeployOverrides,
    pub signer: Option<Address>,
    pub resolver: &'a dyn ArtifactResolver,
}

impl DeployContext<'_> {
    /// ABI encoded constructor arguments.
    pub fn constructor_input(&self) -> Result<Bytes> {
        Ok(encode_constructor_args(
            self.artifact.abi.constructor.as_ref(),
            self.args,
        )?)
    }

    /// Request with the sender and the caller's overrides filled in.
    pub fn base_request(&self) -> TransactionRequest {
        let mut request = TransactionRequest {
            from: self.signer,
            ..Default::default()
        };
        self.overrides.apply(&mut request);
        request
    }

    /// Bytecodes of the artifact's factory dependencies, in listed order.
    pub async fn resolve_factory_deps(&self) -> Result<Vec<Bytes>> {
        Ok(resolve_factory_deps(self.resolver, self.artifact).await?)
    }
}

/// Chain specific deployment operations.
#[async_trait]
pub trait ChainStrategy: Send + Sync {
    /// Builds the unsigned deployment transaction.
    async fn build_transaction(&self, ctx: &DeployContext<'_>) -> Result<DeployTransaction>;

    /// Address the contract gets when deployed by `deployer` with `salt`.
    async fn derive_address(
        &self,
        ctx: &DeployContext<'_>,
        deployer: Address,
        salt: B256,
    ) -> Result<Address>;

    /// Returns `true` when `broadcast` differs from what would be built now.
    async fn compare_transaction(
        &self,
        ctx: &DeployContext<'_>,
        broadcast: &BroadcastTransaction,
    ) -> Result<bool>;
}

/// The strategy selected for a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStrategy {
    Evm(EvmStrategy),
    ZkSync(ZkSyncStrategy),
}

impl DeployStrategy {
    pub fn for_family(family: ChainFamily) -> Self {
        match family {
            ChainFamily::Evm => Self::Evm(EvmStrategy),
            ChainFamily::ZkSync => Self::ZkSync(ZkSyncStrategy),
        }
    }

    pub fn chain_family(&self) -> ChainFamily {
        match self {
            Self::Evm(_) => ChainFamily::Evm,
            Self::ZkSync(_) => ChainFamily::ZkSync,
        }
    }

    fn inner(&self) -> &dyn ChainStrategy {
        match self {
            Self::Evm(strategy) => strategy,
            Self::ZkSync(strategy) => strategy,
        }
    }
}

#[async_trait]
impl ChainStrategy for DeployStrategy {
    async fn build_transaction(&self, ctx: &DeployContext<'_>) -> Result<DeployTransaction> {
        self.inner().build_transaction(ctx).await
    }

    async fn derive_address(
        &self,
        ctx: &DeployContext<'_>,
        deployer: Address,
        salt: B256,
    ) -> Result<Address> {
        self.inner().derive_address(ctx, deployer, salt).await
    }

    async fn compare_transaction(
        &self,
        ctx: &DeployContext<'_>,
        broadcast: &BroadcastTransaction,
    ) -> Result<bool> {
        self.inner().compare_transaction(ctx, broadcast).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_for_family() {
        assert_eq!(
            DeployStrategy::for_family(ChainFamily::Evm),
            DeployStrategy::Evm(EvmStrategy)
        );
        assert_eq!(
            DeployStrategy::for_family(ChainFamily::ZkSync),
            DeployStrategy::ZkSync(ZkSyncStrategy)
        );
        for family in [ChainFamily::Evm, ChainFamily::ZkSync] {
            assert_eq!(DeployStrategy::for_family(family).chain_family(), family);
        }
    }
}
