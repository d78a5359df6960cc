use alloy::{
    primitives::{
        Address,
        B256,
        TxKind,
    },
    rpc::types::TransactionInput,
};
use async_trait::async_trait;
use tracing::{
    debug,
    trace,
    warn,
};
use zksync_types::{
    Eip712Meta,
    Eip712Transaction,
    constants::{
        CONTRACT_DEPLOYER_ADDRESS,
        EIP712_TX_TYPE,
    },
    create2_address,
    deployer::{
        DeploymentType,
        encode_deploy_calldata,
    },
    hash_bytecode,
};

use super::{
    ChainStrategy,
    DeployContext,
};
use crate::{
    error::Result,
    transaction::{
        BroadcastTransaction,
        DeployTransaction,
    },
};

/// Deployments on zkSync: a call to the ContractDeployer system contract,
/// with every bytecode the contract may deploy shipped as a factory dependency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZkSyncStrategy;

#[async_trait]
impl ChainStrategy for ZkSyncStrategy {
    async fn build_transaction(&self, ctx: &DeployContext<'_>) -> Result<DeployTransaction> {
        let mut factory_deps = ctx.resolve_factory_deps().await?;

        let bytecode = &ctx.artifact.bytecode;
        let bytecode_hash = hash_bytecode(bytecode)?;
        let calldata = encode_deploy_calldata(
            DeploymentType::Create,
            B256::ZERO,
            bytecode_hash,
            ctx.constructor_input()?,
        );

        // The contract's own bytecode has to be known to the chain as well.
        if !factory_deps.contains(bytecode) {
            factory_deps.push(bytecode.clone());
        }

        debug!(
            target = "deploy_factory::zksync",
            contract = %ctx.artifact.contract_name,
            %bytecode_hash,
            factory_deps = factory_deps.len(),
            "Built deployment transaction"
        );

        let mut request = ctx.base_request();
        request.to = Some(TxKind::Call(CONTRACT_DEPLOYER_ADDRESS));
        request.input = TransactionInput::new(calldata);
        request.transaction_type = Some(EIP712_TX_TYPE);

        Ok(DeployTransaction {
            request,
            custom_data: Some(Eip712Meta::default().with_factory_deps(factory_deps)),
        })
    }

    async fn derive_address(
        &self,
        ctx: &DeployContext<'_>,
        deployer: Address,
        salt: B256,
    ) -> Result<Address> {
        let bytecode_hash = hash_bytecode(&ctx.artifact.bytecode)?;
        let constructor_input = ctx.constructor_input()?;
        let address = create2_address(deployer, bytecode_hash, salt, &constructor_input);

        debug!(
            target = "deploy_factory::zksync",
            contract = %ctx.artifact.contract_name,
            %deployer,
            %salt,
            %bytecode_hash,
            %address,
            "Derived create2 address"
        );

        Ok(address)
    }

    async fn compare_transaction(
        &self,
        ctx: &DeployContext<'_>,
        broadcast: &BroadcastTransaction,
    ) -> Result<bool> {
        let broadcast_tx = Eip712Transaction::decode(&broadcast.data)?;
        let deploy_tx = self.build_transaction(ctx).await?;

        let data_changed = deploy_tx.data() != Some(&broadcast_tx.data);
        let deps_changed = deploy_tx
            .custom_data
            .as_ref()
            .map(Eip712Meta::flattened_factory_deps)
            .unwrap_or_default()
            != broadcast_tx.meta().flattened_factory_deps();

        trace!(
            target = "deploy_factory::zksync",
            contract = %ctx.artifact.contract_name,
            data_changed,
            deps_changed,
            "Compared deployment against broadcast transaction"
        );

        let different = data_changed || deps_changed;
        if different {
            warn!(
                target = "deploy_factory::zksync",
                contract = %ctx.artifact.contract_name,
                tx_hash = ?broadcast.hash,
                data_changed,
                deps_changed,
                "Deployment differs from the broadcast transaction"
            );
        }

        Ok(different)
    }
}
