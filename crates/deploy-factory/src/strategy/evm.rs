use alloy::{
    primitives::{
        Address,
        B256,
        Bytes,
        TxKind,
    },
    rpc::types::TransactionInput,
};
use async_trait::async_trait;
use tracing::{
    debug,
    warn,
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

/// Deployments on standard EVM chains: a contract creation transaction whose
/// input is the init code followed by the constructor arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvmStrategy;

#[async_trait]
impl ChainStrategy for EvmStrategy {
    async fn build_transaction(&self, ctx: &DeployContext<'_>) -> Result<DeployTransaction> {
        let constructor_input = ctx.constructor_input()?;
        let init_code: Bytes = [&ctx.artifact.bytecode[..], &constructor_input[..]]
            .concat()
            .into();

        let mut request = ctx.base_request();
        request.to = Some(TxKind::Create);
        request.input = TransactionInput::new(init_code);

        Ok(DeployTransaction {
            request,
            custom_data: None,
        })
    }

    async fn derive_address(
        &self,
        ctx: &DeployContext<'_>,
        deployer: Address,
        salt: B256,
    ) -> Result<Address> {
        let deploy_tx = self.build_transaction(ctx).await?;
        let init_code = deploy_tx.init_code()?;
        let address = deployer.create2_from_code(salt, &init_code);

        debug!(
            target = "deploy_factory::evm",
            contract = %ctx.artifact.contract_name,
            %deployer,
            %salt,
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
        let deploy_tx = self.build_transaction(ctx).await?;
        let different = deploy_tx.data() != Some(&broadcast.data);

        if different {
            warn!(
                target = "deploy_factory::evm",
                contract = %ctx.artifact.contract_name,
                tx_hash = ?broadcast.hash,
                "Deployment data differs from the broadcast transaction"
            );
        }

        Ok(different)
    }
}
