use std::sync::Arc;

use alloy::primitives::{
    Address,
    B256,
    Bytes,
};
use alloy_dyn_abi::DynSolValue;
use deploy_core::{
    Artifact,
    ChainFamily,
    DeployOverrides,
    NetworkConfig,
};
use tracing::debug;

use crate::{
    encode_args::{
        coerce_constructor_args,
        encode_constructor_args,
    },
    error::{
        FactoryError,
        Result,
    },
    resolver::{
        ArtifactResolver,
        resolve_factory_deps,
    },
    strategy::{
        ChainStrategy,
        DeployContext,
        DeployStrategy,
    },
    transaction::{
        BroadcastTransaction,
        DeployTransaction,
    },
};

/// Builds deployment transactions for one artifact with fixed constructor
/// arguments, on one network.
///
/// Every operation recomputes its result from the stored configuration and
/// the resolver; nothing is cached between calls.
#[derive(Debug)]
pub struct DeploymentFactory<R> {
    resolver: R,
    artifact: Arc<Artifact>,
    args: Vec<DynSolValue>,
    strategy: DeployStrategy,
    signer: Option<Address>,
    overrides: DeployOverrides,
}

impl<R: ArtifactResolver> DeploymentFactory<R> {
    /// Create a factory for `artifact`.
    ///
    /// Fails if `args` does not match the constructor inputs, in count or in type.
    pub fn new(
        resolver: R,
        artifact: impl Into<Arc<Artifact>>,
        args: Vec<DynSolValue>,
        network: &NetworkConfig,
        signer: Option<Address>,
        overrides: DeployOverrides,
    ) -> Result<Self> {
        let artifact = artifact.into();
        check_arg_count(&artifact, args.len())?;
        encode_constructor_args(artifact.abi.constructor.as_ref(), &args)?;

        let strategy = DeployStrategy::for_family(network.chain_family());

        debug!(
            target = "deploy_factory::factory",
            contract = %artifact.contract_name,
            network = %network.name,
            chain_family = ?strategy.chain_family(),
            num_args = args.len(),
            "Created deployment factory"
        );

        Ok(Self {
            resolver,
            artifact,
            args,
            strategy,
            signer,
            overrides,
        })
    }

    /// Like [`DeploymentFactory::new`], with arguments given as strings and
    /// coerced to the constructor input types.
    pub fn from_str_args<S: AsRef<str>>(
        resolver: R,
        artifact: impl Into<Arc<Artifact>>,
        args: &[S],
        network: &NetworkConfig,
        signer: Option<Address>,
        overrides: DeployOverrides,
    ) -> Result<Self> {
        let artifact = artifact.into();
        check_arg_count(&artifact, args.len())?;
        let values = coerce_constructor_args(artifact.abi.constructor.as_ref(), args)?;

        Self::new(resolver, artifact, values, network, signer, overrides)
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn args(&self) -> &[DynSolValue] {
        &self.args
    }

    pub fn chain_family(&self) -> ChainFamily {
        self.strategy.chain_family()
    }

    fn context(&self) -> DeployContext<'_> {
        DeployContext {
            artifact: &self.artifact,
            args: &self.args,
            overrides: &self.overrides,
            signer: self.signer,
            resolver: &self.resolver,
        }
    }

    /// ABI encoded constructor arguments.
    pub fn encode_constructor_args(&self) -> Result<Bytes> {
        self.context().constructor_input()
    }

    /// Bytecodes of `artifact`'s factory dependencies, looked up through the
    /// factory's resolver.
    pub async fn resolve_dependencies(&self, artifact: &Artifact) -> Result<Vec<Bytes>> {
        Ok(resolve_factory_deps(&self.resolver, artifact).await?)
    }

    /// Builds the unsigned deployment transaction.
    pub async fn get_deploy_transaction(&self) -> Result<DeployTransaction> {
        self.strategy.build_transaction(&self.context()).await
    }

    /// Address the contract gets when deployed through the CREATE2 deployer at
    /// `deployer` with `salt`.
    pub async fn get_create2_address(&self, deployer: Address, salt: B256) -> Result<Address> {
        self.strategy
            .derive_address(&self.context(), deployer, salt)
            .await
    }

    /// Returns `true` if `broadcast` is not what this factory would produce
    /// now, meaning the contract needs to be redeployed.
    pub async fn compare_deployment_transaction(
        &self,
        broadcast: &BroadcastTransaction,
    ) -> Result<bool> {
        self.strategy
            .compare_transaction(&self.context(), broadcast)
            .await
    }
}

fn check_arg_count(artifact: &Artifact, actual: usize) -> Result<()> {
    let expected = artifact.constructor_input_count();
    if actual != expected {
        return Err(FactoryError::ConstructorArgCount { expected, actual });
    }
    Ok(())
}
