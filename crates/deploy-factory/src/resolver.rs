use std::{
    collections::HashMap,
    future::Future,
    sync::Arc,
};

use alloy::primitives::Bytes;
use async_trait::async_trait;
use deploy_core::Artifact;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("failed to load artifact {name}: {source}")]
    Load {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Looks compiled artifacts up by contract name.
///
/// Factory dependencies are resolved through this at call time, so
/// dependencies do not need to be known when the factory is constructed.
#[async_trait]
pub trait ArtifactResolver: Send + Sync {
    async fn resolve(&self, name: &str) -> Result<Artifact, ResolverError>;
}

#[async_trait]
impl<R: ArtifactResolver + ?Sized> ArtifactResolver for Arc<R> {
    async fn resolve(&self, name: &str) -> Result<Artifact, ResolverError> {
        (**self).resolve(name).await
    }
}

/// Resolver backed by a map of already loaded artifacts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResolver {
    artifacts: HashMap<String, Artifact>,
}

impl InMemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artifact(mut self, name: impl Into<String>, artifact: Artifact) -> Self {
        self.insert(name, artifact);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, artifact: Artifact) -> Option<Artifact> {
        self.artifacts.insert(name.into(), artifact)
    }
}

#[async_trait]
impl ArtifactResolver for InMemoryResolver {
    async fn resolve(&self, name: &str) -> Result<Artifact, ResolverError> {
        self.artifacts
            .get(name)
            .cloned()
            .ok_or_else(|| ResolverError::NotFound(name.to_string()))
    }
}

/// Adapts an async closure into an [`ArtifactResolver`].
pub struct FnResolver<F>(pub F);

#[async_trait]
impl<F, Fut> ArtifactResolver for FnResolver<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Artifact, ResolverError>> + Send,
{
    async fn resolve(&self, name: &str) -> Result<Artifact, ResolverError> {
        (self.0)(name.to_string()).await
    }
}

/// Resolves every factory dependency of `artifact` to its bytecode.
///
/// Bytecodes are returned in the order the artifact lists its dependencies.
/// The first lookup failure is returned as is.
pub async fn resolve_factory_deps(
    resolver: &dyn ArtifactResolver,
    artifact: &Artifact,
) -> Result<Vec<Bytes>, ResolverError> {
    let Some(factory_deps) = artifact.factory_deps.as_ref() else {
        return Ok(Vec::new());
    };

    let mut bytecodes = Vec::with_capacity(factory_deps.len());
    for (dependency_hash, contract_name) in factory_deps {
        debug!(
            target = "deploy_factory::resolver",
            contract = %artifact.contract_name,
            %dependency_hash,
            dependency = %contract_name,
            "Resolving factory dependency"
        );
        let dependency = resolver.resolve(contract_name).await?;
        bytecodes.push(dependency.bytecode);
    }

    Ok(bytecodes)
}
