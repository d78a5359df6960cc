use thiserror::Error;
use zksync_types::{
    BytecodeHashError,
    Eip712Error,
};

use crate::{
    encode_args::EncodeArgsError,
    resolver::ResolverError,
};

pub type Result<T, E = FactoryError> = std::result::Result<T, E>;

/// Top level error type for building and comparing deployments.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("expected {expected} constructor arguments, got {actual}")]
    ConstructorArgCount { expected: usize, actual: usize },
    #[error("unsigned tx data as bytes not supported")]
    UnsupportedTxData,
    #[error("failed to resolve factory dependency: {0}")]
    Resolve(#[from] ResolverError),
    #[error("constructor argument error: {0}")]
    ConstructorArgs(#[from] EncodeArgsError),
    #[error("bytecode hash error: {0}")]
    BytecodeHash(#[from] BytecodeHashError),
    #[error("failed to decode broadcast transaction: {0}")]
    Eip712Decode(#[from] Eip712Error),
}
