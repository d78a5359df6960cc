use alloy::primitives::B256;
use sha2::{
    Digest,
    Sha256,
};
use thiserror::Error;

use crate::constants::MAX_BYTECODE_LEN_BYTES;

/// Bytecode hash version byte.
const CODE_HASH_VERSION: u8 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BytecodeHashError {
    #[error("The bytecode length in bytes must be divisible by 32, got {0}")]
    NotWordAligned(usize),
    #[error("Bytecode can not be longer than {max} bytes, got {0}", max = MAX_BYTECODE_LEN_BYTES)]
    TooLong(usize),
    #[error("Bytecode length in 32-byte words must be odd, got {0}")]
    EvenWordCount(usize),
}

/// Computes the versioned bytecode hash zkSync identifies contracts by.
///
/// Layout: `[version = 1, 0, len_in_words (u16 BE), sha256(bytecode)[4..32]]`.
pub fn hash_bytecode(bytecode: &[u8]) -> Result<B256, BytecodeHashError> {
    if bytecode.len() % 32 != 0 {
        return Err(BytecodeHashError::NotWordAligned(bytecode.len()));
    }
    if bytecode.len() > MAX_BYTECODE_LEN_BYTES {
        return Err(BytecodeHashError::TooLong(bytecode.len()));
    }

    let words = bytecode.len() / 32;
    if words % 2 == 0 {
        return Err(BytecodeHashError::EvenWordCount(words));
    }

    let mut hash: [u8; 32] = Sha256::digest(bytecode).into();
    hash[0] = CODE_HASH_VERSION;
    hash[1] = 0;
    // checked above, always fits
    hash[2..4].copy_from_slice(&(words as u16).to_be_bytes());

    Ok(B256::from(hash))
}
