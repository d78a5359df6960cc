//! zkSync address derivation. Unlike the EVM, zkSync hashes the bytecode
//! hash and the constructor input separately under its own domain prefixes.

use alloy::primitives::{
    Address,
    B256,
    keccak256,
};

use crate::constants::create2_prefix;

/// Address of a contract deployed with `create2`.
///
/// `keccak256(prefix ++ pad32(sender) ++ salt ++ bytecode_hash ++ keccak256(input))[12..]`
pub fn create2_address(
    sender: Address,
    bytecode_hash: B256,
    salt: B256,
    input: &[u8],
) -> Address {
    let mut preimage = [0u8; 32 * 5];
    preimage[..32].copy_from_slice(create2_prefix().as_slice());
    preimage[44..64].copy_from_slice(sender.as_slice());
    preimage[64..96].copy_from_slice(salt.as_slice());
    preimage[96..128].copy_from_slice(bytecode_hash.as_slice());
    preimage[128..].copy_from_slice(keccak256(input).as_slice());

    Address::from_word(keccak256(preimage))
}
