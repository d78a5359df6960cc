use std::sync::LazyLock;

use alloy::primitives::{
    Address,
    B256,
    address,
    keccak256,
};

/// The ContractDeployer system contract. Every deployment is a call to it.
pub const CONTRACT_DEPLOYER_ADDRESS: Address =
    address!("0000000000000000000000000000000000008006");

/// Placeholder address zkSync uses for the native token when paying fees.
pub const ETH_ADDRESS: Address = Address::ZERO;

/// EIP-2718 type byte of zkSync EIP-712 transactions.
pub const EIP712_TX_TYPE: u8 = 0x71;

/// Gas per pubdata byte limit used when the caller does not set one.
pub const DEFAULT_GAS_PER_PUBDATA_LIMIT: u64 = 50_000;

/// The bytecode length in words is stored in two bytes of the bytecode hash.
pub const MAX_BYTECODE_LEN_WORDS: usize = (1 << 16) - 1;

/// Upper bound on bytecode size, in bytes.
pub const MAX_BYTECODE_LEN_BYTES: usize = MAX_BYTECODE_LEN_WORDS * 32;

static CREATE2_PREFIX: LazyLock<B256> = LazyLock::new(|| keccak256("zksyncCreate2"));

/// `keccak256("zksyncCreate2")`, the domain separator of CREATE2 addresses.
pub fn create2_prefix() -> B256 {
    *CREATE2_PREFIX
}
