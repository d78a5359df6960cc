//! zkSync primitives needed to build and inspect contract deployments:
//! system contract addresses, bytecode hashing, address derivation and the
//! EIP-712 (type `0x71`) transaction envelope.

pub mod address;
pub mod bytecode;
pub mod constants;
pub mod deployer;
pub mod eip712;

pub use address::create2_address;
pub use bytecode::{
    BytecodeHashError,
    hash_bytecode,
};
pub use eip712::{
    Eip712Error,
    Eip712Meta,
    Eip712Signature,
    Eip712Transaction,
    PaymasterParams,
};
