//! Calldata for the ContractDeployer system contract.

use alloy::primitives::{
    B256,
    Bytes,
};
use alloy_sol_types::{
    SolCall,
    sol,
};

sol! {
    #[derive(Debug)]
    interface IContractDeployer {
        function create(
            bytes32 _salt,
            bytes32 _bytecodeHash,
            bytes _input
        ) external payable returns (address);
        function create2(
            bytes32 _salt,
            bytes32 _bytecodeHash,
            bytes _input
        ) external payable returns (address);
    }
}

/// Which ContractDeployer entry point a deployment goes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeploymentType {
    #[default]
    Create,
    Create2,
}

/// Encodes the call to the ContractDeployer that deploys `bytecode_hash`
/// with the ABI encoded constructor `input`.
pub fn encode_deploy_calldata(
    deployment_type: DeploymentType,
    salt: B256,
    bytecode_hash: B256,
    input: Bytes,
) -> Bytes {
    match deployment_type {
        DeploymentType::Create => IContractDeployer::createCall {
            _salt: salt,
            _bytecodeHash: bytecode_hash,
            _input: input,
        }
        .abi_encode()
        .into(),
        DeploymentType::Create2 => IContractDeployer::create2Call {
            _salt: salt,
            _bytecodeHash: bytecode_hash,
            _input: input,
        }
        .abi_encode()
        .into(),
    }
}

/// Splits ContractDeployer calldata back into `(salt, bytecode_hash, input)`.
pub fn decode_deploy_calldata(calldata: &[u8]) -> Option<(DeploymentType, B256, B256, Bytes)> {
    let selector = calldata.get(..4)?;
    if selector == IContractDeployer::createCall::SELECTOR {
        let call = IContractDeployer::createCall::abi_decode(calldata).ok()?;
        return Some((
            DeploymentType::Create,
            call._salt,
            call._bytecodeHash,
            call._input,
        ));
    }
    if selector == IContractDeployer::create2Call::SELECTOR {
        let call = IContractDeployer::create2Call::abi_decode(calldata).ok()?;
        return Some((
            DeploymentType::Create2,
            call._salt,
            call._bytecodeHash,
            call._input,
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{
        b256,
        bytes,
    };

    #[test]
    fn test_create_selector() {
        // create(bytes32,bytes32,bytes)
        assert_eq!(
            hex::encode(IContractDeployer::createCall::SELECTOR),
            "9c4d535b"
        );
    }

    #[test]
    fn test_encode_decode_calldata() {
        let hash = b256!("0100000300000000000000000000000000000000000000000000000000000000");
        let input = bytes!("00000000000000000000000000000000000000000000000000000000000000ff");

        for deployment_type in [DeploymentType::Create, DeploymentType::Create2] {
            let calldata =
                encode_deploy_calldata(deployment_type, B256::ZERO, hash, input.clone());
            let (decoded_type, salt, bytecode_hash, decoded_input) =
                decode_deploy_calldata(&calldata).unwrap();

            assert_eq!(decoded_type, deployment_type);
            assert_eq!(salt, B256::ZERO);
            assert_eq!(bytecode_hash, hash);
            assert_eq!(decoded_input, input);
        }
    }

    #[test]
    fn test_decode_unknown_selector() {
        assert!(decode_deploy_calldata(&[0xde, 0xad, 0xbe, 0xef]).is_none());
        assert!(decode_deploy_calldata(&[0x9c]).is_none());
    }
}
