use alloy::{
    primitives::{
        B256,
        Bytes,
        TxKind,
        U256,
    },
    rpc::types::TransactionRequest,
};
use serde::{
    Deserialize,
    Serialize,
};
use zksync_types::{
    Eip712Meta,
    Eip712Transaction,
};

use crate::error::{
    FactoryError,
    Result,
};

/// An unsigned contract deployment.
///
/// On zkSync the request targets the ContractDeployer and `custom_data`
/// carries the factory dependencies; on EVM chains `custom_data` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployTransaction {
    #[serde(flatten)]
    pub request: TransactionRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Eip712Meta>,
}

impl DeployTransaction {
    /// The calldata of the request, if any was set.
    pub fn data(&self) -> Option<&Bytes> {
        self.request.input.input()
    }

    /// The payload of the request as a single byte string.
    ///
    /// Fails when the request has no input at all, or when the `input` and
    /// `data` fields disagree.
    pub fn init_code(&self) -> Result<Bytes> {
        self.request
            .input
            .clone()
            .try_into_unique_input()
            .ok()
            .flatten()
            .ok_or(FactoryError::UnsupportedTxData)
    }

    /// The zkSync EIP-712 form of this request, unsigned. `None` for EVM requests.
    pub fn to_eip712(&self) -> Option<Eip712Transaction> {
        let meta = self.custom_data.as_ref()?;
        let request = &self.request;

        Some(Eip712Transaction {
            nonce: U256::from(request.nonce.unwrap_or_default()),
            max_priority_fee_per_gas: U256::from(
                request.max_priority_fee_per_gas.unwrap_or_default(),
            ),
            max_fee_per_gas: U256::from(
                request
                    .max_fee_per_gas
                    .or(request.gas_price)
                    .unwrap_or_default(),
            ),
            gas_limit: U256::from(request.gas.unwrap_or_default()),
            to: match request.to {
                Some(TxKind::Call(to)) => Some(to),
                _ => None,
            },
            value: request.value.unwrap_or_default(),
            data: self.data().cloned().unwrap_or_default(),
            chain_id: request.chain_id.unwrap_or_default(),
            from: request.from,
            signature: None,
            gas_per_pubdata: meta.gas_per_pubdata,
            factory_deps: meta.factory_deps.clone(),
            custom_signature: meta.custom_signature.clone(),
            paymaster_params: meta.paymaster_params.clone(),
        })
    }

    /// What a node would hand back for this transaction once broadcast: the
    /// calldata on EVM chains, the serialized EIP-712 envelope on zkSync.
    pub fn to_broadcast(&self) -> BroadcastTransaction {
        let data = match self.to_eip712() {
            Some(tx) => tx.encode(),
            None => self.data().cloned().unwrap_or_default(),
        };

        BroadcastTransaction { hash: None, data }
    }

    /// Pretty JSON rendering, used in diagnostics.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|err| format!("<unserializable: {err}>"))
    }
}

/// A previously broadcast deployment, as recorded by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<B256>,
    /// Calldata for EVM deployments, the raw EIP-712 payload for zkSync ones.
    pub data: Bytes,
}

impl BroadcastTransaction {
    pub fn new(data: Bytes) -> Self {
        Self { hash: None, data }
    }

    pub fn with_hash(mut self, hash: B256) -> Self {
        self.hash = Some(hash);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{
            address,
            bytes,
        },
        rpc::types::TransactionInput,
    };

    fn request(input: TransactionInput) -> TransactionRequest {
        TransactionRequest {
            to: Some(TxKind::Create),
            input,
            ..Default::default()
        }
    }

    #[test]
    fn test_init_code_requires_single_payload() {
        let tx = DeployTransaction {
            request: request(TransactionInput::new(bytes!("6080"))),
            custom_data: None,
        };
        assert_eq!(tx.init_code().unwrap(), bytes!("6080"));

        let missing = DeployTransaction {
            request: request(TransactionInput::default()),
            custom_data: None,
        };
        assert!(matches!(
            missing.init_code(),
            Err(FactoryError::UnsupportedTxData)
        ));

        let conflicting = DeployTransaction {
            request: request(TransactionInput {
                input: Some(bytes!("6080")),
                data: Some(bytes!("6081")),
            }),
            custom_data: None,
        };
        assert!(matches!(
            conflicting.init_code(),
            Err(FactoryError::UnsupportedTxData)
        ));
    }

    #[test]
    fn test_evm_request_has_no_eip712_form() {
        let tx = DeployTransaction {
            request: request(TransactionInput::new(bytes!("6080"))),
            custom_data: None,
        };

        assert!(tx.to_eip712().is_none());
        assert_eq!(tx.to_broadcast().data, bytes!("6080"));
    }

    #[test]
    fn test_eip712_form_carries_request_fields() {
        let deployer = address!("0000000000000000000000000000000000008006");
        let from = address!("36615cf349d7f6344891b1e7ca7c72883f5dc049");
        let tx = DeployTransaction {
            request: TransactionRequest {
                from: Some(from),
                to: Some(TxKind::Call(deployer)),
                nonce: Some(4),
                gas: Some(1_000_000),
                gas_price: Some(250_000_000),
                chain_id: Some(324),
                input: TransactionInput::new(bytes!("9c4d535b")),
                ..Default::default()
            },
            custom_data: Some(Eip712Meta::default().with_factory_deps(vec![bytes!("aa")])),
        };

        let eip712 = tx.to_eip712().unwrap();
        assert_eq!(eip712.to, Some(deployer));
        assert_eq!(eip712.from, Some(from));
        assert_eq!(eip712.nonce, U256::from(4));
        assert_eq!(eip712.max_fee_per_gas, U256::from(250_000_000u64));
        assert_eq!(eip712.chain_id, 324);
        assert_eq!(eip712.factory_deps, vec![bytes!("aa")]);

        let decoded = Eip712Transaction::decode(&tx.to_broadcast().data).unwrap();
        assert_eq!(decoded, eip712);
    }

    #[test]
    fn test_serializes_custom_data() {
        let tx = DeployTransaction {
            request: request(TransactionInput::new(bytes!("01"))),
            custom_data: Some(Eip712Meta::default().with_factory_deps(vec![bytes!("aa")])),
        };

        let json: serde_json::Value = serde_json::from_str(&tx.to_pretty_json()).unwrap();
        assert_eq!(json["input"], "0x01");
        assert_eq!(json["customData"]["factoryDeps"][0], "0xaa");
    }
}
