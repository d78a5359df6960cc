use alloy::{
    primitives::{
        Address,
        U256,
    },
    rpc::types::TransactionRequest,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Transaction fields the caller wants pinned on every deployment request.
///
/// Unset fields are left for the signer/provider to fill in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u128>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<u128>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<u128>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl DeployOverrides {
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Set EIP-1559 fee fields
    pub fn with_eip1559_fees(
        mut self,
        max_fee_per_gas: u128,
        max_priority_fee_per_gas: u128,
    ) -> Self {
        self.max_fee_per_gas = Some(max_fee_per_gas);
        self.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        self
    }

    /// Copy every set field onto `request`, replacing what is already there.
    pub fn apply(&self, request: &mut TransactionRequest) {
        if let Some(from) = self.from {
            request.from = Some(from);
        }
        if let Some(gas_limit) = self.gas_limit {
            request.gas = Some(gas_limit);
        }
        if let Some(gas_price) = self.gas_price {
            request.gas_price = Some(gas_price);
        }
        if let Some(max_fee_per_gas) = self.max_fee_per_gas {
            request.max_fee_per_gas = Some(max_fee_per_gas);
        }
        if let Some(max_priority_fee_per_gas) = self.max_priority_fee_per_gas {
            request.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        }
        if let Some(nonce) = self.nonce {
            request.nonce = Some(nonce);
        }
        if let Some(value) = self.value {
            request.value = Some(value);
        }
        if let Some(chain_id) = self.chain_id {
            request.chain_id = Some(chain_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_apply_only_touches_set_fields() {
        let mut request = TransactionRequest {
            gas: Some(1),
            nonce: Some(7),
            ..Default::default()
        };

        DeployOverrides::default()
            .with_gas_limit(3_000_000)
            .with_eip1559_fees(2_000_000_000, 1_000_000_000)
            .apply(&mut request);

        assert_eq!(request.gas, Some(3_000_000));
        assert_eq!(request.nonce, Some(7));
        assert_eq!(request.max_fee_per_gas, Some(2_000_000_000));
        assert_eq!(request.max_priority_fee_per_gas, Some(1_000_000_000));
        assert_eq!(request.from, None);
        assert_eq!(request.value, None);
    }

    #[test]
    fn test_deserialize_overrides() {
        let overrides: DeployOverrides = serde_json::from_str(
            r#"{
                "from": "0x1111111111111111111111111111111111111111",
                "gasLimit": 500000,
                "nonce": 3
            }"#,
        )
        .unwrap();

        assert_eq!(
            overrides.from,
            Some(address!("1111111111111111111111111111111111111111"))
        );
        assert_eq!(overrides.gas_limit, Some(500_000));
        assert_eq!(overrides.nonce, Some(3));
        assert_eq!(overrides.value, None);
    }
}
