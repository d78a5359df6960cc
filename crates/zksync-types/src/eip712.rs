//! The zkSync EIP-712 transaction envelope (type `0x71`).
//!
//! Wire layout, after the type byte, is a single RLP list:
//!
//! ```text
//! [nonce, maxPriorityFeePerGas, maxFeePerGas, gasLimit, to, value, data,
//!  chainId | v, "" | r, "" | s,
//!  chainId, from, gasPerPubdata, [factoryDeps...], customSignature,
//!  [paymaster, paymasterInput] | []]
//! ```
//!
//! Unsigned transactions carry `chainId, "", ""` in the signature slots.

use alloy::{
    primitives::{
        Address,
        Bytes,
        U256,
    },
    rlp::{
        self,
        BufMut,
        Decodable,
        Encodable,
        Header,
    },
};
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::constants::{
    DEFAULT_GAS_PER_PUBDATA_LIMIT,
    EIP712_TX_TYPE,
    ETH_ADDRESS,
};

#[derive(Debug, Error, PartialEq)]
pub enum Eip712Error {
    #[error("empty transaction payload")]
    Empty,
    #[error("not an EIP-712 transaction, type byte {0:#04x}")]
    InvalidType(u8),
    #[error("invalid address length {0}, expected 0 or 20 bytes")]
    InvalidAddressLength(usize),
    #[error("failed to parse signature, v = {0}")]
    InvalidSignature(u64),
    #[error("{0} trailing bytes after the transaction payload")]
    TrailingBytes(usize),
    #[error("RLP decoding error: {0}")]
    Rlp(#[from] rlp::Error),
}

/// Paymaster address and the input passed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymasterParams {
    pub paymaster: Address,
    pub paymaster_input: Bytes,
}

/// zkSync specific fields attached to a transaction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Meta {
    pub gas_per_pubdata: U256,
    #[serde(default)]
    pub factory_deps: Vec<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_signature: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_params: Option<PaymasterParams>,
    /// Token fees are paid in. Not part of the signed payload.
    #[serde(default)]
    pub fee_token: Address,
}

impl Default for Eip712Meta {
    fn default() -> Self {
        Self {
            gas_per_pubdata: U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT),
            factory_deps: Vec::new(),
            custom_signature: None,
            paymaster_params: None,
            fee_token: ETH_ADDRESS,
        }
    }
}

impl Eip712Meta {
    pub fn with_factory_deps(mut self, factory_deps: Vec<Bytes>) -> Self {
        self.factory_deps = factory_deps;
        self
    }

    /// All factory dependency bytecodes concatenated in order.
    pub fn flattened_factory_deps(&self) -> Bytes {
        flatten(&self.factory_deps)
    }
}

/// Concatenates bytecodes in order.
pub fn flatten(bytecodes: &[Bytes]) -> Bytes {
    bytecodes
        .iter()
        .flat_map(|bytecode| bytecode.iter().copied())
        .collect()
}

/// ECDSA signature fields of a signed EIP-712 transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eip712Signature {
    /// Recovery id, 0 or 1.
    pub v: u64,
    pub r: U256,
    pub s: U256,
}

/// A zkSync EIP-712 transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Eip712Transaction {
    pub nonce: U256,
    pub max_priority_fee_per_gas: U256,
    pub max_fee_per_gas: U256,
    pub gas_limit: U256,
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
    pub chain_id: u64,
    pub from: Option<Address>,
    pub signature: Option<Eip712Signature>,
    pub gas_per_pubdata: U256,
    pub factory_deps: Vec<Bytes>,
    pub custom_signature: Option<Bytes>,
    pub paymaster_params: Option<PaymasterParams>,
}

impl Eip712Transaction {
    /// The zkSync specific part of the transaction. The fee token is not
    /// carried on the wire and comes back as [`ETH_ADDRESS`].
    pub fn meta(&self) -> Eip712Meta {
        Eip712Meta {
            gas_per_pubdata: self.gas_per_pubdata,
            factory_deps: self.factory_deps.clone(),
            custom_signature: self.custom_signature.clone(),
            paymaster_params: self.paymaster_params.clone(),
            fee_token: ETH_ADDRESS,
        }
    }

    /// Serializes the transaction, type byte included.
    pub fn encode(&self) -> Bytes {
        let mut payload = Vec::new();
        self.encode_fields(&mut payload);

        let mut out = Vec::with_capacity(payload.len() + 10);
        out.push(EIP712_TX_TYPE);
        Header {
            list: true,
            payload_length: payload.len(),
        }
        .encode(&mut out);
        out.put_slice(&payload);
        out.into()
    }

    fn encode_fields(&self, out: &mut dyn BufMut) {
        self.nonce.encode(out);
        self.max_priority_fee_per_gas.encode(out);
        self.max_fee_per_gas.encode(out);
        self.gas_limit.encode(out);
        encode_optional_address(self.to, out);
        self.value.encode(out);
        self.data.encode(out);

        match &self.signature {
            Some(signature) => {
                signature.v.encode(out);
                signature.r.encode(out);
                signature.s.encode(out);
            }
            None => {
                self.chain_id.encode(out);
                Bytes::new().encode(out);
                Bytes::new().encode(out);
            }
        }

        self.chain_id.encode(out);
        encode_optional_address(self.from, out);
        self.gas_per_pubdata.encode(out);
        self.factory_deps.encode(out);
        self.custom_signature.clone().unwrap_or_default().encode(out);

        match &self.paymaster_params {
            Some(params) => {
                let payload_length =
                    params.paymaster.length() + params.paymaster_input.length();
                Header {
                    list: true,
                    payload_length,
                }
                .encode(out);
                params.paymaster.encode(out);
                params.paymaster_input.encode(out);
            }
            None => Header {
                list: true,
                payload_length: 0,
            }
            .encode(out),
        }
    }

    /// Parses a serialized EIP-712 transaction, type byte included.
    pub fn decode(raw: &[u8]) -> Result<Self, Eip712Error> {
        let (ty, mut buf) = raw.split_first().ok_or(Eip712Error::Empty)?;
        if *ty != EIP712_TX_TYPE {
            return Err(Eip712Error::InvalidType(*ty));
        }

        let header = Header::decode(&mut buf)?;
        if !header.list {
            return Err(rlp::Error::UnexpectedString.into());
        }
        if buf.len() < header.payload_length {
            return Err(rlp::Error::InputTooShort.into());
        }
        if buf.len() > header.payload_length {
            return Err(Eip712Error::TrailingBytes(
                buf.len() - header.payload_length,
            ));
        }

        let body = &mut buf;
        let nonce = U256::decode(body)?;
        let max_priority_fee_per_gas = U256::decode(body)?;
        let max_fee_per_gas = U256::decode(body)?;
        let gas_limit = U256::decode(body)?;
        let to = decode_optional_address(body)?;
        let value = U256::decode(body)?;
        let data = Bytes::decode(body)?;
        let v = u64::decode(body)?;
        let r = Bytes::decode(body)?;
        let s = Bytes::decode(body)?;
        let chain_id = u64::decode(body)?;
        let from = decode_optional_address(body)?;
        let gas_per_pubdata = U256::decode(body)?;
        let factory_deps = Vec::<Bytes>::decode(body)?;
        let custom_signature = Some(Bytes::decode(body)?).filter(|sig| !sig.is_empty());
        let paymaster_params = decode_paymaster_params(body)?;

        if !body.is_empty() {
            return Err(Eip712Error::TrailingBytes(body.len()));
        }

        let signature = if r.is_empty() || s.is_empty() || custom_signature.is_some() {
            None
        } else {
            if v > 1 {
                return Err(Eip712Error::InvalidSignature(v));
            }
            Some(Eip712Signature {
                v,
                r: U256::try_from_be_slice(&r).ok_or(rlp::Error::Overflow)?,
                s: U256::try_from_be_slice(&s).ok_or(rlp::Error::Overflow)?,
            })
        };

        Ok(Self {
            nonce,
            max_priority_fee_per_gas,
            max_fee_per_gas,
            gas_limit,
            to,
            value,
            data,
            chain_id,
            from,
            signature,
            gas_per_pubdata,
            factory_deps,
            custom_signature,
            paymaster_params,
        })
    }
}

fn encode_optional_address(address: Option<Address>, out: &mut dyn BufMut) {
    match address {
        Some(address) => address.encode(out),
        None => Bytes::new().encode(out),
    }
}

fn decode_optional_address(buf: &mut &[u8]) -> Result<Option<Address>, Eip712Error> {
    let raw = Bytes::decode(buf)?;
    match raw.len() {
        0 => Ok(None),
        20 => Ok(Some(Address::from_slice(&raw))),
        len => Err(Eip712Error::InvalidAddressLength(len)),
    }
}

fn decode_paymaster_params(buf: &mut &[u8]) -> Result<Option<PaymasterParams>, Eip712Error> {
    let header = Header::decode(buf)?;
    if !header.list {
        return Err(rlp::Error::UnexpectedString.into());
    }
    if header.payload_length == 0 {
        return Ok(None);
    }
    if buf.len() < header.payload_length {
        return Err(rlp::Error::InputTooShort.into());
    }

    let (mut list, rest) = buf.split_at(header.payload_length);
    let paymaster = Address::decode(&mut list)?;
    let paymaster_input = Bytes::decode(&mut list)?;
    if !list.is_empty() {
        return Err(rlp::Error::ListLengthMismatch {
            expected: header.payload_length,
            got: header.payload_length - list.len(),
        }
        .into());
    }
    *buf = rest;

    Ok(Some(PaymasterParams {
        paymaster,
        paymaster_input,
    }))
}
