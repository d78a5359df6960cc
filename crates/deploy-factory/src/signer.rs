use alloy::primitives::Address;
use thiserror::Error;

use crate::transaction::DeployTransaction;

/// A transaction has to be sent from an account no signer is configured for.
///
/// The offending transaction is kept so callers can inspect or log it.
#[derive(Debug, Error)]
#[error(
    "Unknown Signer for account: {} Trying to execute the following::\n {}",
    display_account(.from),
    .transaction.to_pretty_json()
)]
pub struct UnknownSignerError {
    pub from: Option<Address>,
    pub transaction: Box<DeployTransaction>,
}

fn display_account(account: &Option<Address>) -> String {
    account.map_or_else(|| "<unset>".to_string(), |address| address.to_string())
}

/// Checks that the sender of `transaction` is one of `signers`.
pub fn ensure_known_signer(
    transaction: &DeployTransaction,
    signers: &[Address],
) -> Result<(), UnknownSignerError> {
    let from = transaction.request.from;
    if from.is_some_and(|from| signers.contains(&from)) {
        return Ok(());
    }

    Err(UnknownSignerError {
        from,
        transaction: Box::new(transaction.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{
            TxKind,
            address,
            bytes,
        },
        rpc::types::{
            TransactionInput,
            TransactionRequest,
        },
    };

    fn deploy_from(from: Option<Address>) -> DeployTransaction {
        DeployTransaction {
            request: TransactionRequest {
                from,
                to: Some(TxKind::Create),
                input: TransactionInput::new(bytes!("6080")),
                ..Default::default()
            },
            custom_data: None,
        }
    }

    #[test]
    fn test_known_signer() {
        let signer = address!("1111111111111111111111111111111111111111");
        assert!(ensure_known_signer(&deploy_from(Some(signer)), &[signer]).is_ok());
    }

    #[test]
    fn test_unknown_signer_carries_transaction() {
        let signer = address!("1111111111111111111111111111111111111111");
        let stranger = address!("2222222222222222222222222222222222222222");
        let tx = deploy_from(Some(stranger));

        let err = ensure_known_signer(&tx, &[signer]).unwrap_err();
        assert_eq!(err.from, Some(stranger));
        assert_eq!(*err.transaction, tx);

        let message = err.to_string();
        assert!(message.starts_with(&format!("Unknown Signer for account: {stranger}")));
        assert!(message.contains("0x6080"));
    }

    #[test]
    fn test_missing_sender_is_unknown() {
        let err = ensure_known_signer(&deploy_from(None), &[]).unwrap_err();
        assert_eq!(err.from, None);
        assert!(err.to_string().contains("<unset>"));
    }
}
