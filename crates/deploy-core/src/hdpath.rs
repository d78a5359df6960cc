//! BIP-44 derivation paths for the chains we know how to derive keys for.

use tracing::error;

/// Returns the `m/44'/{coin_type}'/0'/0` derivation path for `chain_id`.
///
/// Mainnet and Ronin use coin type 60, the legacy public testnets coin type 1.
pub fn derivation_path(chain_id: u64) -> Option<String> {
    let coin_type = match chain_id {
        // mainnet, ronin mainnet, ronin testnet
        1 | 2020 | 2021 => 60,
        // ropsten, rinkeby, goerli
        3..=5 => 1,
        _ => {
            error!(
                target = "deploy_core::hdpath",
                chain_id, "Network with chainId {chain_id} not supported"
            );
            return None;
        }
    };

    Some(format!("m/44'/{coin_type}'/0'/0"))
}
