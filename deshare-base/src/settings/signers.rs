use ethers::prelude::LocalWallet;
use eyre::{Context, Result};
use serde::Deserialize;

use deshare_core::H256;

/// Where transactions get signed
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignerConf {
    /// A local hex key
    HexKey {
        /// Private key value
        key: H256,
    },
    /// Accounts unlocked on the node, prompting like a browser wallet would
    Node,
}

impl SignerConf {
    /// Build a local signer, or `None` when the node signs
    pub fn build(&self) -> Result<Option<LocalWallet>> {
        match self {
            SignerConf::HexKey { key } => LocalWallet::from_bytes(key.as_bytes())
                .map(Some)
                .context("invalid hex signing key"),
            SignerConf::Node => Ok(None),
        }
    }
}

#[cfg(test)]
mod test {
    use ethers::prelude::Signer;

    use super::*;

    #[test]
    fn builds_a_local_wallet_from_a_hex_key() {
        let conf: SignerConf = serde_json::from_str(
            r#"{"type":"hex_key","key":"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"}"#,
        )
        .unwrap();
        let wallet = conf.build().unwrap().unwrap();
        assert_eq!(
            format!("{:?}", wallet.address()),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn node_signing_builds_nothing() {
        let conf: SignerConf = serde_json::from_str(r#"{"type":"node"}"#).unwrap();
        assert!(conf.build().unwrap().is_none());
    }

    #[test]
    fn zero_key_is_rejected() {
        let conf = SignerConf::HexKey { key: H256::zero() };
        assert!(conf.build().is_err());
    }
}
