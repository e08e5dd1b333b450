use url::Url;

use deshare_core::{H160, H256};

/// Block explorer used for transaction and contract links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    base: String,
}

impl Explorer {
    /// Explorer rooted at `base`, e.g. `https://testnet.bscscan.com`
    pub fn new(base: &Url) -> Self {
        Self {
            base: base.as_str().trim_end_matches('/').to_owned(),
        }
    }

    /// Transaction detail page
    pub fn tx_url(&self, tx_hash: H256) -> String {
        format!("{}/tx/{:?}", self.base, tx_hash)
    }

    /// Contract detail page
    pub fn address_url(&self, address: H160) -> String {
        format!("{}/address/{:?}", self.base, address)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_links_without_double_slashes() {
        let explorer = Explorer::new(&Url::parse("https://testnet.bscscan.com/").unwrap());
        assert_eq!(
            explorer.tx_url(H256::repeat_byte(0x01)),
            format!("https://testnet.bscscan.com/tx/0x{}", "01".repeat(32))
        );
        assert_eq!(
            explorer.address_url(H160::repeat_byte(0xab)),
            format!("https://testnet.bscscan.com/address/0x{}", "ab".repeat(20))
        );
    }
}
