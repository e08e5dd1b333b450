use serde::Serialize;
use strum::{Display, EnumIter};

pub use amount::*;
pub use currency::*;

use crate::{H160, H256, U256};

mod amount;
mod currency;

/// The result of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxOutcome {
    /// The txid
    pub txid: H256,
    /// True if executed, false otherwise (reverted, etc.)
    pub executed: bool,
    /// Amount of gas used on this transaction.
    pub gas_used: U256,
    /// Price paid for the gas
    pub gas_price: U256,
}

impl From<ethers_core::types::TransactionReceipt> for TxOutcome {
    fn from(t: ethers_core::types::TransactionReceipt) -> Self {
        Self {
            txid: t.transaction_hash,
            executed: t.status.map(|s| s.low_u64() == 1).unwrap_or(false),
            gas_used: t.gas_used.unwrap_or_default(),
            gas_price: t.effective_gas_price.unwrap_or_default(),
        }
    }
}

/// A deployed contract: where it lives and the methods it exposes.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct ContractHandle {
    /// Contract address
    pub address: H160,
    /// Method signatures, e.g. `approve(address,uint256)`, sorted by name
    pub interface: Vec<String>,
}

/// User actions that submit a transaction. Each one owns a display control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    /// Approve the platform to spend the seed funding
    PreApprove,
    /// Launch a new fund
    CreateFund,
}

/// Columns of the fund listing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum FundColumn {
    /// Fund name
    Name,
    /// Share token symbol
    Symbol,
    /// Assets under management
    #[strum(serialize = "Portfolio Size")]
    PortfolioSize,
    /// Shares issued
    #[strum(serialize = "Total Supply")]
    TotalSupply,
    /// Fund strategy type
    #[strum(serialize = "Fund Type")]
    FundType,
}

/// A fund as read back from chain. Every field is read independently, so any
/// of them may be missing when its read failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    /// Fund contract address
    pub address: H160,
    /// `name()`
    pub name: Option<String>,
    /// `symbol()`
    pub symbol: Option<String>,
    /// `getPortfolioSize()`, in wei of the base currency
    #[serde(serialize_with = "amount::serialize_opt_wei")]
    pub portfolio_size: Option<U256>,
    /// `totalSupply()`, in wei of fund shares
    #[serde(serialize_with = "amount::serialize_opt_wei")]
    pub total_supply: Option<U256>,
    /// `getFundType()`
    pub fund_type: Option<String>,
}

impl FundRecord {
    /// An empty record for a fund whose fields have not been read yet
    pub fn new(address: H160) -> Self {
        Self {
            address,
            ..Default::default()
        }
    }

    /// The display text for one column, if that field was read.
    pub fn cell(&self, column: FundColumn) -> Option<String> {
        match column {
            FundColumn::Name => self.name.clone(),
            FundColumn::Symbol => self.symbol.clone(),
            FundColumn::PortfolioSize => self.portfolio_size.map(format_portfolio_size),
            FundColumn::TotalSupply => self.total_supply.map(from_wei),
            FundColumn::FundType => self.fund_type.clone(),
        }
    }
}

/// Portfolio size as shown in the fund table, e.g. `1500 USDT`.
pub fn format_portfolio_size(size: U256) -> String {
    format!("{} {}", from_wei(size), Currency::Usdt)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_amount_cells_in_whole_units() {
        let record = FundRecord {
            portfolio_size: Some(U256::exp10(18) * U256::from(1500u64)),
            total_supply: Some(U256::exp10(17) * U256::from(5u64)),
            ..FundRecord::new(H160::repeat_byte(1))
        };
        assert_eq!(record.cell(FundColumn::PortfolioSize).unwrap(), "1500 USDT");
        assert_eq!(record.cell(FundColumn::TotalSupply).unwrap(), "0.5");
        assert_eq!(record.cell(FundColumn::Name), None);
    }

    #[test]
    fn serializes_amounts_as_decimals() {
        let record = FundRecord {
            name: Some("Alpha".into()),
            total_supply: Some(U256::exp10(18) * U256::from(2u64)),
            ..FundRecord::new(H160::zero())
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Alpha");
        assert_eq!(json["totalSupply"], "2");
        assert!(json["portfolioSize"].is_null());
    }

    #[test]
    fn failed_receipts_are_not_executed() {
        let receipt = ethers_core::types::TransactionReceipt {
            transaction_hash: H256::repeat_byte(7),
            status: Some(0u64.into()),
            ..Default::default()
        };
        let outcome = TxOutcome::from(receipt);
        assert!(!outcome.executed);
        assert_eq!(outcome.txid, H256::repeat_byte(7));
    }
}
