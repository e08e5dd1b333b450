use serde::Serializer;

use crate::U256;

/// Number of decimals every amount crossing the contract boundary carries.
pub const WEI_DECIMALS: usize = 18;

/// An error converting a human-entered decimal amount into wei.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountError {
    /// Nothing was entered
    #[error("amount is empty")]
    Empty,
    /// Amounts are unsigned
    #[error("amount {0:?} is negative")]
    Negative(String),
    /// Not a decimal number, too many fractional digits or out of range
    #[error("amount {0:?} is not a valid 18-decimal amount")]
    Invalid(String),
}

/// Scale a decimal amount such as `"12.5"` up by 10^18.
pub fn to_wei(amount: &str) -> Result<U256, AmountError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(AmountError::Empty);
    }
    if amount.starts_with('-') {
        return Err(AmountError::Negative(amount.to_owned()));
    }
    let invalid = || AmountError::Invalid(amount.to_owned());
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.len() + fraction.len() == 0
        || fraction.len() > WEI_DECIMALS
        || !is_digits(whole)
        || !is_digits(fraction)
    {
        return Err(invalid());
    }
    ethers_core::utils::parse_ether(amount).map_err(|_| invalid())
}

/// Scale a wei amount down by 10^18 into its shortest decimal rendering.
///
/// Trailing fractional zeros are dropped, so `from_wei(to_wei("1.50")?)` is
/// `"1.5"` and whole amounts render without a decimal point.
pub fn from_wei(amount: U256) -> String {
    let unit = U256::exp10(WEI_DECIMALS);
    let whole = amount / unit;
    // always < 10^18, fits in a u64
    let fraction = (amount % unit).as_u64();
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{fraction:0width$}", width = WEI_DECIMALS);
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

pub(crate) fn serialize_opt_wei<S>(amount: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match amount {
        Some(amount) => serializer.serialize_some(&from_wei(*amount)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scales_by_eighteen_decimals() {
        assert_eq!(to_wei("1").unwrap(), U256::exp10(18));
        assert_eq!(to_wei("0.1").unwrap(), U256::exp10(17));
        assert_eq!(to_wei("250").unwrap(), U256::from(250u64) * U256::exp10(18));
        assert_eq!(from_wei(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(from_wei(U256::zero()), "0");
    }

    #[test]
    fn from_wei_undoes_to_wei() {
        for amount in ["0", "1", "0.5", "12.25", "1000000", "0.000000000000000001", "3.14159"] {
            assert_eq!(from_wei(to_wei(amount).unwrap()), amount);
        }
        // normalised forms
        assert_eq!(from_wei(to_wei("1.50").unwrap()), "1.5");
        assert_eq!(from_wei(to_wei(" 7 ").unwrap()), "7");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(to_wei(""), Err(AmountError::Empty));
        assert_eq!(to_wei("  "), Err(AmountError::Empty));
        assert_eq!(to_wei("-1"), Err(AmountError::Negative("-1".into())));
        assert!(matches!(to_wei("ten"), Err(AmountError::Invalid(_))));
        assert!(matches!(
            to_wei("0.0000000000000000001"),
            Err(AmountError::Invalid(_))
        ));
    }
}
