use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

use crate::H160;

/// Base currencies a fund can be denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    /// Wrapped Tether
    Usdt,
    /// Wrapped Binance USD
    Busd,
}

/// Deployed token contract for each supported base currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CurrencyAddresses {
    /// Wrapped USDT token
    pub usdt: H160,
    /// Wrapped BUSD token
    pub busd: H160,
}

impl CurrencyAddresses {
    /// Token contract for a known currency
    pub fn address_of(&self, currency: Currency) -> H160 {
        match currency {
            Currency::Usdt => self.usdt,
            Currency::Busd => self.busd,
        }
    }

    /// Look up a currency by its ticker symbol.
    ///
    /// Unknown symbols map to the zero address, which no token lives at.
    pub fn get_currency_address(&self, symbol: &str) -> H160 {
        symbol
            .parse::<Currency>()
            .map(|currency| self.address_of(currency))
            .unwrap_or_else(|_| H160::zero())
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    fn addresses() -> CurrencyAddresses {
        CurrencyAddresses {
            usdt: H160::repeat_byte(0x11),
            busd: H160::repeat_byte(0x22),
        }
    }

    #[test]
    fn looks_up_configured_tokens() {
        let addresses = addresses();
        assert_eq!(addresses.get_currency_address("USDT"), H160::repeat_byte(0x11));
        assert_eq!(addresses.get_currency_address("BUSD"), H160::repeat_byte(0x22));
    }

    #[test]
    fn unknown_symbols_map_to_zero() {
        let addresses = addresses();
        for symbol in ["DAI", "", "usdt ", "0"] {
            assert_eq!(addresses.get_currency_address(symbol), H160::zero());
        }
    }

    #[test]
    fn tickers_round_trip_through_display() {
        for currency in Currency::iter() {
            assert_eq!(currency.to_string().parse::<Currency>().unwrap(), currency);
        }
        assert_eq!(Currency::Usdt.to_string(), "USDT");
    }
}
