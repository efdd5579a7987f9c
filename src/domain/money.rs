//! Monetary types and currency normalization into INR.
//!
//! Exchange rates are fixed constants. Every conversion multiplies by a
//! positive rate, so a non-negative amount stays non-negative.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

/// Amount of money represented as a Decimal for precision.
pub type Money = Decimal;

/// INR per unit of USD.
pub const USD_RATE: Decimal = dec!(82.5);
/// INR per unit of EUR.
pub const EUR_RATE: Decimal = dec!(90.0);
/// INR per unit of JPY.
pub const JPY_RATE: Decimal = dec!(0.55);

/// Largest amount accepted as input (10^22).
///
/// A salary this large, converted at the highest rate and annualized, still
/// fits in a `Decimal` with two decimal places.
pub const MAX_AMOUNT: Money = dec!(10000000000000000000000);

/// Whether `amount` is a non-negative value no larger than [`MAX_AMOUNT`].
#[must_use]
pub fn is_accepted_amount(amount: Money) -> bool {
    (!amount.is_sign_negative() || amount.is_zero()) && amount <= MAX_AMOUNT
}

/// Currencies accepted for the monthly salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
    Jpy,
}

impl Currency {
    /// All supported currencies, in prompt order.
    pub const ALL: [Currency; 4] = [Currency::Inr, Currency::Usd, Currency::Eur, Currency::Jpy];

    /// The three-letter code, exactly as the user types it.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
        }
    }

    /// INR received for one unit of this currency.
    #[must_use]
    pub const fn rate(self) -> Decimal {
        match self {
            Currency::Inr => Decimal::ONE,
            Currency::Usd => USD_RATE,
            Currency::Eur => EUR_RATE,
            Currency::Jpy => JPY_RATE,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string is not one of the supported currency codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency code '{0}'")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    /// Case-sensitive: `"usd"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

/// Convert an amount in `currency` into INR.
#[must_use]
pub fn to_inr(amount: Money, currency: Currency) -> Money {
    amount * currency.rate()
}

/// Result of converting an amount given by a raw currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The amount in INR.
    pub amount: Money,
    /// The currency the amount was read as.
    pub currency: Currency,
    /// True when the code was not recognized and INR was assumed.
    pub assumed: bool,
}

/// Convert an amount given by a raw currency code.
///
/// Unrecognized codes are not an error: the amount passes through unchanged
/// as INR and the result is flagged `assumed` so the caller can say so.
#[must_use]
pub fn convert_code(amount: Money, code: &str) -> Conversion {
    match code.parse::<Currency>() {
        Ok(currency) => Conversion {
            amount: to_inr(amount, currency),
            currency,
            assumed: false,
        },
        Err(err) => {
            debug!(code = %code, error = %err, "Assuming salary is in INR");
            Conversion {
                amount,
                currency: Currency::Inr,
                assumed: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_each_supported_currency() {
        assert_eq!(to_inr(dec!(100), Currency::Usd), dec!(8250));
        assert_eq!(to_inr(dec!(100), Currency::Eur), dec!(9000));
        assert_eq!(to_inr(dec!(100), Currency::Jpy), dec!(55));
        assert_eq!(to_inr(dec!(100), Currency::Inr), dec!(100));
    }

    #[test]
    fn unknown_code_falls_back_to_inr() {
        let conversion = convert_code(dec!(100), "XYZ");

        assert_eq!(conversion.amount, dec!(100));
        assert_eq!(conversion.currency, Currency::Inr);
        assert!(conversion.assumed);
    }

    #[test]
    fn known_code_is_not_assumed() {
        let conversion = convert_code(dec!(100), "USD");

        assert_eq!(conversion.amount, dec!(8250));
        assert_eq!(conversion.currency, Currency::Usd);
        assert!(!conversion.assumed);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!("EUR".parse::<Currency>(), Ok(Currency::Eur));
        assert!("eur".parse::<Currency>().is_err());
        assert!(" EUR".parse::<Currency>().is_err());
    }

    #[test]
    fn zero_stays_zero() {
        for currency in Currency::ALL {
            assert_eq!(to_inr(Decimal::ZERO, currency), Decimal::ZERO);
        }
    }

    #[test]
    fn accepted_amount_bounds() {
        assert!(is_accepted_amount(Decimal::ZERO));
        assert!(is_accepted_amount(MAX_AMOUNT));
        assert!(!is_accepted_amount(MAX_AMOUNT + Decimal::ONE));
        assert!(!is_accepted_amount(dec!(-0.01)));
        assert!(!is_accepted_amount(Decimal::MAX));
    }

    #[test]
    fn largest_amount_converts_without_overflow() {
        let inr = to_inr(MAX_AMOUNT, Currency::Eur);

        assert_eq!(inr, dec!(900000000000000000000000));
        assert!(inr.checked_mul(dec!(12)).is_some());
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(Currency::Jpy.to_string(), "JPY");
    }
}
