//! Money type for representing amounts in a currency
//!
//! Conversion between currencies always goes through an implicit base unit
//! (USD). Each supported currency has a fixed factor into the base and the
//! exact inverse factor out of it, so converting a currency to itself is an
//! identity. Unrecognized currency codes convert at par.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A currency code
///
/// The four supported currencies have conversion factors; any other code is
/// carried through as `Other` and treated as equal in value to the base.
/// Currencies compare by code, so an `Other` holding a supported code (e.g.
/// `Other("EUR")`) is the same currency as its named variant and converts
/// with its factor.
#[derive(Debug, Clone, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    /// US dollar, the base unit
    #[default]
    Usd,
    /// Euro
    Eur,
    /// Canadian dollar
    Can,
    /// Pound sterling
    Gbp,
    /// Any code without a conversion factor
    Other(String),
}

impl Currency {
    /// All currencies with a conversion factor
    pub const SUPPORTED: [Currency; 4] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Can,
        Currency::Gbp,
    ];

    /// Look up a currency by its code
    ///
    /// Codes are matched exactly ("EUR", not "eur"); anything else becomes
    /// `Currency::Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            "CAN" => Self::Can,
            "GBP" => Self::Gbp,
            other => Self::Other(other.to_string()),
        }
    }

    /// The currency code
    pub fn code(&self) -> &str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Can => "CAN",
            Self::Gbp => "GBP",
            Self::Other(code) => code,
        }
    }

    /// Returns true if this currency has a conversion factor
    pub fn is_supported(&self) -> bool {
        matches!(self.code(), "USD" | "EUR" | "CAN" | "GBP")
    }

    /// Map an amount in this currency to the base unit
    fn to_base(&self, amount: f64) -> f64 {
        match self {
            Self::Eur => amount * 2.0 / 3.0,
            Self::Can => amount / 5.0 * 4.0,
            Self::Gbp => amount * 2.0,
            Self::Usd => amount,
            Self::Other(code) => match Self::from_code(code) {
                Self::Other(_) => amount,
                named => named.to_base(amount),
            },
        }
    }

    /// Map an amount in the base unit to this currency
    fn from_base(&self, base: f64) -> f64 {
        match self {
            Self::Eur => base * 1.5,
            Self::Can => base * 1.25,
            Self::Gbp => base / 2.0,
            Self::Usd => base,
            Self::Other(code) => match Self::from_code(code) {
                Self::Other(_) => base,
                named => named.from_base(base),
            },
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// An amount of money in a particular currency
///
/// `Money` is a value: every operation returns a new instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    currency: Currency,
}

impl Money {
    /// Create a Money amount in the given currency
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money amount in the base currency
    pub fn usd(amount: f64) -> Self {
        Self::new(amount, Currency::Usd)
    }

    /// Get the amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get the currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Convert into another currency
    ///
    /// The amount is first mapped to the base unit, then from the base unit
    /// into `target`. Unrecognized currencies on either side convert at par.
    pub fn convert(&self, target: &Currency) -> Money {
        for currency in [&self.currency, target] {
            if !currency.is_supported() {
                tracing::debug!(
                    currency = %currency,
                    "no conversion factor, converting at par"
                );
            }
        }

        let base = self.currency.to_base(self.amount);
        Money::new(target.from_base(base), target.clone())
    }

    /// Add another amount
    ///
    /// `self` is converted into `other`'s currency before summing, so the
    /// result is always expressed in the currency of `other`.
    pub fn add(&self, other: &Money) -> Money {
        let converted = self.convert(&other.currency);
        Money::new(converted.amount + other.amount, other.currency.clone())
    }

    /// Parse an amount with an optional currency code
    ///
    /// Accepts "12.50 EUR", "EUR 12.50" or a bare "12.50", in which case
    /// `default` supplies the currency.
    pub fn parse_with_default(s: &str, default: &Currency) -> Result<Self, MoneyParseError> {
        let parts: Vec<&str> = s.split_whitespace().collect();

        let (amount, currency) = match parts.as_slice() {
            [amount] => (*amount, default.clone()),
            [first, second] => {
                if first.parse::<f64>().is_ok() {
                    (*first, Currency::from_code(second))
                } else {
                    (*second, Currency::from_code(first))
                }
            }
            _ => return Err(MoneyParseError::InvalidFormat(s.to_string())),
        };

        let amount: f64 = amount
            .parse()
            .map_err(|_| MoneyParseError::InvalidAmount(amount.to_string()))?;

        if !amount.is_finite() {
            return Err(MoneyParseError::InvalidAmount(amount.to_string()));
        }

        Ok(Self::new(amount, currency))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::usd(0.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    InvalidAmount(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::InvalidAmount(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
