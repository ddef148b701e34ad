//! Currency formatting for display prices.
//!
//! Catalog prices arrive as plain numbers in base currency units. Discounted
//! prices are whole units, base prices may carry a fractional part.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Whether the symbol is written after the amount.
    pub fn symbol_after(&self) -> bool {
        matches!(self, Currency::RUB | Currency::EUR)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }

    /// Format an amount with this currency's symbol.
    ///
    /// Whole amounts are printed without decimals.
    pub fn format(&self, amount: f64) -> String {
        let number = format_amount(amount);
        if self.symbol_after() {
            format!("{} {}", number, self.symbol())
        } else {
            format!("{}{}", self.symbol(), number)
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Format a bare amount: "80" for whole values, "9.99" otherwise.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}
