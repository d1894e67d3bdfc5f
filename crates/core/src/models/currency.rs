use crate::prelude::*;

/// Integer amount in the smallest unit of a currency (wei for native transfers).
pub type BaseUnits = u128;

/// Amounts are never planned with more fractional digits than this, whatever
/// the currency precision is.
pub const MAX_AMOUNT_PRECISION: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CurrencyKind {
    #[display("native")]
    Native,
    #[display("token {_0}")]
    Token(Address),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountConversionError {
    #[error("Amount {amount} is negative")]
    Negative { amount: Decimal },

    #[error("Amount {amount} has more fractional digits than the currency supports ({decimals})")]
    PrecisionExceeded { amount: Decimal, decimals: u8 },

    #[error("Amount {amount} does not fit in base units")]
    Overflow { amount: Decimal },
}

/// What is being disbursed during a run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct Currency {
    #[getset(get = "pub")]
    kind: CurrencyKind,

    #[getset(get = "pub")]
    #[builder(into)]
    symbol: String,

    #[getset(get = "pub")]
    decimals: u8,
}

impl Currency {
    /// Number of fractional digits planned amounts are drawn with.
    pub fn amount_precision(&self) -> u32 {
        u32::from(self.decimals).min(MAX_AMOUNT_PRECISION)
    }

    pub fn to_base_units(&self, amount: Decimal) -> Result<BaseUnits, AmountConversionError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(AmountConversionError::Negative { amount });
        }
        let normalized = amount.normalize();
        let scale = normalized.scale();
        let decimals = u32::from(self.decimals);
        if scale > decimals {
            return Err(AmountConversionError::PrecisionExceeded {
                amount,
                decimals: self.decimals,
            });
        }
        let mantissa: BaseUnits = normalized.mantissa().unsigned_abs();
        10u128
            .checked_pow(decimals - scale)
            .and_then(|factor| mantissa.checked_mul(factor))
            .ok_or(AmountConversionError::Overflow { amount })
    }

    /// Human readable amount, e.g. `1500000000000000000` wei as `1.5`.
    pub fn format_base_units(&self, units: BaseUnits) -> String {
        let decimals = usize::from(self.decimals);
        if decimals == 0 {
            return units.to_string();
        }
        let digits = format!("{units:0>width$}", width = decimals + 1);
        let (integer, fraction) = digits.split_at(digits.len() - decimals);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            integer.to_owned()
        } else {
            format!("{integer}.{fraction}")
        }
    }

    /// `units` followed by the currency symbol.
    pub fn display_base_units(&self, units: BaseUnits) -> String {
        format!("{} {}", self.format_base_units(units), self.symbol)
    }
}
