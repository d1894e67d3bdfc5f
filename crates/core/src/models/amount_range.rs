use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAmountRange {
    #[error("Amount bounds must not be negative, got [{min}, {max}]")]
    Negative { min: Decimal, max: Decimal },
}

/// Inclusive range every planned amount is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, CopyGetters)]
pub struct AmountRange {
    #[getset(get_copy = "pub")]
    min: Decimal,

    #[getset(get_copy = "pub")]
    max: Decimal,
}

impl AmountRange {
    /// Builds the range. Inverted bounds collapse onto the smaller of the two
    /// values, so a run never sends more than the operator typed.
    pub fn corrected(min: Decimal, max: Decimal) -> Result<Corrected<Self>, InvalidAmountRange> {
        if min.is_sign_negative() && !min.is_zero() || max.is_sign_negative() && !max.is_zero() {
            return Err(InvalidAmountRange::Negative { min, max });
        }
        if min <= max {
            return Ok(Corrected::unchanged(Self { min, max }));
        }
        Ok(Corrected::replaced(
            Self { min: max, max },
            ConfigCorrection::AmountRangeInverted {
                requested_min: min,
                requested_max: max,
                substituted: max,
            },
        ))
    }
}

impl std::fmt::Display for AmountRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.min.normalize(), self.max.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn ordered_bounds_are_kept() {
        let corrected = AmountRange::corrected(dec("0.003"), dec("1")).unwrap();
        assert!(corrected.correction().is_none());
        assert_eq!(corrected.value().min(), dec("0.003"));
        assert_eq!(corrected.value().max(), dec("1"));
    }

    #[test]
    fn inverted_bounds_collapse_to_smaller_value() {
        let corrected = AmountRange::corrected(dec("2"), dec("0.5")).unwrap();
        assert_eq!(corrected.value().min(), dec("0.5"));
        assert_eq!(corrected.value().max(), dec("0.5"));
        assert!(matches!(
            corrected.correction(),
            Some(ConfigCorrection::AmountRangeInverted { .. })
        ));
    }

    #[test]
    fn negative_bounds_are_rejected() {
        assert!(AmountRange::corrected(dec("-1"), dec("1")).is_err());
        assert!(AmountRange::corrected(dec("0"), dec("-0.1")).is_err());
    }
}
