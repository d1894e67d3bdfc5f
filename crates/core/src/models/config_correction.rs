use crate::prelude::*;

/// An operator supplied value that was replaced instead of rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigCorrection {
    #[display(
        "Delay range [{requested_min}s, {requested_max}s] is inverted, using [{substituted_min}s, {substituted_max}s] instead"
    )]
    DelayRangeInverted {
        requested_min: u64,
        requested_max: u64,
        substituted_min: u64,
        substituted_max: u64,
    },

    #[display(
        "Amount range [{requested_min}, {requested_max}] is inverted, using [{substituted}, {substituted}] instead"
    )]
    AmountRangeInverted {
        requested_min: Decimal,
        requested_max: Decimal,
        substituted: Decimal,
    },
}

/// A value together with the correction applied while building it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Corrected<T> {
    #[getset(get = "pub")]
    value: T,

    #[getset(get = "pub")]
    correction: Option<ConfigCorrection>,
}

impl<T> Corrected<T> {
    pub fn unchanged(value: T) -> Self {
        Self {
            value,
            correction: None,
        }
    }

    pub fn replaced(value: T, correction: ConfigCorrection) -> Self {
        Self {
            value,
            correction: Some(correction),
        }
    }
}
