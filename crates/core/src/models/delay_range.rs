use crate::prelude::*;

/// Window used when the operator supplies `min > max`.
pub const DEFAULT_DELAY_RANGE_SECS: (u64, u64) = (1, 30);

/// Inclusive range of whole seconds to pause between two transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, CopyGetters)]
pub struct DelayRange {
    #[getset(get_copy = "pub")]
    min_secs: u64,

    #[getset(get_copy = "pub")]
    max_secs: u64,
}

impl Default for DelayRange {
    fn default() -> Self {
        let (min_secs, max_secs) = DEFAULT_DELAY_RANGE_SECS;
        Self { min_secs, max_secs }
    }
}

impl DelayRange {
    /// Builds the range, substituting [`DEFAULT_DELAY_RANGE_SECS`] when the
    /// bounds are inverted.
    pub fn corrected(min_secs: u64, max_secs: u64) -> Corrected<Self> {
        if min_secs <= max_secs {
            return Corrected::unchanged(Self { min_secs, max_secs });
        }
        let substituted = Self::default();
        Corrected::replaced(
            substituted,
            ConfigCorrection::DelayRangeInverted {
                requested_min: min_secs,
                requested_max: max_secs,
                substituted_min: substituted.min_secs,
                substituted_max: substituted.max_secs,
            },
        )
    }
}

impl std::fmt::Display for DelayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s ~ {}s", self.min_secs, self.max_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range_is_kept() {
        let corrected = DelayRange::corrected(3, 7);
        assert_eq!(corrected.correction(), &None);
        assert_eq!(corrected.value().min_secs(), 3);
        assert_eq!(corrected.value().max_secs(), 7);
    }

    #[test]
    fn equal_bounds_are_valid() {
        assert!(DelayRange::corrected(0, 0).correction().is_none());
    }

    #[test]
    fn inverted_range_falls_back_to_default() {
        let corrected = DelayRange::corrected(10, 5);
        assert_eq!(*corrected.value(), DelayRange::default());
        assert_eq!(corrected.value().min_secs(), 1);
        assert_eq!(corrected.value().max_secs(), 30);
        assert_eq!(
            corrected.correction(),
            &Some(ConfigCorrection::DelayRangeInverted {
                requested_min: 10,
                requested_max: 5,
                substituted_min: 1,
                substituted_max: 30,
            })
        );
    }
}
