use crate::prelude::*;

use rand::Rng;
use rust_decimal::prelude::ToPrimitive;

/// Draws amounts uniformly from an [`AmountRange`] on a grid of
/// `10^-precision`, so every draw is already rounded.
#[derive(Debug)]
pub struct AmountRandomizer<R> {
    rng: R,
    lowest_unit: i128,
    highest_unit: i128,
    precision: u32,
}

impl<R: Rng> AmountRandomizer<R> {
    /// `precision` is capped at [`MAX_AMOUNT_PRECISION`].
    pub fn new(range: &AmountRange, precision: u32, rng: R) -> Result<Self, PlanningError> {
        let precision = precision.min(MAX_AMOUNT_PRECISION);
        let too_large = || PlanningError::RangeTooLarge {
            min: range.min(),
            max: range.max(),
        };
        let units_per_whole = Decimal::from(10u64.pow(precision));
        let lowest = range
            .min()
            .checked_mul(units_per_whole)
            .ok_or_else(too_large)?
            .ceil();
        let highest = range
            .max()
            .checked_mul(units_per_whole)
            .ok_or_else(too_large)?
            .floor();
        if lowest > highest {
            return Err(PlanningError::RangeBelowPrecision {
                min: range.min(),
                max: range.max(),
                precision,
            });
        }

        Ok(Self {
            rng,
            lowest_unit: lowest.to_i128().ok_or_else(too_large)?,
            highest_unit: highest.to_i128().ok_or_else(too_large)?,
            precision,
        })
    }

    pub fn next_amount(&mut self) -> Decimal {
        let units = self.rng.random_range(self.lowest_unit..=self.highest_unit);
        Decimal::from_i128_with_scale(units, self.precision).normalize()
    }
}
