use crate::prelude::*;

use rand::Rng;
use std::time::Duration;

/// Picks the pause between two consecutive transfers.
#[derive(Debug)]
pub struct DelayScheduler<R> {
    rng: R,
    range: DelayRange,
}

impl<R: Rng> DelayScheduler<R> {
    pub fn new(range: DelayRange, rng: R) -> Self {
        Self { rng, range }
    }

    pub fn next_delay(&mut self) -> Duration {
        let secs = self
            .rng
            .random_range(self.range.min_secs()..=self.range.max_secs());
        Duration::from_secs(secs)
    }

    /// Sleeps for a freshly drawn delay and returns it.
    pub async fn pause(&mut self) -> Duration {
        let delay = self.next_delay();
        info!("⏳ Waiting {} seconds...", delay.as_secs());
        tokio::time::sleep(delay).await;
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn delays_stay_in_range() {
        let range = *DelayRange::corrected(2, 9).value();
        let mut scheduler = DelayScheduler::new(range, StdRng::seed_from_u64(3));
        for _ in 0..500 {
            let delay = scheduler.next_delay().as_secs();
            assert!((2..=9).contains(&delay));
        }
    }

    #[test]
    fn inverted_range_uses_default_window() {
        let range = *DelayRange::corrected(10, 5).value();
        let mut scheduler = DelayScheduler::new(range, StdRng::seed_from_u64(3));
        for _ in 0..500 {
            let delay = scheduler.next_delay().as_secs();
            assert!((1..=30).contains(&delay));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn pause_sleeps_for_drawn_delay() {
        let range = *DelayRange::corrected(4, 4).value();
        let mut scheduler = DelayScheduler::new(range, StdRng::seed_from_u64(0));
        let start = tokio::time::Instant::now();
        let delay = scheduler.pause().await;
        assert_eq!(delay, Duration::from_secs(4));
        assert!(start.elapsed() >= Duration::from_secs(4));
    }
}
