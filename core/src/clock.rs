//! Injectable time source.
//!
//! Every simulated delay in the dashboard goes through [`Clock::sleep`] and
//! every log timestamp through [`Clock::time_of_day`]. The browser build
//! supplies a timer-backed clock, native code uses [`TokioClock`] and tests
//! use [`InstantClock`], which returns immediately and records what was asked.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use chrono::NaiveTime;

/// Source of delays and wall-clock time.
pub trait Clock {
    /// Suspend for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;

    /// Local time of day, used for `HH:MM:SS` log prefixes.
    fn time_of_day(&self) -> NaiveTime;

    /// `time_of_day` rendered the way delivery logs show it.
    fn timestamp(&self) -> String {
        self.time_of_day().format("%H:%M:%S").to_string()
    }
}

impl<C: Clock> Clock for &C {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }

    fn time_of_day(&self) -> NaiveTime {
        (**self).time_of_day()
    }
}

/// Tokio-backed clock for native targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn time_of_day(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// Clock that never waits.
///
/// Requested delays are recorded in order and time stands still at the
/// configured instant.
#[derive(Debug)]
pub struct InstantClock {
    now: NaiveTime,
    sleeps: RefCell<Vec<Duration>>,
}

impl InstantClock {
    /// Clock frozen at `now`.
    pub fn at(now: NaiveTime) -> Self {
        Self {
            now,
            sleeps: RefCell::new(Vec::new()),
        }
    }

    /// Every delay requested so far.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }

    /// Sum of all requested delays.
    pub fn total_slept(&self) -> Duration {
        self.sleeps.borrow().iter().sum()
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::at(NaiveTime::MIN)
    }
}

impl Clock for InstantClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }

    fn time_of_day(&self) -> NaiveTime {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_clock_records_sleeps() {
        let clock = InstantClock::default();
        clock.sleep(Duration::from_millis(800)).await;
        clock.sleep(Duration::from_millis(1200)).await;

        assert_eq!(
            clock.sleeps(),
            vec![Duration::from_millis(800), Duration::from_millis(1200)]
        );
        assert_eq!(clock.total_slept(), Duration::from_millis(2000));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_tokio_clock_waits() {
        let started = std::time::Instant::now();
        TokioClock.sleep(Duration::from_millis(5)).await;
        assert!(started.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_timestamp_format() {
        let clock = InstantClock::at(NaiveTime::from_hms_opt(9, 5, 7).unwrap());
        assert_eq!(clock.timestamp(), "09:05:07");
    }

    #[tokio::test]
    async fn test_reference_forwards() {
        let clock = InstantClock::default();
        let by_ref = &clock;
        by_ref.sleep(Duration::from_millis(5)).await;
        assert_eq!(clock.sleeps().len(), 1);
    }
}
