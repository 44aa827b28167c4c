//! Clock backed by browser timers.

use std::time::Duration;

use chrono::NaiveTime;
use gloo_timers::future::TimeoutFuture;
use orbitx::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }

    fn time_of_day(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}
