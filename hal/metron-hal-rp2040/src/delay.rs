//! Cycle delay via the embassy time driver

use embassy_time::Timer;

/// Delay provider backed by the global time driver
pub struct TimerDelay;

impl metron_core::traits::Delay for TimerDelay {
    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(ms as u64).await;
    }
}
