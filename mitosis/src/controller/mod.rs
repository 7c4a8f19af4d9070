//! Controllers drive output devices on the board from keyboard state.
//!
//! A controller that needs to follow the scan loop implements [`PollingController`]: `update()` is
//! called once per `interval()`. It must return quickly, since it runs on the input polling path.

pub mod layer_indicator;

use embassy_time::{Duration, Timer};

/// The trait for polling controllers.
pub trait PollingController {
    /// Returns the interval between `update` calls.
    fn interval(&self) -> Duration;

    /// Update periodically, will be called according to [`Self::interval()`]
    async fn update(&mut self);

    /// Polling loop that calls `update()` at the specified interval, never returns
    async fn polling_loop(&mut self) {
        loop {
            self.update().await;
            Timer::after(self.interval()).await;
        }
    }
}
