//! The controller that shows the active layer on the RGB status LED.
use core::cell::RefCell;

use embassy_time::Duration;
use embedded_hal::digital::OutputPin;

use crate::config::LayerIndicatorConfig;
use crate::controller::PollingController;
use crate::driver::gpio::OutputController;
use crate::keymap::KeyMap;
use crate::types::indicator::IndicatorState;

pub struct LayerIndicatorController<'a, P: OutputPin, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,
    red: OutputController<P>,
    green: OutputController<P>,
    blue: OutputController<P>,
    interval: Duration,
    /// What the LED currently shows, `None` before the first scan
    state: Option<IndicatorState>,
}

impl<'a, P: OutputPin, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    LayerIndicatorController<'a, P, ROW, COL, NUM_LAYER>
{
    pub fn new(
        keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,
        red: P,
        green: P,
        blue: P,
        low_active: bool,
        interval: Duration,
    ) -> Self {
        Self {
            keymap,
            red: OutputController::new(red, low_active),
            green: OutputController::new(green, low_active),
            blue: OutputController::new(blue, low_active),
            interval,
            state: None,
        }
    }

    pub fn from_config(
        keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,
        config: LayerIndicatorConfig<P>,
        interval: Duration,
    ) -> Self {
        Self::new(
            keymap,
            config.red,
            config.green,
            config.blue,
            config.low_active,
            interval,
        )
    }

    /// Scan hook: read the topmost active layer and update the LED.
    pub fn on_scan(&mut self) {
        let layer = self.keymap.borrow().get_activated_layer();
        self.show_layer(layer);
    }

    /// Show the indicator of `layer`. Pins are only written when the indicator changes.
    pub fn show_layer(&mut self, layer: u8) {
        let state = IndicatorState::from_layer(layer);
        if self.state == Some(state) {
            return;
        }

        debug!("Layer {} indicator: {:?}", layer, state);
        let (red, green, blue) = state.channels();
        self.red.set_active(red);
        self.green.set_active(green);
        self.blue.set_active(blue);
        self.state = Some(state);
    }

    pub fn state(&self) -> Option<IndicatorState> {
        self.state
    }
}

impl<P: OutputPin, const ROW: usize, const COL: usize, const NUM_LAYER: usize> PollingController
    for LayerIndicatorController<'_, P, ROW, COL, NUM_LAYER>
{
    fn interval(&self) -> Duration {
        self.interval
    }

    async fn update(&mut self) {
        self.on_scan();
    }
}
