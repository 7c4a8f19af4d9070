//! # Mitosis
//!
//! The Emily keymap for the Mitosis split keyboard, with the pieces needed to run it on top of a
//! matrix scanner:
//!
//! - [`layout`] - the four-layer table: standard, number, symbol and function
//! - [`keymap`] - layer stack and transparent fall-through resolution
//! - [`keyboard`] - momentary layer handling, turns key events into key outputs
//! - [`controller::layer_indicator`] - RGB status LED following the active layer
//!
//! Matrix scanning, debouncing and HID reporting are left to the host firmware, which talks to this
//! crate through [`channel::KEY_EVENT_CHANNEL`] and [`channel::KEY_OUTPUT_CHANNEL`].

#![no_std]
#![allow(async_fn_in_trait)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("The `defmt` and `log` features are mutually exclusive");

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod channel;
pub mod config;
pub mod controller;
mod driver;
pub mod event;
pub mod keyboard;
pub mod keymap;
pub mod layout;
pub mod layout_macro;

use core::cell::RefCell;

use embassy_futures::join::join;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embedded_hal::digital::OutputPin;
pub use mitosis_types as types;

use crate::config::KeyboardConfig;
use crate::controller::PollingController;
use crate::controller::layer_indicator::LayerIndicatorController;
use crate::keyboard::Keyboard;
use crate::keymap::KeyMap;

pub type RawMutex = CriticalSectionRawMutex;

/// A long running task
pub trait Runnable {
    async fn run(&mut self);
}

/// Run the keyboard: resolve key events from `KEY_EVENT_CHANNEL` and, when an indicator is
/// configured, refresh the status LED every `scan_interval`. Never returns.
pub async fn run_mitosis<'a, P: OutputPin, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,
    config: KeyboardConfig<P>,
) {
    info!(
        "Starting keyboard, {} layers, mouse keys: {:?}",
        NUM_LAYER, config.mouse_key_config
    );
    let mut keyboard = Keyboard::new(keymap);
    match config.indicator_config {
        Some(indicator_config) => {
            let mut indicator = LayerIndicatorController::from_config(keymap, indicator_config, config.scan_interval);
            join(keyboard.run(), indicator.polling_loop()).await;
        }
        None => keyboard.run().await,
    }
}
