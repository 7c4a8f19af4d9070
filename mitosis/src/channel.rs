//! Exposed channels which connect the keymap engine to the host firmware

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};

use crate::event::{KeyEvent, KeyOutput};
use crate::RawMutex;

pub const EVENT_CHANNEL_SIZE: usize = 16;
pub const OUTPUT_CHANNEL_SIZE: usize = 16;

/// Channel for debounced key events coming from the matrix
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for resolved key actions going to the report layer
pub static KEY_OUTPUT_CHANNEL: Channel<RawMutex, KeyOutput, OUTPUT_CHANNEL_SIZE> = Channel::new();
