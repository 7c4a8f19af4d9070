use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::types::action::Action;

/// A key changed state at a matrix position
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(row: u8, col: u8) -> Self {
        Self { row, col, pressed: true }
    }

    pub const fn release(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            pressed: false,
        }
    }
}

/// A resolved key action handed to the host's HID and mouse-key layers.
///
/// Only actions that emit something are forwarded: keys, keys with modifiers, media and mouse keys.
/// Layer switches are consumed by the keymap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyOutput {
    pub action: Action,
    pub pressed: bool,
}
