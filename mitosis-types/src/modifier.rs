use core::ops::BitOr;

use bitfield_struct::bitfield;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);

impl ModifierCombination {
    pub const LSHIFT: Self = SHIFT;
    pub const LGUI: Self = GUI;

    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// Expand the combination into the modifier keycodes it holds down.
    ///
    /// Returns the keycodes and how many of them are valid.
    pub fn to_modifier_keycodes(self) -> ([KeyCode; 4], usize) {
        let (ctrl, shift, alt, gui) = if self.right() {
            (KeyCode::RCtrl, KeyCode::RShift, KeyCode::RAlt, KeyCode::RGui)
        } else {
            (KeyCode::LCtrl, KeyCode::LShift, KeyCode::LAlt, KeyCode::LGui)
        };
        let mut keycodes = [KeyCode::No; 4];
        let mut n = 0;
        for (held, keycode) in [(self.ctrl(), ctrl), (self.shift(), shift), (self.alt(), alt), (self.gui(), gui)] {
            if held {
                keycodes[n] = keycode;
                n += 1;
            }
        }
        (keycodes, n)
    }

    pub fn is_empty(self) -> bool {
        !(self.ctrl() || self.shift() || self.alt() || self.gui())
    }
}
