//! The Emily layout for the Mitosis.
//!
//! Dvorak-friendly: space on the left thumb, shift on the right thumb, a number layer with all
//! the numbers on the home row, and a function layer that provides mouse-free navigation and media.
//! The function layer is reached by holding the number and symbol thumb keys together.

use crate::types::action::KeyAction;
use crate::types::layer::Layer;
use crate::{a, k, layer, lgui, mo, shifted};

pub const ROW: usize = 5;
pub const COL: usize = 10;
pub const NUM_LAYER: usize = Layer::COUNT;

pub const STD: u8 = Layer::Standard.index();
pub const NUM: u8 = Layer::Number.index();
pub const SYM: u8 = Layer::Symbol.index();
pub const FUN: u8 = Layer::Function.index();

/// The layer table, baked into flash
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = get_default_keymap();

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Standard, as compatible with dvorak and qwerty as possible
        layer!([
            [k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P)],
            [k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon)],
            [k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash)],
            [a!(No), k!(LAlt), k!(LCtrl), mo!(NUM), k!(LShift), k!(RShift), mo!(NUM), k!(RCtrl), k!(RAlt), a!(No)],
            [a!(No), k!(Tab), k!(LGui), mo!(SYM), k!(Backspace), k!(Space), mo!(SYM), k!(RGui), k!(Tab), a!(No)]
        ]),
        // Number, mouse keys on the left hand
        layer!([
            [a!(Transparent), k!(MouseWheelUp), a!(Transparent), lgui!(LeftBracket), lgui!(RightBracket), k!(KpSlash), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0)],
            [a!(Transparent), k!(MouseWheelDown), k!(MouseUp), lgui!(Left), lgui!(Right), k!(KpAsterisk), k!(Kc4), k!(Kc5), k!(Kc6), k!(KpPlus)],
            [k!(MouseBtn2), k!(MouseLeft), k!(MouseDown), k!(MouseRight), k!(MouseBtn1), k!(Minus), k!(Kc1), k!(Kc2), k!(Kc3), k!(Equal)],
            [a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)],
            [a!(No), a!(Transparent), a!(Transparent), mo!(FUN), lgui!(Enter), k!(KpEnter), mo!(FUN), a!(Transparent), a!(Transparent), a!(No)]
        ]),
        // Symbol
        layer!([
            [k!(Escape), a!(Transparent), k!(Up), a!(Transparent), k!(Grave), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5)],
            [k!(Tab), k!(Left), k!(Down), k!(Right), k!(Quote), shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Backslash), shifted!(Minus)],
            [k!(Backslash), shifted!(Kc9), shifted!(LeftBracket), k!(LeftBracket), shifted!(Comma), shifted!(Dot), k!(RightBracket), shifted!(RightBracket), shifted!(Kc0), k!(Slash)],
            [a!(No), a!(Transparent), a!(Transparent), mo!(FUN), a!(Transparent), a!(Transparent), mo!(FUN), a!(Transparent), a!(Transparent), a!(No)],
            [a!(No), a!(Transparent), a!(Transparent), a!(Transparent), k!(Delete), k!(Enter), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)]
        ]),
        // Function, navigation and media
        layer!([
            [a!(Transparent), a!(Transparent), k!(PageUp), a!(Transparent), k!(AudioVolUp), k!(F13), k!(F7), k!(F8), k!(F9), k!(F10)],
            [a!(Transparent), k!(Home), k!(PageDown), k!(End), k!(AudioVolDown), k!(F14), k!(F4), k!(F5), k!(F6), k!(F11)],
            [a!(Transparent), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), k!(AudioMute), k!(F15), k!(F1), k!(F2), k!(F3), k!(F12)],
            [a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)],
            [a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)]
        ]),
    ]
}
