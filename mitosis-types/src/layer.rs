use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Layers of the Emily keymap, numbered bottom to top.
///
/// `Function` sits above both `Number` and `Symbol`; it is only reachable while one of them is held.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Base layer, as compatible with dvorak and qwerty as possible
    Standard = 0,
    /// Numbers on the right hand, mouse keys on the left
    Number = 1,
    /// Symbols, arrows and brackets
    Symbol = 2,
    /// Function keys, navigation and media
    Function = 3,
}

impl Layer {
    pub const COUNT: usize = 4;

    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer as u8
    }
}
