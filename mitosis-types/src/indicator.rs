use serde::{Deserialize, Serialize};

use crate::layer::Layer;

/// State of the RGB status LED
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorState {
    #[default]
    Off,
    Red,
    Green,
    Blue,
}

/// Indicator for each layer, indexed by layer number
const LAYER_INDICATORS: [IndicatorState; Layer::COUNT] = [
    // Standard
    IndicatorState::Off,
    // Number
    IndicatorState::Green,
    // Symbol
    IndicatorState::Red,
    // Function
    IndicatorState::Blue,
];

impl IndicatorState {
    /// Indicator shown while `layer` is the topmost active layer. Unknown layers turn the LED off.
    pub const fn from_layer(layer: u8) -> Self {
        if (layer as usize) < LAYER_INDICATORS.len() {
            LAYER_INDICATORS[layer as usize]
        } else {
            IndicatorState::Off
        }
    }

    /// Which of the (red, green, blue) channels are lit
    pub const fn channels(self) -> (bool, bool, bool) {
        match self {
            IndicatorState::Off => (false, false, false),
            IndicatorState::Red => (true, false, false),
            IndicatorState::Green => (false, true, false),
            IndicatorState::Blue => (false, false, true),
        }
    }
}

impl From<Layer> for IndicatorState {
    fn from(layer: Layer) -> Self {
        IndicatorState::from_layer(layer.index())
    }
}
