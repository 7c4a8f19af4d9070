//! Keyboard actions.
//!
//! - [`Action`] - Single operations that the keyboard sends or executes
//! - [`KeyAction`] - What a key position in the keymap does

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            KeyAction::Transparent => Action::Transparent,
            KeyAction::No => Action::No,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }

    /// Returns the layer this action holds while pressed, if any
    pub fn momentary_layer(&self) -> Option<u8> {
        match self {
            KeyAction::Single(Action::LayerOn(layer)) => Some(*layer),
            _ => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum, including mouse key, consumer control, etc.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held
    LayerOn(u8),
}

impl Action {
    /// The keycode this action emits, if it emits one
    pub fn keycode(&self) -> Option<KeyCode> {
        match self {
            Action::Key(k) | Action::KeyWithModifier(k, _) => Some(*k),
            _ => None,
        }
    }
}
