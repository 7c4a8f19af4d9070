use crate::event::KeyEvent;
use crate::types::action::KeyAction;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// The layer table itself is immutable and usually lives in flash as a `static`. `KeyMap` only owns
/// the runtime layer state on top of it: which layers are active, which layer is the default one, and
/// which layer each currently pressed key was resolved on.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number, max: 32
    default_layer: u8,
    /// Layer cache
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        const { assert!(NUM_LAYER > 0 && NUM_LAYER <= 32, "keymap supports 1 to 32 layers") };
        KeyMap {
            layers: action_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.default_layer = layer_num;
    }

    /// Fetch the action at the given position of a layer, without layer resolution.
    ///
    /// Panics if the position is out of the keymap's bounds.
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers[layer_num][row][col]
    }

    /// Fetch the action in keymap, with layer cache
    pub(crate) fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        let (layer, action) = self.resolve(row, col);
        if let Some(layer) = layer {
            // Found a valid action in the layer, cache it
            self.save_layer_cache(row, col, layer);
        }
        action
    }

    /// Resolve the action at a position through the current layer stack.
    ///
    /// Iterates from higher layer to lower layer, skipping transparent cells. The lowest checked layer
    /// is the default layer. Returns the layer the action was found on.
    pub fn resolve(&self, row: usize, col: usize) -> (Option<u8>, KeyAction) {
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            let is_default = layer_idx as u8 == self.default_layer;
            if self.layer_state[layer_idx] || is_default {
                // This layer is activated
                let action = layer[row][col];
                if action != KeyAction::Transparent {
                    return (Some(layer_idx as u8), action);
                }
            }

            if is_default {
                break;
            }
        }

        (None, KeyAction::No)
    }

    /// The topmost active layer. The default layer counts as active.
    pub fn get_activated_layer(&self) -> u8 {
        for (layer_idx, _) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    /// Bitmask of the layers activated on top of the default layer, bit `n` is layer `n`
    pub fn layer_state_bits(&self) -> u32 {
        self.layer_state
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .fold(0, |bits, (layer_idx, _)| bits | (1 << layer_idx))
    }

    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        self.layer_state
            .get(layer_num as usize)
            .is_some_and(|active| *active || layer_num == self.default_layer)
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    /// Activate given layer
    pub(crate) fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state[layer_num as usize] = true;
    }

    /// Deactivate given layer
    pub(crate) fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state[layer_num as usize] = false;
    }
}
