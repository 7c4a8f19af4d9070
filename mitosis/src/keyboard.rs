use core::cell::RefCell;

use crate::channel::{KEY_EVENT_CHANNEL, KEY_OUTPUT_CHANNEL};
use crate::event::{KeyEvent, KeyOutput};
use crate::keymap::KeyMap;
use crate::types::action::{Action, KeyAction};
use crate::Runnable;

/// Resolves key events against the layer stack.
///
/// Momentary layer keys are consumed here, everything that emits a key is forwarded as a [`KeyOutput`].
pub struct Keyboard<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Keymap
    pub(crate) keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> Runnable for Keyboard<'_, ROW, COL, NUM_LAYER> {
    /// Main keyboard processing task, it receives key events from the matrix, resolves them
    /// and sends the resolved actions to `KEY_OUTPUT_CHANNEL`.
    async fn run(&mut self) {
        loop {
            let key_event = KEY_EVENT_CHANNEL.receive().await;
            if let Some(output) = self.process_key_event(key_event) {
                KEY_OUTPUT_CHANNEL.send(output).await;
            }
        }
    }
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    pub fn new(keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>) -> Self {
        Self { keymap }
    }

    /// Process a single key event, returns the action to emit, if any.
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Option<KeyOutput> {
        if key_event.row as usize >= ROW || key_event.col as usize >= COL {
            warn!(
                "Key event out of matrix: ({}, {}), matrix is {}x{}",
                key_event.row, key_event.col, ROW, COL
            );
            return None;
        }

        let key_action = self.keymap.borrow_mut().get_action_with_layer_cache(key_event);
        debug!("Process key action: {:?}, {:?}", key_action, key_event);
        match key_action {
            KeyAction::No | KeyAction::Transparent => None,
            KeyAction::Single(action) => self.process_key_action_normal(action, key_event),
        }
    }

    fn process_key_action_normal(&mut self, action: Action, key_event: KeyEvent) -> Option<KeyOutput> {
        match action {
            Action::Key(_) | Action::KeyWithModifier(_, _) => Some(KeyOutput {
                action,
                pressed: key_event.pressed,
            }),
            Action::LayerOn(layer_num) => {
                self.process_action_layer_switch(layer_num, key_event);
                None
            }
            Action::No | Action::Transparent => None,
        }
    }

    /// Process layer switch action.
    fn process_action_layer_switch(&mut self, layer_num: u8, key_event: KeyEvent) {
        let mut keymap = self.keymap.borrow_mut();
        // Change layer state only when the key's state is changed
        if key_event.pressed {
            keymap.activate_layer(layer_num);
        } else {
            keymap.deactivate_layer(layer_num);
        }
        debug!(
            "Layer {} {}, active layer: {}",
            layer_num,
            if key_event.pressed { "on" } else { "off" },
            keymap.get_activated_layer()
        );
    }
}
