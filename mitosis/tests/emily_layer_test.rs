pub mod common;

use mitosis::event::{KeyEvent, KeyOutput};
use mitosis::keyboard::Keyboard;
use mitosis::layout::{COL, FUN, KEYMAP, NUM, NUM_LAYER, ROW, STD, SYM, get_default_keymap};
use mitosis::types::action::{Action, KeyAction};
use mitosis::types::keycode::KeyCode;
use mitosis::types::layer::Layer;
use mitosis::types::modifier::SHIFT;

use crate::common::create_emily_keymap;

// Thumb keys holding the number and symbol layers
const NUM_KEY: (u8, u8) = (3, 3);
const SYM_KEY: (u8, u8) = (4, 3);

fn press(row: u8, col: u8) -> KeyEvent {
    KeyEvent::press(row, col)
}

fn release(row: u8, col: u8) -> KeyEvent {
    KeyEvent::release(row, col)
}

fn key(keycode: KeyCode, pressed: bool) -> Option<KeyOutput> {
    Some(KeyOutput {
        action: Action::Key(keycode),
        pressed,
    })
}

#[test]
fn test_every_cell_is_defined() {
    let keymap = create_emily_keymap();
    assert_eq!(keymap.borrow().get_keymap_config(), (ROW, COL, NUM_LAYER));
    for layer in 0..NUM_LAYER {
        for row in 0..ROW {
            for col in 0..COL {
                // Every position holds one of the known action kinds
                match keymap.borrow().get_action_at(row, col, layer) {
                    KeyAction::No | KeyAction::Transparent => {}
                    KeyAction::Single(Action::Key(_) | Action::KeyWithModifier(_, _)) => {}
                    KeyAction::Single(Action::LayerOn(l)) => assert!((l as usize) < NUM_LAYER),
                    other => panic!("Unexpected action {:?} at ({}, {}, {})", other, layer, row, col),
                }
            }
        }
    }
}

#[test]
fn test_standard_layer_resolves_without_fallthrough() {
    let keymap = create_emily_keymap();
    for row in 0..ROW {
        for col in 0..COL {
            let (layer, action) = keymap.borrow().resolve(row, col);
            assert_eq!(action, KEYMAP[STD as usize][row][col]);
            assert_eq!(layer, Some(STD));
        }
    }
}

#[test]
fn test_number_layer() {
    let keymap = create_emily_keymap();
    let mut keyboard = Keyboard::new(keymap);

    assert_eq!(keyboard.process_key_event(press(0, 6)), key(KeyCode::U, true));
    assert_eq!(keyboard.process_key_event(release(0, 6)), key(KeyCode::U, false));

    assert_eq!(keyboard.process_key_event(press(NUM_KEY.0, NUM_KEY.1)), None);
    assert_eq!(keymap.borrow().get_activated_layer(), NUM);
    assert_eq!(keyboard.process_key_event(press(0, 6)), key(KeyCode::Kc7, true));
    assert_eq!(keyboard.process_key_event(release(0, 6)), key(KeyCode::Kc7, false));
    // Transparent cells fall through to the standard layer
    assert_eq!(keyboard.process_key_event(press(0, 0)), key(KeyCode::Q, true));
    assert_eq!(keyboard.process_key_event(release(0, 0)), key(KeyCode::Q, false));
    assert_eq!(keyboard.process_key_event(press(2, 4)), key(KeyCode::MouseBtn1, true));
    assert_eq!(keyboard.process_key_event(release(2, 4)), key(KeyCode::MouseBtn1, false));

    assert_eq!(keyboard.process_key_event(release(NUM_KEY.0, NUM_KEY.1)), None);
    assert_eq!(keymap.borrow().get_activated_layer(), STD);
}

#[test]
fn test_symbol_layer_shifted_keys() {
    let keymap = create_emily_keymap();
    let mut keyboard = Keyboard::new(keymap);

    keyboard.process_key_event(press(SYM_KEY.0, SYM_KEY.1));
    assert_eq!(keymap.borrow().get_activated_layer(), SYM);
    assert_eq!(
        keyboard.process_key_event(press(1, 9)),
        Some(KeyOutput {
            action: Action::KeyWithModifier(KeyCode::Minus, SHIFT),
            pressed: true
        })
    );
    keyboard.process_key_event(release(SYM_KEY.0, SYM_KEY.1));

    // Release is resolved on the symbol layer, where the key was pressed
    assert_eq!(
        keyboard.process_key_event(release(1, 9)),
        Some(KeyOutput {
            action: Action::KeyWithModifier(KeyCode::Minus, SHIFT),
            pressed: false
        })
    );
}

#[test]
fn test_function_layer_from_number() {
    let keymap = create_emily_keymap();
    let mut keyboard = Keyboard::new(keymap);

    keyboard.process_key_event(press(NUM_KEY.0, NUM_KEY.1));
    keyboard.process_key_event(press(SYM_KEY.0, SYM_KEY.1));
    assert_eq!(keymap.borrow().get_activated_layer(), FUN);
    assert_eq!(keymap.borrow().layer_state_bits(), (1 << NUM) | (1 << FUN));
    assert_eq!(keyboard.process_key_event(press(0, 2)), key(KeyCode::PageUp, true));
    assert_eq!(keyboard.process_key_event(release(0, 2)), key(KeyCode::PageUp, false));

    // Releasing the number key first keeps the function layer until its own key goes up
    keyboard.process_key_event(release(NUM_KEY.0, NUM_KEY.1));
    assert_eq!(keymap.borrow().get_activated_layer(), FUN);
    keyboard.process_key_event(release(SYM_KEY.0, SYM_KEY.1));
    assert_eq!(keymap.borrow().get_activated_layer(), STD);
    assert_eq!(keymap.borrow().layer_state_bits(), 0);
}

#[test]
fn test_function_layer_from_symbol() {
    let keymap = create_emily_keymap();
    let mut keyboard = Keyboard::new(keymap);

    keyboard.process_key_event(press(SYM_KEY.0, SYM_KEY.1));
    keyboard.process_key_event(press(NUM_KEY.0, NUM_KEY.1));
    assert_eq!(keymap.borrow().get_activated_layer(), FUN);
    assert_eq!(keyboard.process_key_event(press(2, 9)), key(KeyCode::F12, true));
    assert_eq!(keyboard.process_key_event(release(2, 9)), key(KeyCode::F12, false));
    // Transparent on function, falls to the symbol layer
    assert_eq!(keyboard.process_key_event(press(4, 4)), key(KeyCode::Delete, true));
    assert_eq!(keyboard.process_key_event(release(4, 4)), key(KeyCode::Delete, false));

    keyboard.process_key_event(release(SYM_KEY.0, SYM_KEY.1));
    keyboard.process_key_event(release(NUM_KEY.0, NUM_KEY.1));
    assert_eq!(keymap.borrow().get_activated_layer(), STD);
}

#[test]
fn test_function_layer_leaves_standard_layer_untouched() {
    let keymap = create_emily_keymap();
    let mut keyboard = Keyboard::new(keymap);

    keyboard.process_key_event(press(NUM_KEY.0, NUM_KEY.1));
    keyboard.process_key_event(press(SYM_KEY.0, SYM_KEY.1));
    assert!(keymap.borrow().is_layer_active(Layer::Function.index()));

    let standard = get_default_keymap()[STD as usize];
    for row in 0..ROW {
        for col in 0..COL {
            assert_eq!(keymap.borrow().get_action_at(row, col, STD as usize), standard[row][col]);
        }
    }

    keyboard.process_key_event(release(SYM_KEY.0, SYM_KEY.1));
    keyboard.process_key_event(release(NUM_KEY.0, NUM_KEY.1));
    assert_eq!(keyboard.process_key_event(press(0, 2)), key(KeyCode::E, true));
}

#[test]
fn test_function_layer_not_reachable_from_standard() {
    let keymap = create_emily_keymap();
    let mut keyboard = Keyboard::new(keymap);

    for row in 0..ROW as u8 {
        for col in 0..COL as u8 {
            keyboard.process_key_event(press(row, col));
            assert!(!keymap.borrow().is_layer_active(FUN));
            keyboard.process_key_event(release(row, col));
        }
    }
    assert_eq!(keymap.borrow().get_activated_layer(), STD);
}
