use core::cell::RefCell;

use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};
use mitosis::keymap::KeyMap;
use mitosis::layout::{COL, KEYMAP, NUM_LAYER, ROW};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub type EmilyKeyMap = KeyMap<'static, ROW, COL, NUM_LAYER>;

/// Create the Emily keymap, leaked so that it can be shared like the firmware's static keymap
pub fn create_emily_keymap() -> &'static RefCell<EmilyKeyMap> {
    // Box::leak is acceptable in tests
    Box::leak(Box::new(RefCell::new(KeyMap::new(&KEYMAP))))
}

/// Pin writes of a low-active LED channel going through the given on/off sequence
pub fn led_transactions(states: &[bool]) -> Vec<Transaction> {
    states
        .iter()
        .map(|on| Transaction::set(if *on { State::Low } else { State::High }))
        .collect()
}

/// Red, green and blue pin mocks expecting the given on/off sequences
pub fn rgb_pins(red: &[bool], green: &[bool], blue: &[bool]) -> (PinMock, PinMock, PinMock) {
    (
        PinMock::new(&led_transactions(red)),
        PinMock::new(&led_transactions(green)),
        PinMock::new(&led_transactions(blue)),
    )
}
