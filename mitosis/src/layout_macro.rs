/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::$k,
        ))
    };
}

/// Create a normal action: `KeyAction`, e.g. `a!(Transparent)` or `a!(No)`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
            $crate::types::keycode::KeyCode::$x,
            $m,
        ))
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1 while held.
#[macro_export]
macro_rules! mo {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerOn($x))
    };
}

/// Create a shifted key
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::SHIFT)
    };
}

/// Create a key with left GUI held, e.g. `lgui!(Left)`
#[macro_export]
macro_rules! lgui {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::GUI)
    };
}
