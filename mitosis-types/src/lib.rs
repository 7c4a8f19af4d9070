//! # Mitosis Types
//!
//! Value types shared by the Mitosis Emily keymap and the firmware that consumes it.
//!
//! ## Modules
//!
//! - [`action`] - What a key position does: emit a key, emit a key with modifiers, hold a layer
//! - [`keycode`] - HID keycodes, including media and mouse keys
//! - [`modifier`] - Modifier key combinations
//! - [`layer`] - The four layers of the Emily keymap
//! - [`indicator`] - Status LED states derived from the active layer

#![no_std]

pub mod action;
pub mod indicator;
pub mod keycode;
pub mod layer;
pub mod modifier;
