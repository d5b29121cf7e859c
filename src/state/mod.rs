//! Shortcut state machine
//!
//! Each raw key-down is independent: there is no accumulated "held" set,
//! only the modifiers-plus-key snapshot taken at every transition.
//! - Key-down: dropped when it is a repeat, otherwise emits `down`
//! - Key-up: always emits `up`
//! - Signals from outside the bound surface are ignored entirely

mod machine;

pub use machine::{Control, DispatchError, Listener, ListenerId, ListenerOptions, ShortcutState};
