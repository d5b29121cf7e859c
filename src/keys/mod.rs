//! Key normalization and shortcut matching
//!
//! Turns raw key identifiers plus modifier flags into canonical
//! [`KeyCombination`]s and compares them against informal shortcut
//! specifications like `"ctrl+shift+up"`.

pub mod alias;
mod combination;
pub mod matcher;
mod modifiers;

pub use combination::KeyCombination;
pub use modifiers::{is_modifier, tokens, ModifierState};
