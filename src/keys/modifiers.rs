//! Modifier key definitions and state tracking
//!
//! The four modifier flags a raw key signal carries, and the fixed
//! order in which they appear in a normalized combination.

use serde::{Deserialize, Serialize};

/// Canonical modifier tokens
pub mod tokens {
    /// Control key token
    pub const CONTROL: &str = "control";
    /// Meta (Command / Windows) key token
    pub const META: &str = "meta";
    /// Shift key token
    pub const SHIFT: &str = "shift";
    /// Alt/Option key token
    pub const ALT: &str = "alt";

    /// All modifier tokens, in combination order
    pub const ALL: [&str; 4] = [CONTROL, META, SHIFT, ALT];
}

/// Tracks which modifier keys are pressed at one key transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierState {
    /// Control key is held
    #[serde(default, rename = "ctrlKey")]
    pub control: bool,
    /// Meta key is held
    #[serde(default, rename = "metaKey")]
    pub meta: bool,
    /// Shift key is held
    #[serde(default, rename = "shiftKey")]
    pub shift: bool,
    /// Alt/Option key is held
    #[serde(default, rename = "altKey")]
    pub alt: bool,
}

impl ModifierState {
    /// Check if all modifiers are released
    pub fn is_empty(&self) -> bool {
        !self.control && !self.meta && !self.shift && !self.alt
    }

    /// Tokens of the held modifiers: control, meta, shift, alt.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> {
        let held = [self.control, self.meta, self.shift, self.alt];
        tokens::ALL
            .into_iter()
            .zip(held)
            .filter_map(|(token, on)| on.then_some(token))
    }
}

/// Returns true if `token` is one of the four canonical modifier tokens
pub fn is_modifier(token: &str) -> bool {
    tokens::ALL.contains(&token)
}
