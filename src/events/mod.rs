//! Combination notifications
//!
//! A [`CombinationEvent`] is emitted for every qualifying key transition
//! and carries the normalized combination along with its canonical text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::keys::KeyCombination;

/// Which transition a notification describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    /// A combination went down (non-repeat key press)
    Down,
    /// A combination was released
    Up,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Down => write!(f, "down"),
            Notification::Up => write!(f, "up"),
        }
    }
}

/// Error returned when parsing an unknown notification name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification name: {0:?}")]
pub struct UnknownNotification(pub String);

impl FromStr for Notification {
    type Err = UnknownNotification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "down" | "shortcutdown" => Ok(Notification::Down),
            "up" | "shortcutup" => Ok(Notification::Up),
            _ => Err(UnknownNotification(s.to_owned())),
        }
    }
}

/// One shortcut transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinationEvent {
    #[serde(rename = "type")]
    kind: Notification,
    keys: KeyCombination,
    text: String,
}

impl CombinationEvent {
    /// Create an event with an empty combination
    pub fn new(kind: Notification) -> Self {
        Self::with_keys(kind, KeyCombination::default())
    }

    /// Create an event carrying `keys`
    pub fn with_keys(kind: Notification, keys: KeyCombination) -> Self {
        let text = keys.text();
        Self { kind, keys, text }
    }

    /// Whether this is a `down` or `up` notification
    pub fn kind(&self) -> Notification {
        self.kind
    }

    /// The normalized combination
    pub fn keys(&self) -> &KeyCombination {
        &self.keys
    }

    /// Canonical `+`-joined form, e.g. `control+shift+k`
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Compare the carried combination against a shortcut specification
    pub fn matches(&self, specification: &str) -> bool {
        self.keys.matches(specification)
    }

    /// Tokens in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keys.iter()
    }
}

impl fmt::Display for CombinationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<'a> IntoIterator for &'a CombinationEvent {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
