//! Normalized key combinations
//!
//! A [`KeyCombination`] is the ordered set of canonical tokens active at one
//! key transition: held modifiers first (control, meta, shift, alt), then
//! the lower-cased key itself.

use std::fmt;

use serde::Serialize;

use super::matcher;
use super::modifiers::{is_modifier, ModifierState};

/// Canonical token for the space bar
const SPACE: &str = "space";

/// An insertion-ordered set of canonical key tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct KeyCombination {
    tokens: Vec<String>,
}

impl KeyCombination {
    /// Normalize a key identifier and its modifier flags into a combination.
    ///
    /// `"A"` with shift held and `"a"` with shift held produce the same
    /// combination. Named keys are lower-cased as well (`ArrowUp` → `arrowup`).
    pub fn normalize(key: &str, modifiers: ModifierState) -> Self {
        let mut combination = Self::default();
        for token in modifiers.tokens() {
            combination.insert(token);
        }
        match key {
            "" => {}
            " " => combination.insert(SPACE),
            key => combination.insert(&key.to_lowercase()),
        }
        combination
    }

    /// Build a combination from arbitrary tokens, dropping duplicates.
    ///
    /// Tokens are kept as given; matching compares them case-insensitively.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut combination = Self::default();
        for token in tokens {
            combination.insert(token.as_ref());
        }
        combination
    }

    fn insert(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(token.to_owned());
        }
    }

    /// Returns true if `token` is part of this combination (exact comparison)
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no key or modifier is present
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Tokens in insertion order, as a slice
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The first token that is not a modifier, if any
    pub fn key(&self) -> Option<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .find(|token| !is_modifier(token))
    }

    /// Canonical string form: tokens joined by `+`
    pub fn text(&self) -> String {
        self.tokens.join("+")
    }

    /// Compare against a shortcut specification such as `"cmd+shift+k"`
    pub fn matches(&self, specification: &str) -> bool {
        matcher::matches(self, specification)
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl<'a> IntoIterator for &'a KeyCombination {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods(control: bool, meta: bool, shift: bool, alt: bool) -> ModifierState {
        ModifierState {
            control,
            meta,
            shift,
            alt,
        }
    }

    #[test]
    fn test_control_shift_k() {
        let combo = KeyCombination::normalize("k", mods(true, false, true, false));
        assert_eq!(combo.text(), "control+shift+k");
    }

    #[test]
    fn test_printable_key_is_case_folded() {
        let upper = KeyCombination::normalize("A", mods(false, false, true, false));
        let lower = KeyCombination::normalize("a", mods(false, false, true, false));
        assert_eq!(upper, lower);
        assert_eq!(upper.text(), "shift+a");
    }

    #[test]
    fn test_all_modifiers_in_fixed_order() {
        let combo = KeyCombination::normalize("b", mods(true, true, true, true));
        assert_eq!(
            combo.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["control", "meta", "shift", "alt", "b"]
        );
        assert_eq!(combo.to_string(), "control+meta+shift+alt+b");
    }

    #[test]
    fn test_named_keys() {
        let combo = KeyCombination::normalize("ArrowUp", mods(true, false, false, false));
        assert_eq!(combo.text(), "control+arrowup");
        assert_eq!(combo.key(), Some("arrowup"));

        let bracket = KeyCombination::normalize("]", mods(false, false, true, false));
        assert_eq!(bracket.text(), "shift+]");
    }

    #[test]
    fn test_space_key_is_canonical() {
        let combo = KeyCombination::normalize(" ", mods(true, false, false, false));
        assert_eq!(combo.text(), "control+space");
    }

    #[test]
    fn test_modifier_key_itself_is_not_duplicated() {
        let combo = KeyCombination::normalize("Shift", mods(false, false, true, false));
        assert_eq!(combo.len(), 1);
        assert_eq!(combo.text(), "shift");
        assert_eq!(combo.key(), None);
    }

    #[test]
    fn test_empty_key_contributes_nothing() {
        let combo = KeyCombination::normalize("", ModifierState::default());
        assert!(combo.is_empty());
        assert_eq!(combo.text(), "");
    }

    #[test]
    fn test_from_tokens_keeps_order_and_drops_duplicates() {
        let combo = KeyCombination::from_tokens(["a", "b", "a", "c"]);
        assert_eq!(combo.tokens(), ["a", "b", "c"]);
        assert_eq!(format!("the shortcut is {combo}"), "the shortcut is a+b+c");

        // iteration is restartable
        let first: Vec<_> = (&combo).into_iter().collect();
        let second: Vec<_> = combo.iter().collect();
        assert_eq!(first, second);
    }
}
