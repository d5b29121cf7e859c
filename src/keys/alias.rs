//! Informal key names accepted in shortcut specifications
//!
//! Only consulted when matching against text such as `"cmd+option+k"`.
//! Live combinations are built from canonical tokens and never pass
//! through this table.

/// Alias → canonical token
const ALIASES: &[(&str, &str)] = &[
    ("up", "arrowup"),
    ("down", "arrowdown"),
    ("left", "arrowleft"),
    ("right", "arrowright"),
    (" ", "space"),
    ("plus", "+"),
    ("ctrl", "control"),
    ("cmd", "meta"),
    ("command", "meta"),
    ("option", "alt"),
    ("bksp", "backspace"),
    ("del", "delete"),
    ("return", "enter"),
    ("esc", "escape"),
    ("pgup", "pageup"),
    ("pgdn", "pagedown"),
];

/// Resolve an already lower-cased token to its canonical form.
///
/// Unknown tokens are returned unchanged.
pub fn resolve(token: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map_or(token, |(_, canonical)| canonical)
}
