//! Matching a live combination against a written shortcut specification

use super::alias;
use super::combination::KeyCombination;

/// Returns true if `combination` is exactly the shortcut `specification`.
///
/// The specification is lower-cased, split on `+` and resolved through the
/// alias table. Cardinality must match exactly, so `"cmd+k"` never matches
/// a three-key combination. Malformed input (empty segments, stray `+`)
/// simply fails to match.
pub fn matches(combination: &KeyCombination, specification: &str) -> bool {
    let specification = specification.to_lowercase();
    let wanted: Vec<&str> = specification.split('+').map(alias::resolve).collect();

    if wanted.len() != combination.len() {
        return false;
    }

    combination
        .iter()
        .all(|token| wanted.contains(&token.to_lowercase().as_str()))
}
