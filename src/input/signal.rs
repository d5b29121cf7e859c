//! Raw key-transition signals
//!
//! [`SignalRecord`] is the JSON shape a host input source delivers;
//! [`KeySignal`] is the same record with its target resolved to a surface.

use serde::{Deserialize, Serialize};

use crate::keys::ModifierState;
use crate::surface::{SurfaceId, SurfaceTree};

/// Direction of a raw key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    KeyDown,
    KeyUp,
}

/// A raw key signal as delivered on the wire.
///
/// Every field except `type` may be omitted; missing flags read as
/// "not pressed" and a missing target means the root surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    #[serde(rename = "type")]
    pub kind: SignalKind,
    #[serde(default)]
    pub key: String,
    #[serde(flatten)]
    pub modifiers: ModifierState,
    #[serde(default)]
    pub repeat: bool,
    /// `/`-separated surface path the signal originates from
    #[serde(default)]
    pub target: String,
}

impl SignalRecord {
    /// Resolve the target path to its deepest known surface.
    ///
    /// The tree is never modified, so unknown targets cost nothing.
    pub fn resolve(self, tree: &SurfaceTree) -> KeySignal {
        KeySignal {
            kind: self.kind,
            key: self.key,
            modifiers: self.modifiers,
            repeat: self.repeat,
            target: tree.closest_path(&self.target),
        }
    }
}

/// A raw key signal bound to the surface it originated from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySignal {
    pub kind: SignalKind,
    /// Key identifier, e.g. `"a"`, `"A"`, `"ArrowUp"`
    pub key: String,
    pub modifiers: ModifierState,
    /// Platform re-fire of a held key; only meaningful for key-down
    pub repeat: bool,
    pub target: SurfaceId,
}

impl KeySignal {
    /// Key-down on `target` with no modifiers held
    pub fn down(target: SurfaceId, key: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::KeyDown,
            key: key.into(),
            modifiers: ModifierState::default(),
            repeat: false,
            target,
        }
    }

    /// Key-up on `target` with no modifiers held
    pub fn up(target: SurfaceId, key: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::KeyUp,
            ..Self::down(target, key)
        }
    }

    /// Replace the modifier flags
    pub fn with_modifiers(mut self, modifiers: ModifierState) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Mark as a key-repeat
    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_deserialization() {
        let json = r#"{"type":"keydown","key":"K","ctrlKey":true,"shiftKey":true,"repeat":true,"target":"editor"}"#;
        let record: SignalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, SignalKind::KeyDown);
        assert_eq!(record.key, "K");
        assert!(record.modifiers.control && record.modifiers.shift);
        assert!(!record.modifiers.meta && !record.modifiers.alt);
        assert!(record.repeat);
        assert_eq!(record.target, "editor");
    }

    #[test]
    fn test_partial_record_defaults() {
        let record: SignalRecord = serde_json::from_str(r#"{"type":"keyup"}"#).unwrap();
        assert_eq!(record.kind, SignalKind::KeyUp);
        assert_eq!(record.key, "");
        assert!(record.modifiers.is_empty());
        assert!(!record.repeat);
        assert_eq!(record.target, "");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = serde_json::from_str::<SignalRecord>(r#"{"type":"keypress","key":"a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_target() {
        let mut tree = SurfaceTree::new();
        let panel = tree.ensure_path("editor/panel");
        let record: SignalRecord =
            serde_json::from_str(r#"{"type":"keydown","key":"a","target":"editor/panel"}"#).unwrap();
        assert_eq!(record.resolve(&tree).target, panel);

        let root: SignalRecord = serde_json::from_str(r#"{"type":"keydown","key":"a"}"#).unwrap();
        assert_eq!(root.resolve(&tree).target, tree.root());
    }

    #[test]
    fn test_unknown_target_resolves_without_growing_tree() {
        let mut tree = SurfaceTree::new();
        let editor = tree.ensure_path("editor");
        let nested: SignalRecord =
            serde_json::from_str(r#"{"type":"keyup","key":"a","target":"editor/input"}"#).unwrap();
        let outside: SignalRecord =
            serde_json::from_str(r#"{"type":"keyup","key":"a","target":"sidebar/n7"}"#).unwrap();

        assert_eq!(nested.resolve(&tree).target, editor);
        assert_eq!(outside.resolve(&tree).target, tree.root());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_builders() {
        let tree = SurfaceTree::new();
        let signal = KeySignal::up(tree.root(), "a").repeated();
        assert_eq!(signal.kind, SignalKind::KeyUp);
        assert!(signal.repeat);
    }
}
