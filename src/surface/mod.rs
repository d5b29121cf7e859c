//! Input surfaces
//!
//! Signals are scoped to a surface and its subtree. Surfaces live in an
//! arena owned by the caller; the root is the default surface a listener
//! binds to when no other is chosen.

use std::collections::HashMap;

/// Handle to a surface inside a [`SurfaceTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(usize);

#[derive(Debug)]
struct Surface {
    name: String,
    parent: Option<SurfaceId>,
    children: HashMap<String, SurfaceId>,
}

/// Arena of nested input surfaces
#[derive(Debug)]
pub struct SurfaceTree {
    surfaces: Vec<Surface>,
}

impl SurfaceTree {
    /// Create a tree holding only the root surface
    pub fn new() -> Self {
        Self {
            surfaces: vec![Surface {
                name: String::new(),
                parent: None,
                children: HashMap::new(),
            }],
        }
    }

    /// The root (default) surface
    pub fn root(&self) -> SurfaceId {
        SurfaceId(0)
    }

    /// Number of surfaces, root included
    pub(crate) fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Add a named child under `parent`, or return the existing one
    pub fn add_child(&mut self, parent: SurfaceId, name: impl Into<String>) -> SurfaceId {
        let name = name.into();
        if let Some(id) = self.child(parent, &name) {
            return id;
        }
        let id = SurfaceId(self.surfaces.len());
        self.surfaces.push(Surface {
            name: name.clone(),
            parent: Some(parent),
            children: HashMap::new(),
        });
        if let Some(surface) = self.surfaces.get_mut(parent.0) {
            surface.children.insert(name, id);
        }
        id
    }

    /// Parent of `id`; `None` for the root and unknown ids
    pub fn parent(&self, id: SurfaceId) -> Option<SurfaceId> {
        self.surfaces.get(id.0).and_then(|s| s.parent)
    }

    /// Name `id` was added with; the root's name is empty
    pub fn name(&self, id: SurfaceId) -> Option<&str> {
        self.surfaces.get(id.0).map(|s| s.name.as_str())
    }

    /// Find the direct child of `parent` called `name`
    pub fn child(&self, parent: SurfaceId, name: &str) -> Option<SurfaceId> {
        self.surfaces.get(parent.0)?.children.get(name).copied()
    }

    /// Look up a `/`-separated path below the root, creating missing
    /// surfaces on the way. Empty segments are skipped, so `""` is the root.
    pub fn ensure_path(&mut self, path: &str) -> SurfaceId {
        let mut current = self.root();
        for segment in segments(path) {
            current = self.add_child(current, segment);
        }
        current
    }

    /// Deepest existing surface along `path`.
    ///
    /// A signal from a surface nobody registered bubbles through its
    /// nearest known ancestor, so scoping against that ancestor gives the
    /// same answer the full path would. Nothing is allocated.
    pub fn closest_path(&self, path: &str) -> SurfaceId {
        let mut current = self.root();
        for segment in segments(path) {
            match self.child(current, segment) {
                Some(id) => current = id,
                None => break,
            }
        }
        current
    }

    /// Returns true if `node` is `ancestor` or lies in its subtree.
    /// Unknown ids are never contained.
    pub fn contains(&self, ancestor: SurfaceId, node: SurfaceId) -> bool {
        if node.0 >= self.surfaces.len() {
            return false;
        }
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl Default for SurfaceTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_contains_everything() {
        let mut tree = SurfaceTree::new();
        let panel = tree.ensure_path("editor/panel");
        assert!(tree.contains(tree.root(), panel));
        assert!(tree.contains(tree.root(), tree.root()));
    }

    #[test]
    fn test_nested_surface_scoping() {
        let mut tree = SurfaceTree::new();
        let editor = tree.ensure_path("editor");
        let panel = tree.add_child(editor, "panel");
        let sidebar = tree.ensure_path("sidebar");

        assert!(tree.contains(editor, panel));
        assert!(tree.contains(panel, panel));
        assert!(!tree.contains(panel, editor));
        assert!(!tree.contains(editor, sidebar));
        assert!(!tree.contains(editor, tree.root()));
    }

    #[test]
    fn test_ensure_path_reuses_surfaces() {
        let mut tree = SurfaceTree::new();
        let first = tree.ensure_path("editor/panel");
        let second = tree.ensure_path("/editor//panel/");
        assert_eq!(first, second);
        assert_eq!(tree.name(first), Some("panel"));
        assert_eq!(tree.ensure_path(""), tree.root());
    }

    #[test]
    fn test_add_child_is_idempotent() {
        let mut tree = SurfaceTree::new();
        let first = tree.add_child(tree.root(), "editor");
        let second = tree.add_child(tree.root(), "editor");
        assert_eq!(first, second);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_closest_path_stops_at_known_ancestor() {
        let mut tree = SurfaceTree::new();
        let editor = tree.ensure_path("editor");
        assert_eq!(tree.closest_path("editor"), editor);
        assert_eq!(tree.closest_path("/editor/"), editor);
        assert_eq!(tree.closest_path(""), tree.root());
        assert_eq!(tree.closest_path("editor/input/caret"), editor);
        assert_eq!(tree.closest_path("sidebar/n1"), tree.root());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_unknown_id_is_not_contained() {
        let tree = SurfaceTree::new();
        assert!(!tree.contains(tree.root(), SurfaceId(42)));
    }
}
