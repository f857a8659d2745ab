//! Widget arena: parent/child containment for a form's widgets.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{Widget, WidgetId};

const EMPTY_CHILDREN: &[WidgetId] = &[];

/// All widgets of one form, backed by a slotmap arena.
///
/// The root is the form's content container. Every other widget is a child
/// of the root or of a nested frame. Widgets are never removed one by one;
/// [`clear`](Self::clear) tears down everything except the root.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Widget>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: WidgetId,
}

impl WidgetTree {
    /// Create a tree holding only `root`.
    pub fn new(root: Widget) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(root);
        let mut children = SecondaryMap::new();
        children.insert(root, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            root,
        }
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Insert `widget` as the last child of `parent`.
    ///
    /// Returns `None` (and inserts nothing) if `parent` is not in the tree.
    pub fn insert_child(&mut self, parent: WidgetId, widget: Widget) -> Option<WidgetId> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        let id = self.nodes.insert(widget);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        Some(id)
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.nodes.get_mut(id)
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Children in insertion order; empty if `id` has none or does not exist.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Remove every widget except the root. Returns the removed ids.
    pub fn clear(&mut self) -> Vec<WidgetId> {
        let root = self.root;
        let removed: Vec<WidgetId> = self.nodes.keys().filter(|&id| id != root).collect();
        for &id in &removed {
            self.nodes.remove(id);
            self.children.remove(id);
            self.parent.remove(id);
        }
        if let Some(kids) = self.children.get_mut(root) {
            kids.clear();
        }
        removed
    }

    /// Number of widgets, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is never removed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }
}
