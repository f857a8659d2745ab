//! Absolute-placement layout backed by taffy.
//!
//! The content container is the taffy root, sized to the window. Every other
//! widget is an absolutely positioned node inset from its parent's top-left
//! corner, so the computed layout is exactly the requested coordinates.

use std::collections::HashMap;

use taffy::prelude::*;
use tracing::warn;

use super::Placement;
use crate::geometry::{Offset, Region, Size};
use crate::widget::WidgetId;

/// Mirrors a form's placements into a [`TaffyTree`].
pub struct PlacementLayout {
    tree: TaffyTree<WidgetId>,
    node_map: HashMap<WidgetId, taffy::NodeId>,
    root: Option<taffy::NodeId>,
    /// Available space for the root: the window size.
    viewport: Size,
}

impl PlacementLayout {
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            node_map: HashMap::new(),
            root: None,
            viewport: Size::ZERO,
        }
    }

    /// Create or update the node for `id`.
    ///
    /// A placement without a parent becomes the root. A placement whose parent
    /// has not been placed yet is ignored.
    pub fn place(&mut self, id: WidgetId, placement: Placement) {
        let style = Self::style_for(&placement);

        let node = match self.node_map.get(&id) {
            Some(&node) => {
                if let Err(err) = self.tree.set_style(node, style) {
                    warn!(?id, %err, "failed to restyle layout node");
                }
                node
            }
            None => {
                let node = match self.tree.new_leaf_with_context(style, id) {
                    Ok(node) => node,
                    Err(err) => {
                        warn!(?id, %err, "failed to create layout node");
                        return;
                    }
                };
                self.node_map.insert(id, node);
                if let Some(parent) = placement.parent {
                    match self.node_map.get(&parent) {
                        Some(&parent_node) => {
                            if let Err(err) = self.tree.add_child(parent_node, node) {
                                warn!(?id, ?parent, %err, "failed to attach layout node");
                            }
                        }
                        None => warn!(?id, ?parent, "parent has no layout node"),
                    }
                }
                node
            }
        };

        if placement.parent.is_none() {
            self.root = Some(node);
            self.viewport = placement.size.unwrap_or(self.viewport);
        }
        self.compute();
    }

    /// Drop the node for `id` (its descendants must be removed separately).
    pub fn remove(&mut self, id: WidgetId) {
        if let Some(node) = self.node_map.remove(&id) {
            if let Err(err) = self.tree.remove(node) {
                warn!(?id, %err, "failed to remove layout node");
            }
            if self.root == Some(node) {
                self.root = None;
            }
        }
    }

    /// Window-relative region of `id`, if it has been placed.
    pub fn region(&self, id: WidgetId) -> Option<Region> {
        let node = *self.node_map.get(&id)?;
        let layout = self.tree.layout(node).ok()?;
        let mut origin = Offset::new(
            layout.location.x.round() as i32,
            layout.location.y.round() as i32,
        );
        let mut current = node;
        while let Some(parent) = self.tree.parent(current) {
            if let Ok(parent_layout) = self.tree.layout(parent) {
                origin = origin
                    + Offset::new(
                        parent_layout.location.x.round() as i32,
                        parent_layout.location.y.round() as i32,
                    );
            }
            current = parent;
        }
        Some(Region::new(
            origin.x,
            origin.y,
            layout.size.width.round() as i32,
            layout.size.height.round() as i32,
        ))
    }

    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    fn compute(&mut self) {
        let Some(root) = self.root else { return };
        let available = taffy::geometry::Size {
            width: AvailableSpace::Definite(self.viewport.width as f32),
            height: AvailableSpace::Definite(self.viewport.height as f32),
        };
        if let Err(err) = self.tree.compute_layout(root, available) {
            warn!(%err, "layout computation failed");
        }
    }

    fn style_for(placement: &Placement) -> taffy::Style {
        let mut style = taffy::Style::default();
        if let Some(size) = placement.size {
            style.size = Self::dimensions(size);
        }
        if placement.parent.is_some() {
            style.position = Position::Absolute;
            style.inset = taffy::geometry::Rect {
                left: LengthPercentageAuto::from_length(placement.at.x as f32),
                top: LengthPercentageAuto::from_length(placement.at.y as f32),
                right: LengthPercentageAuto::AUTO,
                bottom: LengthPercentageAuto::AUTO,
            };
        }
        style
    }

    fn dimensions(size: Size) -> taffy::geometry::Size<Dimension> {
        taffy::geometry::Size {
            width: Dimension::from_length(size.width as f32),
            height: Dimension::from_length(size.height as f32),
        }
    }
}

impl Default for PlacementLayout {
    fn default() -> Self {
        Self::new()
    }
}
