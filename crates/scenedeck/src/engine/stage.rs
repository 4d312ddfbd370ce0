use std::sync::atomic::{AtomicU64, Ordering};

use eframe::egui::{self, Align2, Color32, Pos2, Shape};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Text drawn as part of a node. Layout happens at paint time because galleys
/// need the host's font system.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Pos2,
    pub anchor: Align2,
    pub size: f32,
    pub color: Color32,
}

impl Label {
    pub fn new(text: impl Into<String>, pos: Pos2, size: f32, color: Color32) -> Self {
        Self {
            text: text.into(),
            pos,
            anchor: Align2::CENTER_CENTER,
            size,
            color,
        }
    }

    pub fn anchored(mut self, anchor: Align2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn font_id(&self) -> egui::FontId {
        egui::FontId::proportional(self.size)
    }
}

/// A renderable node: a flat display list with a node-wide opacity.
///
/// Scenes own their node exclusively and rebuild its contents every update.
/// Coordinates are viewport pixels with the origin at the top-left corner.
#[derive(Debug)]
pub struct RenderNode {
    id: NodeId,
    opacity: f32,
    shapes: Vec<Shape>,
    labels: Vec<Label>,
}

impl RenderNode {
    pub fn new() -> Self {
        Self {
            id: NodeId::next(),
            opacity: 1.0,
            shapes: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.labels.clear();
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn label(&mut self, label: Label) {
        self.labels.push(label);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl Default for RenderNode {
    fn default() -> Self {
        Self::new()
    }
}

/// The single shared mount point. Nodes are owned by their scenes; the root
/// only records which ones are attached.
#[derive(Debug, Default)]
pub struct RenderRoot {
    children: Vec<NodeId>,
}

impl RenderRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a node. Returns false if it was already mounted.
    pub fn attach(&mut self, id: NodeId) -> bool {
        if self.children.contains(&id) {
            return false;
        }
        self.children.push(id);
        true
    }

    /// Detach a node. Returns false if it was not mounted.
    pub fn detach(&mut self, id: NodeId) -> bool {
        let before = self.children.len();
        self.children.retain(|c| *c != id);
        self.children.len() != before
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.children.contains(&id)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique() {
        let a = RenderNode::new();
        let b = RenderNode::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn opacity_is_clamped() {
        let mut node = RenderNode::new();
        node.set_opacity(1.7);
        assert_eq!(node.opacity(), 1.0);
        node.set_opacity(-0.2);
        assert_eq!(node.opacity(), 0.0);
    }

    #[test]
    fn clear_drops_shapes_and_labels() {
        let mut node = RenderNode::new();
        node.push(Shape::circle_filled(Pos2::ZERO, 2.0, Color32::WHITE));
        node.label(Label::new("hi", Pos2::ZERO, 12.0, Color32::WHITE));
        node.clear();
        assert!(node.shapes().is_empty());
        assert!(node.labels().is_empty());
    }

    #[test]
    fn attach_and_detach() {
        let node = RenderNode::new();
        let mut root = RenderRoot::new();
        assert!(root.attach(node.id()));
        assert!(!root.attach(node.id()));
        assert!(root.is_attached(node.id()));
        assert_eq!(root.len(), 1);
        assert!(root.detach(node.id()));
        assert!(!root.detach(node.id()));
        assert!(root.is_empty());
    }
}
