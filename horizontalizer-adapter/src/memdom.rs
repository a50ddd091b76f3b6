use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::dom::SectionDom;

/// Handle to a [`MemoryDom`] element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
struct Node {
    class: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    width: Option<f64>,
    top: Option<f64>,
}

/// An arena-backed in-memory page implementing [`SectionDom`].
///
/// Used by tests, examples, and headless harnesses. Geometry is declarative
/// rather than computed by a layout pass: leaves carry an assigned width and
/// top offset, a parent's content width is the sum of its children's, and a
/// parent without an assigned top inherits its first child's (so a container
/// inserted at a section's position reports that section's top).
#[derive(Clone, Debug)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    root: NodeId,
    style_writes: usize,
    scroll_restoration_disabled: bool,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(Node::default());
        Self {
            nodes,
            root: NodeId(0),
            style_writes: 0,
            scroll_restoration_disabled: false,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Creates a detached element.
    pub fn create(&mut self, class: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            class: class.into(),
            ..Node::default()
        });
        id
    }

    /// Creates an element appended to `parent`.
    pub fn create_in(&mut self, parent: NodeId, class: &str) -> NodeId {
        let id = self.create(class);
        self.nodes[id.0].parent = Some(parent);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_width(&mut self, el: NodeId, width: f64) {
        self.nodes[el.0].width = Some(width);
    }

    pub fn set_top(&mut self, el: NodeId, top: f64) {
        self.nodes[el.0].top = Some(top);
    }

    pub fn children(&self, el: NodeId) -> &[NodeId] {
        &self.nodes[el.0].children
    }

    pub fn style(&self, el: NodeId, name: &str) -> Option<&str> {
        self.nodes[el.0].styles.get(name).map(String::as_str)
    }

    /// Total number of style-property writes, for asserting on coalescing.
    pub fn style_writes(&self) -> usize {
        self.style_writes
    }

    pub fn scroll_restoration_disabled(&self) -> bool {
        self.scroll_restoration_disabled
    }

    fn detach(&mut self, el: NodeId) {
        if let Some(parent) = self.nodes[el.0].parent.take() {
            self.nodes[parent.0].children.retain(|&child| child != el);
        }
    }

    fn collect_with_attribute(&self, el: NodeId, name: &str, out: &mut Vec<NodeId>) {
        if self.nodes[el.0].attributes.contains_key(name) {
            out.push(el);
        }
        for &child in &self.nodes[el.0].children {
            self.collect_with_attribute(child, name, out);
        }
    }

    fn find_by_id(&self, el: NodeId, id: &str) -> Option<NodeId> {
        if self.nodes[el.0].attributes.get("id").is_some_and(|v| v == id) {
            return Some(el);
        }
        self.nodes[el.0]
            .children
            .iter()
            .find_map(|&child| self.find_by_id(child, id))
    }
}

impl SectionDom for MemoryDom {
    type Element = NodeId;

    fn parent(&self, el: &NodeId) -> Option<NodeId> {
        self.nodes.get(el.0)?.parent
    }

    fn next_sibling(&self, el: &NodeId) -> Option<NodeId> {
        let parent = self.parent(el)?;
        let siblings = &self.nodes[parent.0].children;
        let index = siblings.iter().position(|sibling| sibling == el)?;
        siblings.get(index + 1).copied()
    }

    fn contains(&self, ancestor: &NodeId, el: &NodeId) -> bool {
        let mut cursor = Some(*el);
        while let Some(node) = cursor {
            if node == *ancestor {
                return true;
            }
            cursor = self.parent(&node);
        }
        false
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_id(self.root, id)
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_with_attribute(self.root, name, &mut out);
        out
    }

    fn create_element(&mut self, class: &str) -> NodeId {
        self.create(class)
    }

    fn insert_before(&mut self, new: &NodeId, reference: &NodeId) {
        if new == reference {
            return;
        }
        let Some(parent) = self.parent(reference) else {
            return;
        };
        self.detach(*new);
        let siblings = &self.nodes[parent.0].children;
        let Some(index) = siblings.iter().position(|sibling| sibling == reference) else {
            return;
        };
        self.nodes[parent.0].children.insert(index, *new);
        self.nodes[new.0].parent = Some(parent);
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        if parent == child {
            return;
        }
        self.detach(*child);
        self.nodes[parent.0].children.push(*child);
        self.nodes[child.0].parent = Some(*parent);
    }

    fn remove(&mut self, el: &NodeId) {
        self.detach(*el);
    }

    fn attribute(&self, el: &NodeId, name: &str) -> Option<String> {
        self.nodes.get(el.0)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, el: &NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.attributes.insert(name.into(), value.into());
        }
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.nodes
            .get(el.0)
            .is_some_and(|node| node.class == class)
    }

    fn set_style_property(&mut self, el: &NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.styles.insert(name.into(), value.into());
            self.style_writes += 1;
        }
    }

    fn content_width(&self, el: &NodeId) -> f64 {
        let node = &self.nodes[el.0];
        if node.children.is_empty() {
            node.width.unwrap_or(0.0)
        } else {
            node.children
                .iter()
                .map(|child| self.content_width(child))
                .sum()
        }
    }

    fn top_offset(&self, el: &NodeId) -> f64 {
        let node = &self.nodes[el.0];
        match node.top {
            Some(top) => top,
            None => node
                .children
                .first()
                .map(|child| self.top_offset(child))
                .unwrap_or(0.0),
        }
    }

    fn disable_scroll_restoration(&mut self) {
        self.scroll_restoration_disabled = true;
    }

    fn offset_left(&self, el: &NodeId) -> f64 {
        let Some(parent) = self.parent(el) else {
            return 0.0;
        };
        self.nodes[parent.0]
            .children
            .iter()
            .take_while(|sibling| *sibling != el)
            .map(|sibling| self.content_width(sibling))
            .sum()
    }
}
