use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Custom property published on the container with the reserved total scroll
/// height, e.g. `"4200px"`. Style layers must consume this name verbatim.
pub const TOTAL_HEIGHT_PROPERTY: &str = "--horizontal-scroll-height";
/// Custom property published on the container with the collected section
/// count. Style layers must consume this name verbatim.
pub const SECTION_COUNT_PROPERTY: &str = "--horizontal-scroll-sections";
/// Style property carrying the horizontal translation of the wrapper.
pub const TRANSFORM_PROPERTY: &str = "transform";

/// Attribute that marks an element as a group marker.
pub const MARKER_ATTRIBUTE: &str = "data-horizontal-scroll";
/// Attribute recording a marker's construction outcome (`ready`/`error`).
pub const STATE_ATTRIBUTE: &str = "data-horizontal-scroll-state";
pub const SECTIONS_ATTRIBUTE: &str = "data-sections";
pub const OVERLAP_ATTRIBUTE: &str = "data-overlap";
pub const OVERLAP_START_ATTRIBUTE: &str = "data-overlap-start";
pub const OVERLAP_END_ATTRIBUTE: &str = "data-overlap-end";
pub const REVERSE_ATTRIBUTE: &str = "data-reverse";
pub const ID_ATTRIBUTE: &str = "data-id";
/// Visual theme attribute carried from the first section onto the container.
pub const THEME_ATTRIBUTE: &str = "data-section-theme";

pub const CONTAINER_CLASS: &str = "horizontal-scroll";
pub const WRAPPER_CLASS: &str = "horizontal-scroll-wrapper";
/// Class identifying a recognized page-section ancestor.
pub const PAGE_SECTION_CLASS: &str = "page-section";

pub const STATE_READY: &str = "ready";
pub const STATE_ERROR: &str = "error";

/// The page surface a host provides.
///
/// The core never touches a real DOM; everything it needs from the page goes
/// through this trait, so hosts can bind it to web elements, a retained-mode
/// scene graph, or [`crate::MemoryDom`] in tests.
///
/// Operations addressed at a missing or detached element must be silent
/// no-ops: stale closures may still fire after a group is torn down, and the
/// instance layer treats "nothing there" as "not yet initialized" rather than
/// a crash.
pub trait SectionDom {
    type Element: Clone + PartialEq + fmt::Debug;

    // Traversal.
    fn parent(&self, el: &Self::Element) -> Option<Self::Element>;
    fn next_sibling(&self, el: &Self::Element) -> Option<Self::Element>;
    /// Whether `el` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: &Self::Element, el: &Self::Element) -> bool;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// All elements carrying `name`, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<Self::Element>;

    // Structure. Inserting or appending an element that already has a parent
    // moves it (detach first, then attach), matching DOM semantics.
    fn create_element(&mut self, class: &str) -> Self::Element;
    /// Inserts `new` as a sibling immediately before `reference`.
    fn insert_before(&mut self, new: &Self::Element, reference: &Self::Element);
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element);
    /// Detaches `el` from its parent. Its own subtree stays intact.
    fn remove(&mut self, el: &Self::Element);

    // Attributes and style.
    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&mut self, el: &Self::Element, name: &str, value: &str);
    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    fn set_style_property(&mut self, el: &Self::Element, name: &str, value: &str);

    // Geometry, in pixels.
    /// Full content width of `el` (the scroll wrapper's unclipped width).
    fn content_width(&self, el: &Self::Element) -> f64;
    /// Top edge of `el` in document coordinates.
    fn top_offset(&self, el: &Self::Element) -> f64;
    /// Horizontal offset of `el` within its offset parent.
    fn offset_left(&self, el: &Self::Element) -> f64;

    // Host environment.
    /// Turns off the environment's automatic scroll-position restoration so
    /// it cannot fight hash repositioning on load. Optional; defaults to a
    /// no-op for hosts without such a mechanism.
    fn disable_scroll_restoration(&mut self) {}
}
