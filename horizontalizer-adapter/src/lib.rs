//! Host adapter utilities for the `horizontalizer` crate.
//!
//! The `horizontalizer` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the host-facing half of a horizontal-scroll
//! section system, still framework-neutral (no web-sys/ratatui bindings):
//!
//! - [`SectionDom`]: the trait a host page implements (traversal, structure
//!   edits, attributes, style properties, geometry reads)
//! - Attribute parsing from marker elements into configuration overrides
//! - Group construction (collect siblings, wrap, relocate)
//! - Per-instance lifecycle: frame-coalesced scroll, width-gated resize,
//!   teardown that restores the original document
//! - A process-wide [`Registry`] with typed lifecycle events and an explicit
//!   edit-mode teardown entry point
//! - Hash-link navigation with tween-driven smooth scrolling
//! - [`MemoryDom`]: an in-memory page used by tests, examples, and headless
//!   harnesses
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod attrs;
mod builder;
mod dom;
mod hashlink;
mod instance;
mod memdom;
mod registry;
mod tween;

#[cfg(test)]
mod tests;

pub use attrs::{AttrValue, overrides_from_marker};
pub use builder::{BuildError, BuiltGroup, build_group, closest_page_section};
pub use dom::{
    CONTAINER_CLASS, ID_ATTRIBUTE, MARKER_ATTRIBUTE, OVERLAP_ATTRIBUTE, OVERLAP_END_ATTRIBUTE,
    OVERLAP_START_ATTRIBUTE, PAGE_SECTION_CLASS, REVERSE_ATTRIBUTE, SECTION_COUNT_PROPERTY,
    SECTIONS_ATTRIBUTE, STATE_ATTRIBUTE, STATE_ERROR, STATE_READY, SectionDom, THEME_ATTRIBUTE,
    TOTAL_HEIGHT_PROPERTY, TRANSFORM_PROPERTY, WRAPPER_CLASS,
};
pub use hashlink::{HashScroller, ScrollTarget, on_initial_hash, on_link_click};
pub use instance::GroupInstance;
pub use memdom::{MemoryDom, NodeId};
pub use registry::Registry;
pub use tween::{Easing, Tween};
