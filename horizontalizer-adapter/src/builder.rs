use alloc::format;
use alloc::vec::Vec;
use core::fmt;

use horizontalizer::GroupOptions;

use crate::dom::{
    CONTAINER_CLASS, PAGE_SECTION_CLASS, SECTION_COUNT_PROPERTY, SectionDom, THEME_ATTRIBUTE,
    WRAPPER_CLASS,
};

/// Why a group could not be constructed.
///
/// Construction failures are local: the caller marks the marker errored and
/// moves on to the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The marker has no recognized page-section ancestor.
    NoSectionAncestor,
    /// The anchor section has no following siblings to collect.
    NoSections,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSectionAncestor => f.write_str("marker is not inside a page section"),
            Self::NoSections => f.write_str("no sibling sections to collect"),
        }
    }
}

impl core::error::Error for BuildError {}

/// The element structure produced by [`build_group`].
///
/// `sections` keeps the collected elements in their original document order;
/// teardown relies on that order to restore the page exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltGroup<E> {
    pub container: E,
    pub wrapper: E,
    pub sections: Vec<E>,
}

/// Walks up from `el` to the nearest recognized page-section ancestor.
pub fn closest_page_section<D: SectionDom>(dom: &D, el: &D::Element) -> Option<D::Element> {
    let mut cursor = dom.parent(el);
    while let Some(node) = cursor {
        if dom.has_class(&node, PAGE_SECTION_CLASS) {
            return Some(node);
        }
        cursor = dom.parent(&node);
    }
    None
}

/// Builds the container + scroll wrapper structure for one marker.
///
/// Collects `options.sections` next siblings of the marker's page-section
/// ancestor (stopping early with a warning when fewer exist), inserts the new
/// container at the first collected sibling's position, and relocates the
/// siblings into the wrapper keeping their order. The first section's theme
/// attribute is carried onto the container, and the collected count is
/// published as [`SECTION_COUNT_PROPERTY`].
pub fn build_group<D: SectionDom>(
    dom: &mut D,
    marker: &D::Element,
    options: &GroupOptions,
) -> Result<BuiltGroup<D::Element>, BuildError> {
    let anchor = closest_page_section(dom, marker).ok_or(BuildError::NoSectionAncestor)?;

    let mut sections = Vec::with_capacity(options.sections);
    let mut cursor = dom.next_sibling(&anchor);
    while sections.len() < options.sections {
        match cursor {
            Some(el) => {
                cursor = dom.next_sibling(&el);
                sections.push(el);
            }
            None => break,
        }
    }
    if sections.is_empty() {
        return Err(BuildError::NoSections);
    }
    if sections.len() < options.sections {
        hwarn!(
            requested = options.sections,
            collected = sections.len(),
            "fewer sibling sections than requested"
        );
    }

    let container = dom.create_element(CONTAINER_CLASS);
    let wrapper = dom.create_element(WRAPPER_CLASS);
    if let Some(theme) = dom.attribute(&sections[0], THEME_ATTRIBUTE) {
        dom.set_attribute(&container, THEME_ATTRIBUTE, &theme);
    }

    dom.insert_before(&container, &sections[0]);
    dom.append_child(&container, &wrapper);
    for section in &sections {
        dom.append_child(&wrapper, section);
    }
    dom.set_style_property(
        &container,
        SECTION_COUNT_PROPERTY,
        &format!("{}", sections.len()),
    );

    hdebug!(sections = sections.len(), "build_group");
    Ok(BuiltGroup {
        container,
        wrapper,
        sections,
    })
}
