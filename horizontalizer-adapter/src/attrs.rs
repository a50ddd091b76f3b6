use alloc::string::String;

use horizontalizer::GroupOverrides;

use crate::dom::{
    ID_ATTRIBUTE, OVERLAP_ATTRIBUTE, OVERLAP_END_ATTRIBUTE, OVERLAP_START_ATTRIBUTE,
    REVERSE_ATTRIBUTE, SECTIONS_ATTRIBUTE, SectionDom,
};

/// A permissively typed attribute value.
///
/// `"true"`/`"false"` coerce to booleans, numeric-looking strings to numbers,
/// anything else passes through as text.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AttrValue {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => match trimmed.parse::<f64>() {
                Ok(n) => Self::Number(n),
                Err(_) => Self::Text(trimmed.into()),
            },
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Non-negative whole numbers only; anything else is rejected.
    pub fn as_count(&self) -> Option<usize> {
        match self {
            Self::Number(n) if *n >= 0.0 && *n == (*n as usize) as f64 => Some(*n as usize),
            _ => None,
        }
    }
}

fn parsed<D: SectionDom>(dom: &D, el: &D::Element, name: &str) -> Option<AttrValue> {
    dom.attribute(el, name).map(|raw| AttrValue::parse(&raw))
}

/// Reads a marker element's configuration attributes into the core's plain
/// override object.
///
/// Unrecognized or mistyped values fall through to `None` and resolve to the
/// process-wide defaults. The stable identifier is taken verbatim.
pub fn overrides_from_marker<D: SectionDom>(dom: &D, marker: &D::Element) -> GroupOverrides {
    GroupOverrides {
        overlap: parsed(dom, marker, OVERLAP_ATTRIBUTE).and_then(|v| v.as_number()),
        overlap_start: parsed(dom, marker, OVERLAP_START_ATTRIBUTE).and_then(|v| v.as_number()),
        overlap_end: parsed(dom, marker, OVERLAP_END_ATTRIBUTE).and_then(|v| v.as_number()),
        reverse: parsed(dom, marker, REVERSE_ATTRIBUTE).and_then(|v| v.as_bool()),
        sections: parsed(dom, marker, SECTIONS_ATTRIBUTE).and_then(|v| v.as_count()),
        id: dom.attribute(marker, ID_ATTRIBUTE),
    }
}
