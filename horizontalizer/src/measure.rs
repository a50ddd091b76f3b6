use crate::{Region, Viewport};

/// Host-measured layout inputs for one group.
///
/// `content_width` is the scroll wrapper's full content width;
/// `top_offset` is the container's top edge in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupGeometry {
    pub content_width: f64,
    pub top_offset: f64,
}

impl GroupGeometry {
    pub fn new(content_width: f64, top_offset: f64) -> Self {
        Self {
            content_width,
            top_offset,
        }
    }
}

/// The derived region plus the layout hint the host reserves scroll space
/// with.
///
/// `reserved_height` is `viewport.height + distance` and must be republished
/// every time [`measure`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    pub region: Region,
    pub reserved_height: f64,
}

/// Computes a group's region boundaries and horizontal travel from current
/// layout geometry.
///
/// Call at initialization and again whenever the viewport **width** changes;
/// height-only changes must not remeasure (see
/// [`Viewport::width_changed`]).
///
/// Content narrower than the viewport yields `distance == 0`: a degenerate
/// region that maps every coordinate to a zero shift.
pub fn measure(
    geometry: GroupGeometry,
    viewport: Viewport,
    overlap_start: f64,
    overlap_end: f64,
) -> Measurements {
    let travel = geometry.content_width - viewport.width;
    if travel < 0.0 {
        hwarn!(
            content_width = geometry.content_width,
            viewport_width = viewport.width,
            "content narrower than viewport; no horizontal travel"
        );
    }
    let distance = travel.max(0.0);
    let start = geometry.top_offset - viewport.height * overlap_start;
    let end = start + distance + viewport.height * overlap_end * 2.0;

    hdebug!(
        distance,
        start,
        end,
        content_width = geometry.content_width,
        viewport_width = viewport.width,
        "measure"
    );

    Measurements {
        region: Region::new(start, end, distance),
        reserved_height: viewport.height + distance,
    }
}
