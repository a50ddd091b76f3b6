/// Viewport geometry, in pixels.
///
/// Only the width participates in remeasure decisions: mobile toolbars showing
/// and hiding produce height-only changes that must not retrigger layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when `other` differs in width (height is ignored).
    pub fn width_changed(&self, other: Viewport) -> bool {
        self.width != other.width
    }
}

/// Where the current scroll coordinate sits relative to a group's region.
///
/// The region's boundary values belong to [`Zone::Active`]: the active zone is
/// a closed interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    Before,
    Active,
    After,
}

/// A boundary crossing detected by [`crate::ScrollMapper::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossing {
    /// The group entered its active region from above.
    Enter,
    /// The group left its region downward.
    Leave,
}

/// The result of stepping the mapper with one scroll coordinate.
///
/// `shift` is how far the scroll wrapper is translated left, in pixels; hosts
/// render it as `translate3d(-<shift>px, 0, 0)` or the equivalent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub shift: f64,
    pub zone: Zone,
    pub crossing: Option<Crossing>,
}

/// A stable per-instance identifier handed out by the adapter registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(pub usize);

impl core::fmt::Display for GroupId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "group#{}", self.0)
    }
}
