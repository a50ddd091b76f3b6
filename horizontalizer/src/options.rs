use alloc::string::String;

/// Process-wide defaults, overridable per marker.
///
/// `overlap` is a fraction of the viewport height applied to both region
/// boundaries unless a group overrides one side.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defaults {
    pub overlap: f64,
    pub reverse: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            overlap: 0.0,
            reverse: false,
        }
    }
}

impl Defaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// Per-marker configuration overrides, as parsed from element attributes.
///
/// This is a plain value object: the attribute layer fills it in once and the
/// resolved [`GroupOptions`] is handed to the instance directly, so computed
/// values never round-trip through stringified attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupOverrides {
    pub overlap: Option<f64>,
    pub overlap_start: Option<f64>,
    pub overlap_end: Option<f64>,
    pub reverse: Option<bool>,
    pub sections: Option<usize>,
    pub id: Option<String>,
}

/// Resolved configuration for one group, fixed at construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupOptions {
    /// Fractional viewport-height offset applied at the region start.
    pub overlap_start: f64,
    /// Fractional viewport-height offset applied at the region end.
    pub overlap_end: f64,
    /// Direction flag: a reverse group begins fully scrolled and ends at rest.
    pub reverse: bool,
    /// Number of sibling sections the builder collects.
    pub sections: usize,
    /// Optional stable identifier from the marker.
    pub id: Option<String>,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            overlap_start: 0.0,
            overlap_end: 0.0,
            reverse: false,
            sections: 1,
            id: None,
        }
    }
}

impl GroupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges process-wide defaults with per-marker overrides.
    ///
    /// Instance values win over defaults; per-side overlap overrides win over
    /// the overall `overlap` split.
    pub fn resolve(defaults: &Defaults, overrides: &GroupOverrides) -> Self {
        let overlap = overrides.overlap.unwrap_or(defaults.overlap);
        Self {
            overlap_start: overrides.overlap_start.unwrap_or(overlap),
            overlap_end: overrides.overlap_end.unwrap_or(overlap),
            reverse: overrides.reverse.unwrap_or(defaults.reverse),
            sections: overrides.sections.unwrap_or(1),
            id: overrides.id.clone(),
        }
    }

    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap_start = overlap;
        self.overlap_end = overlap;
        self
    }

    pub fn with_overlap_start(mut self, overlap_start: f64) -> Self {
        self.overlap_start = overlap_start;
        self
    }

    pub fn with_overlap_end(mut self, overlap_end: f64) -> Self {
        self.overlap_end = overlap_end;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_sections(mut self, sections: usize) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
