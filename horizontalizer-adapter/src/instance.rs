use alloc::format;

use horizontalizer::{
    Frame, GroupGeometry, GroupId, GroupOptions, GroupState, Measurements, ScrollMapper, Viewport,
    measure,
};

use crate::builder::BuiltGroup;
use crate::dom::{SectionDom, TOTAL_HEIGHT_PROPERTY, TRANSFORM_PROPERTY};

/// One horizontal group's lifecycle: cached measurements, the mapper, and the
/// wiring between host signals and rendering side effects.
///
/// Scroll handling is deliberately split in two so bursts coalesce: every
/// scroll signal only records the latest coordinate via
/// [`GroupInstance::on_scroll`], and the host calls
/// [`GroupInstance::on_frame`] once per rendering frame to apply it. At most
/// one recompute happens per frame regardless of how many signals fired.
#[derive(Clone, Debug)]
pub struct GroupInstance<D: SectionDom> {
    id: GroupId,
    options: GroupOptions,
    group: BuiltGroup<D::Element>,
    mapper: ScrollMapper,
    measurements: Measurements,
    viewport: Viewport,
    last_coordinate: f64,
    pending: Option<f64>,
    defunct: bool,
}

impl<D: SectionDom> GroupInstance<D> {
    /// Wires a built group up: measures, publishes the height hint, and
    /// applies the initial shift for `coordinate`. The first mapper step only
    /// seeds the zone, so construction never emits a crossing.
    pub fn new(
        dom: &mut D,
        id: GroupId,
        group: BuiltGroup<D::Element>,
        options: GroupOptions,
        viewport: Viewport,
        coordinate: f64,
    ) -> Self {
        let mut instance = Self {
            id,
            mapper: ScrollMapper::new(options.reverse),
            options,
            group,
            measurements: Measurements::default(),
            viewport,
            last_coordinate: coordinate,
            pending: Some(coordinate),
            defunct: false,
        };
        instance.remeasure(dom);
        instance.on_frame(dom);
        instance
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn options(&self) -> &GroupOptions {
        &self.options
    }

    pub fn container(&self) -> &D::Element {
        &self.group.container
    }

    pub fn wrapper(&self) -> &D::Element {
        &self.group.wrapper
    }

    pub fn sections(&self) -> &[D::Element] {
        &self.group.sections
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    pub fn is_destroyed(&self) -> bool {
        self.defunct
    }

    fn geometry(&self, dom: &D) -> GroupGeometry {
        GroupGeometry::new(
            dom.content_width(&self.group.wrapper),
            dom.top_offset(&self.group.container),
        )
    }

    fn remeasure(&mut self, dom: &mut D) {
        self.measurements = measure(
            self.geometry(dom),
            self.viewport,
            self.options.overlap_start,
            self.options.overlap_end,
        );
        dom.set_style_property(
            &self.group.container,
            TOTAL_HEIGHT_PROPERTY,
            &format!("{}px", self.measurements.reserved_height),
        );
    }

    /// Records a scroll signal. Cheap; any number of calls between frames
    /// collapse to one recompute with the latest coordinate.
    pub fn on_scroll(&mut self, coordinate: f64) {
        if self.defunct {
            return;
        }
        self.pending = Some(coordinate);
    }

    /// Applies the pending coordinate, if any: steps the mapper and renders
    /// the translation. Returns the frame so callers can forward crossings.
    pub fn on_frame(&mut self, dom: &mut D) -> Option<Frame> {
        if self.defunct {
            return None;
        }
        let coordinate = self.pending.take()?;
        self.last_coordinate = coordinate;
        let frame = self.mapper.step(coordinate, &self.measurements.region);
        dom.set_style_property(
            &self.group.wrapper,
            TRANSFORM_PROPERTY,
            &format!("translate3d(-{}px, 0, 0)", frame.shift),
        );
        Some(frame)
    }

    /// Handles a viewport change. Height-only changes are recorded but do not
    /// remeasure; a width change remeasures and immediately re-steps with the
    /// last coordinate (the returned frame carries any resulting crossing).
    pub fn on_resize(&mut self, dom: &mut D, viewport: Viewport) -> Option<Frame> {
        if self.defunct {
            return None;
        }
        if !self.viewport.width_changed(viewport) {
            self.viewport = viewport;
            return None;
        }
        self.viewport = viewport;
        self.remeasure(dom);
        self.pending = Some(self.last_coordinate);
        self.on_frame(dom)
    }

    /// Tears the group down: reinserts the sections as siblings at the
    /// container's position in their original relative order, removes the
    /// container, and marks the instance defunct. Safe to call more than
    /// once; stale scroll/resize closures firing afterwards are no-ops.
    pub fn destroy(&mut self, dom: &mut D) {
        if self.defunct {
            return;
        }
        self.defunct = true;
        self.pending = None;
        for section in &self.group.sections {
            dom.insert_before(section, &self.group.container);
        }
        dom.remove(&self.group.container);
        hdebug!(id = self.id.0, "destroy");
    }

    /// The vertical scroll coordinate that places `target` at its correct
    /// horizontal position, for same-document hash navigation.
    ///
    /// Returns `None` when `target` is not inside this group's wrapper. A
    /// degenerate region resolves to its start.
    pub fn scroll_coordinate_for_section(&self, dom: &D, target: &D::Element) -> Option<f64> {
        if self.defunct || !dom.contains(&self.group.wrapper, target) {
            return None;
        }
        let region = self.measurements.region;
        if region.distance <= 0.0 {
            return Some(region.start);
        }
        let offset = dom.offset_left(target).clamp(0.0, region.distance);
        let offset = if self.options.reverse {
            region.distance - offset
        } else {
            offset
        };
        Some(region.start + (offset / region.distance) * (region.end - region.start))
    }

    /// Captures the mapping state for persistence across host sessions.
    pub fn state(&self) -> GroupState {
        GroupState {
            measurements: self.measurements,
            zone: self.mapper.zone(),
            last_coordinate: self.last_coordinate,
        }
    }

    /// Restores previously captured mapping state.
    ///
    /// The restored zone suppresses spurious crossings on the next frame.
    pub fn restore_state(&mut self, state: GroupState) {
        if self.defunct {
            return;
        }
        self.measurements = state.measurements;
        self.mapper.restore_zone(state.zone);
        self.last_coordinate = state.last_coordinate;
    }
}
