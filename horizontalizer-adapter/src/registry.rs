use alloc::vec::Vec;

use horizontalizer::{
    Crossing, Defaults, EventBus, EventListener, Frame, GroupEvent, GroupId, GroupOptions,
    Viewport,
};

use crate::attrs::overrides_from_marker;
use crate::builder::build_group;
use crate::dom::{
    CONTAINER_CLASS, MARKER_ATTRIBUTE, STATE_ATTRIBUTE, STATE_ERROR, STATE_READY, SectionDom,
};
use crate::instance::GroupInstance;

/// The process-wide list of active groups.
///
/// An explicitly owned value with defined init/teardown rules — the host
/// creates one, feeds it scroll/resize/frame signals, and invokes
/// [`Registry::enter_edit_mode`] from its authoring-environment hook. The
/// model is single-threaded: only initialization appends and only teardown
/// clears, so no synchronization is involved.
pub struct Registry<D: SectionDom> {
    defaults: Defaults,
    viewport: Viewport,
    coordinate: f64,
    instances: Vec<GroupInstance<D>>,
    bus: EventBus<D::Element>,
    next_id: usize,
    edit_mode: bool,
}

impl<D: SectionDom> Registry<D> {
    pub fn new(defaults: Defaults, viewport: Viewport) -> Self {
        Self {
            defaults,
            viewport,
            coordinate: 0.0,
            instances: Vec::new(),
            bus: EventBus::new(),
            next_id: 0,
            edit_mode: false,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[GroupInstance<D>] {
        &self.instances
    }

    pub fn in_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Registers a lifecycle event consumer. Optional for correctness.
    pub fn subscribe(&mut self, listener: impl Fn(&GroupEvent<D::Element>) + Send + Sync + 'static) {
        self.bus.subscribe(listener);
    }

    pub fn subscribe_arc(&mut self, listener: EventListener<D::Element>) {
        self.bus.subscribe_arc(listener);
    }

    /// Scans the page for markers and builds a group per eligible one.
    ///
    /// Skipped: markers already carrying a construction state, markers nested
    /// inside an existing container, and everything while in edit mode. A
    /// failed marker is stamped `error` and never blocks the rest of the
    /// pass. Emits one `Init` per group and a final `Ready` with the pass
    /// count; returns that count.
    pub fn init_all(&mut self, dom: &mut D) -> usize {
        if self.edit_mode {
            return 0;
        }
        let mut built = 0;
        for marker in dom.elements_with_attribute(MARKER_ATTRIBUTE) {
            if dom.attribute(&marker, STATE_ATTRIBUTE).is_some() {
                continue;
            }
            if inside_existing_group(dom, &marker) {
                continue;
            }
            let overrides = overrides_from_marker(dom, &marker);
            let options = GroupOptions::resolve(&self.defaults, &overrides);
            match build_group(dom, &marker, &options) {
                Ok(group) => {
                    let id = GroupId(self.next_id);
                    self.next_id += 1;
                    let container = group.container.clone();
                    let instance =
                        GroupInstance::new(dom, id, group, options, self.viewport, self.coordinate);
                    self.instances.push(instance);
                    dom.set_attribute(&marker, STATE_ATTRIBUTE, STATE_READY);
                    self.bus.emit(&GroupEvent::Init { container, id });
                    built += 1;
                }
                Err(err) => {
                    hwarn!(error = %err, "group construction failed");
                    dom.set_attribute(&marker, STATE_ATTRIBUTE, STATE_ERROR);
                }
            }
        }
        self.bus.emit(&GroupEvent::Ready { count: built });
        built
    }

    /// Records a scroll signal for every instance (coalesced until the next
    /// [`Registry::on_frame`]).
    pub fn on_scroll(&mut self, coordinate: f64) {
        self.coordinate = coordinate;
        for instance in &mut self.instances {
            instance.on_scroll(coordinate);
        }
    }

    /// Applies pending coordinates, once per rendering frame, and emits
    /// enter/leave events for any boundary crossings.
    pub fn on_frame(&mut self, dom: &mut D) {
        let Self { instances, bus, .. } = self;
        for instance in instances.iter_mut() {
            if let Some(frame) = instance.on_frame(dom) {
                emit_crossing(bus, instance, frame);
            }
        }
    }

    /// Forwards a viewport change; instances remeasure only on width changes.
    pub fn on_resize(&mut self, dom: &mut D, viewport: Viewport) {
        self.viewport = viewport;
        let Self { instances, bus, .. } = self;
        for instance in instances.iter_mut() {
            if let Some(frame) = instance.on_resize(dom, viewport) {
                emit_crossing(bus, instance, frame);
            }
        }
    }

    /// Destroys every instance exactly once and clears the list.
    pub fn teardown_all(&mut self, dom: &mut D) {
        for instance in &mut self.instances {
            instance.destroy(dom);
        }
        self.instances.clear();
    }

    /// The explicit edit-mode entry point the host environment registers.
    /// Tears all groups down once and suppresses further initialization.
    pub fn enter_edit_mode(&mut self, dom: &mut D) {
        if self.edit_mode {
            return;
        }
        self.edit_mode = true;
        hdebug!("enter_edit_mode");
        self.teardown_all(dom);
    }

    /// Resolves a same-document fragment to the owning group's computed
    /// scroll coordinate. `None` when no group's wrapper contains the target.
    pub fn scroll_target_for_hash(&self, dom: &D, hash: &str) -> Option<f64> {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        if id.is_empty() {
            return None;
        }
        let target = dom.element_by_id(id)?;
        self.instances
            .iter()
            .find_map(|instance| instance.scroll_coordinate_for_section(dom, &target))
    }
}

fn inside_existing_group<D: SectionDom>(dom: &D, marker: &D::Element) -> bool {
    let mut cursor = dom.parent(marker);
    while let Some(node) = cursor {
        if dom.has_class(&node, CONTAINER_CLASS) {
            return true;
        }
        cursor = dom.parent(&node);
    }
    false
}

fn emit_crossing<D: SectionDom>(
    bus: &EventBus<D::Element>,
    instance: &GroupInstance<D>,
    frame: Frame,
) {
    match frame.crossing {
        Some(Crossing::Enter) => bus.emit(&GroupEvent::SectionEnter {
            container: instance.container().clone(),
            id: instance.id(),
        }),
        Some(Crossing::Leave) => bus.emit(&GroupEvent::SectionLeave {
            container: instance.container().clone(),
            id: instance.id(),
        }),
        None => {}
    }
}
