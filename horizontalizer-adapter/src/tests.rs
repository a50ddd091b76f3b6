use crate::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use horizontalizer::{Defaults, GroupEvent, GroupOptions, Viewport, Zone};

fn viewport() -> Viewport {
    Viewport::new(1000.0, 800.0)
}

struct Page {
    dom: MemoryDom,
    marker: NodeId,
    anchor: NodeId,
    sections: Vec<NodeId>,
}

/// One page-section anchoring a marker, followed by `section_count` sibling
/// sections of 1000px each; the first sibling sits at y = 1200.
fn page(section_count: usize, requested: usize) -> Page {
    let mut dom = MemoryDom::new();
    let root = dom.root();

    let anchor = dom.create_in(root, PAGE_SECTION_CLASS);
    dom.set_top(anchor, 400.0);
    dom.set_width(anchor, 1000.0);

    let marker = dom.create_in(anchor, "code-block");
    dom.set_attribute(&marker, MARKER_ATTRIBUTE, "true");
    dom.set_attribute(&marker, SECTIONS_ATTRIBUTE, &requested.to_string());

    let mut sections = Vec::new();
    for i in 0..section_count {
        let section = dom.create_in(root, PAGE_SECTION_CLASS);
        dom.set_width(section, 1000.0);
        dom.set_top(section, 1200.0 + 800.0 * i as f64);
        sections.push(section);
    }

    Page {
        dom,
        marker,
        anchor,
        sections,
    }
}

#[test]
fn builder_wraps_sections_in_document_order() {
    let Page {
        mut dom,
        marker,
        anchor,
        sections,
    } = page(3, 3);
    dom.set_attribute(&sections[0], THEME_ATTRIBUTE, "dark");

    let group = build_group(&mut dom, &marker, &GroupOptions::new().with_sections(3)).unwrap();
    assert_eq!(group.sections, sections);

    // Container took the first section's position, wrapper holds the run.
    assert_eq!(dom.children(dom.root()), &[anchor, group.container][..]);
    assert_eq!(dom.children(group.container), &[group.wrapper][..]);
    assert_eq!(dom.children(group.wrapper), sections.as_slice());

    assert_eq!(
        dom.attribute(&group.container, THEME_ATTRIBUTE).as_deref(),
        Some("dark")
    );
    assert_eq!(dom.style(group.container, SECTION_COUNT_PROPERTY), Some("3"));
}

#[test]
fn builder_proceeds_with_fewer_sections_than_requested() {
    let Page {
        mut dom, marker, ..
    } = page(2, 4);
    let group = build_group(&mut dom, &marker, &GroupOptions::new().with_sections(4)).unwrap();
    assert_eq!(group.sections.len(), 2);
    assert_eq!(dom.style(group.container, SECTION_COUNT_PROPERTY), Some("2"));
}

#[test]
fn builder_rejects_marker_without_page_section_ancestor() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let stray = dom.create_in(root, "code-block");
    dom.set_attribute(&stray, MARKER_ATTRIBUTE, "true");

    let err = build_group(&mut dom, &stray, &GroupOptions::new()).unwrap_err();
    assert_eq!(err, BuildError::NoSectionAncestor);
}

#[test]
fn builder_rejects_anchor_without_siblings() {
    let Page {
        mut dom, marker, ..
    } = page(0, 2);
    let err = build_group(&mut dom, &marker, &GroupOptions::new().with_sections(2)).unwrap_err();
    assert_eq!(err, BuildError::NoSections);
}

#[test]
fn registry_marks_failed_marker_and_continues() {
    let Page {
        mut dom, marker, ..
    } = page(3, 3);
    // A second marker with no page-section ancestor.
    let stray_parent = dom.create_in(dom.root(), "plain");
    let stray = dom.create_in(stray_parent, "code-block");
    dom.set_attribute(&stray, MARKER_ATTRIBUTE, "true");

    let mut registry = Registry::new(Defaults::default(), viewport());
    assert_eq!(registry.init_all(&mut dom), 1);
    assert_eq!(dom.attribute(&stray, STATE_ATTRIBUTE).as_deref(), Some(STATE_ERROR));
    assert_eq!(dom.attribute(&marker, STATE_ATTRIBUTE).as_deref(), Some(STATE_READY));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_skips_initialized_and_nested_markers() {
    let Page {
        mut dom, sections, ..
    } = page(3, 3);
    // A marker nested in a section that gets relocated into the group.
    let nested = dom.create_in(sections[1], "code-block");
    dom.set_attribute(&nested, MARKER_ATTRIBUTE, "true");
    dom.set_attribute(&nested, SECTIONS_ATTRIBUTE, "2");

    let mut registry = Registry::new(Defaults::default(), viewport());
    assert_eq!(registry.init_all(&mut dom), 1);
    // The nested marker stays untouched for a later pass outside the group.
    assert_eq!(dom.attribute(&nested, STATE_ATTRIBUTE), None);
    // Re-running initializes nothing new: the first marker is stamped, the
    // nested one still sits inside a container.
    assert_eq!(registry.init_all(&mut dom), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn init_publishes_height_hint_and_initial_shift() {
    let Page { mut dom, .. } = page(3, 3);
    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);

    let instance = &registry.instances()[0];
    let m = instance.measurements();
    assert_eq!(m.region.distance, 2000.0);
    assert_eq!(m.region.start, 1200.0);
    assert_eq!(m.region.end, 3200.0);

    assert_eq!(
        dom.style(*instance.container(), TOTAL_HEIGHT_PROPERTY),
        Some("2800px")
    );
    // Page is at the top: parked at the origin.
    assert_eq!(
        dom.style(*instance.wrapper(), TRANSFORM_PROPERTY),
        Some("translate3d(-0px, 0, 0)")
    );
}

#[test]
fn scroll_pipeline_tracks_the_region() {
    let Page { mut dom, .. } = page(3, 3);
    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);
    let wrapper = *registry.instances()[0].wrapper();

    for (s, expected) in [
        (0.0, "translate3d(-0px, 0, 0)"),
        (1200.0, "translate3d(-0px, 0, 0)"),
        (2200.0, "translate3d(-1000px, 0, 0)"),
        (3200.0, "translate3d(-2000px, 0, 0)"),
        (9999.0, "translate3d(-2000px, 0, 0)"),
    ] {
        registry.on_scroll(s);
        registry.on_frame(&mut dom);
        assert_eq!(dom.style(wrapper, TRANSFORM_PROPERTY), Some(expected), "s={s}");
    }
}

#[test]
fn reverse_group_parks_at_the_far_end() {
    let Page {
        mut dom, marker, ..
    } = page(3, 3);
    dom.set_attribute(&marker, REVERSE_ATTRIBUTE, "true");

    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);
    let wrapper = *registry.instances()[0].wrapper();

    for (s, expected) in [
        (0.0, "translate3d(-2000px, 0, 0)"),
        (1200.0, "translate3d(-2000px, 0, 0)"),
        (3200.0, "translate3d(-0px, 0, 0)"),
        (9999.0, "translate3d(-0px, 0, 0)"),
    ] {
        registry.on_scroll(s);
        registry.on_frame(&mut dom);
        assert_eq!(dom.style(wrapper, TRANSFORM_PROPERTY), Some(expected), "s={s}");
    }
}

#[test]
fn scroll_bursts_coalesce_to_one_write_per_frame() {
    let Page { mut dom, .. } = page(3, 3);
    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);
    let wrapper = *registry.instances()[0].wrapper();

    let before = dom.style_writes();
    registry.on_scroll(100.0);
    registry.on_scroll(500.0);
    registry.on_scroll(2200.0);
    registry.on_frame(&mut dom);
    assert_eq!(dom.style_writes(), before + 1);
    assert_eq!(
        dom.style(wrapper, TRANSFORM_PROPERTY),
        Some("translate3d(-1000px, 0, 0)")
    );

    // Nothing pending: the next frame is free.
    registry.on_frame(&mut dom);
    assert_eq!(dom.style_writes(), before + 1);
}

#[test]
fn enter_and_leave_fire_once_per_crossing() {
    let Page { mut dom, .. } = page(3, 3);
    let mut registry = Registry::new(Defaults::default(), viewport());

    let enters = Arc::new(AtomicUsize::new(0));
    let leaves = Arc::new(AtomicUsize::new(0));
    {
        let enters = Arc::clone(&enters);
        let leaves = Arc::clone(&leaves);
        registry.subscribe(move |event| match event {
            GroupEvent::SectionEnter { .. } => {
                enters.fetch_add(1, Ordering::SeqCst);
            }
            GroupEvent::SectionLeave { .. } => {
                leaves.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        });
    }
    registry.init_all(&mut dom);

    for s in [0.0, 1500.0, 2500.0, 4000.0, 2500.0, 0.0, 1500.0] {
        registry.on_scroll(s);
        registry.on_frame(&mut dom);
    }
    // 0 → 1500 enter; 4000 leave; back down silently; 0 → 1500 enter again.
    assert_eq!(enters.load(Ordering::SeqCst), 2);
    assert_eq!(leaves.load(Ordering::SeqCst), 1);
}

#[test]
fn init_emits_init_then_ready_with_count() {
    let Page { mut dom, .. } = page(3, 3);
    let mut registry = Registry::new(Defaults::default(), viewport());

    let events = Arc::new(Mutex::new(Vec::new()));
    {
        let events = Arc::clone(&events);
        registry.subscribe(move |event| events.lock().unwrap().push(event.clone()));
    }
    registry.init_all(&mut dom);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], GroupEvent::Init { .. }));
    assert!(matches!(events[1], GroupEvent::Ready { count: 1 }));
}

#[test]
fn height_only_resize_does_not_remeasure() {
    let Page { mut dom, .. } = page(3, 3);
    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);

    let before = registry.instances()[0].measurements();
    let writes = dom.style_writes();
    // Mobile toolbar show/hide: width unchanged.
    registry.on_resize(&mut dom, Viewport::new(1000.0, 740.0));
    assert_eq!(registry.instances()[0].measurements(), before);
    assert_eq!(dom.style_writes(), writes);
}

#[test]
fn width_resize_recomputes_distance_and_height_hint() {
    let Page { mut dom, .. } = page(3, 3);
    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);
    let container = *registry.instances()[0].container();

    registry.on_resize(&mut dom, Viewport::new(500.0, 800.0));
    let m = registry.instances()[0].measurements();
    assert_eq!(m.region.distance, 3000.0 - 500.0);
    assert_eq!(dom.style(container, TOTAL_HEIGHT_PROPERTY), Some("3300px"));
}

#[test]
fn overlap_scenario_three_of_five_sections() {
    let Page {
        mut dom,
        marker,
        anchor,
        sections,
    } = page(5, 3);
    dom.set_attribute(&marker, OVERLAP_ATTRIBUTE, "0.1");

    let mut registry = Registry::new(Defaults::default(), viewport());
    assert_eq!(registry.init_all(&mut dom), 1);

    let instance = &registry.instances()[0];
    assert_eq!(instance.sections(), &sections[..3]);
    // The two uncollected siblings stay behind the container.
    assert_eq!(
        dom.children(dom.root()),
        &[anchor, *instance.container(), sections[3], sections[4]][..]
    );

    let m = instance.measurements();
    assert_eq!(m.region.start, 1200.0 - 0.1 * 800.0);
    assert_eq!(m.region.distance, 2000.0);
}

#[test]
fn teardown_restores_original_document_order() {
    let Page {
        mut dom, anchor, sections, ..
    } = page(3, 3);
    let original: Vec<_> = dom.children(dom.root()).to_vec();
    assert_eq!(original, [vec![anchor], sections].concat());

    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);
    let container = *registry.instances()[0].container();

    registry.teardown_all(&mut dom);
    assert_eq!(dom.children(dom.root()), original.as_slice());
    assert!(registry.is_empty());
    // The container is fully detached.
    assert_eq!(dom.parent(&container), None);
}

#[test]
fn destroyed_instance_ignores_further_signals() {
    let Page {
        mut dom, marker, ..
    } = page(3, 3);
    let options = GroupOptions::new().with_sections(3);
    let group = build_group(&mut dom, &marker, &options).unwrap();
    let mut instance = GroupInstance::new(
        &mut dom,
        horizontalizer::GroupId(0),
        group,
        options,
        viewport(),
        0.0,
    );

    instance.destroy(&mut dom);
    instance.destroy(&mut dom); // idempotent

    let writes = dom.style_writes();
    instance.on_scroll(2200.0);
    assert_eq!(instance.on_frame(&mut dom), None);
    assert_eq!(instance.on_resize(&mut dom, Viewport::new(500.0, 800.0)), None);
    assert_eq!(dom.style_writes(), writes);
    assert!(instance.is_destroyed());
}

#[test]
fn edit_mode_tears_down_once_and_blocks_reinit() {
    let Page { mut dom, .. } = page(3, 3);
    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);
    assert_eq!(registry.len(), 1);

    registry.enter_edit_mode(&mut dom);
    registry.enter_edit_mode(&mut dom);
    assert!(registry.in_edit_mode());
    assert!(registry.is_empty());
    assert_eq!(registry.init_all(&mut dom), 0);
}

#[test]
fn hash_targets_map_to_section_positions() {
    let Page {
        mut dom, sections, ..
    } = page(3, 3);
    dom.set_attribute(&sections[1], "id", "pricing");
    dom.set_attribute(&sections[2], "id", "contact");

    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);

    // Region [1200, 3200], distance 2000, sections 1000px each.
    assert_eq!(registry.scroll_target_for_hash(&dom, "#pricing"), Some(2200.0));
    assert_eq!(registry.scroll_target_for_hash(&dom, "contact"), Some(3200.0));
    assert_eq!(registry.scroll_target_for_hash(&dom, "#missing"), None);

    // An id outside any group is not ours to handle.
    let outside = dom.create_in(dom.root(), "plain");
    dom.set_attribute(&outside, "id", "footer");
    assert_eq!(registry.scroll_target_for_hash(&dom, "#footer"), None);
}

#[test]
fn reverse_hash_targets_mirror_the_travel() {
    let Page {
        mut dom,
        marker,
        sections,
        ..
    } = page(3, 3);
    dom.set_attribute(&marker, REVERSE_ATTRIBUTE, "true");
    dom.set_attribute(&sections[0], "id", "first");
    dom.set_attribute(&sections[2], "id", "last");

    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);

    // Reverse mode shows the last section first: the first section is reached
    // at the end of the region, the last at its start.
    assert_eq!(registry.scroll_target_for_hash(&dom, "#first"), Some(3200.0));
    assert_eq!(registry.scroll_target_for_hash(&dom, "#last"), Some(1200.0));
}

#[test]
fn link_click_animates_and_initial_hash_jumps() {
    let Page {
        mut dom, sections, ..
    } = page(3, 3);
    dom.set_attribute(&sections[1], "id", "pricing");

    let mut registry = Registry::new(Defaults::default(), viewport());
    registry.init_all(&mut dom);

    let click = on_link_click(&dom, &registry, "https://example.test/page#pricing").unwrap();
    assert_eq!(click.coordinate, 2200.0);
    assert!(click.animate);
    assert_eq!(on_link_click(&dom, &registry, "#elsewhere"), None);

    assert!(!dom.scroll_restoration_disabled());
    let initial = on_initial_hash(&mut dom, &registry, "#pricing").unwrap();
    assert_eq!(initial.coordinate, 2200.0);
    assert!(!initial.animate);
    assert!(dom.scroll_restoration_disabled());
}

#[test]
fn hash_scroller_approaches_the_target_monotonically() {
    let mut scroller = HashScroller::new();
    let target = ScrollTarget {
        coordinate: 2200.0,
        animate: true,
    };
    assert_eq!(scroller.start(0.0, target, 0, 100, Easing::SmoothStep), 2200.0);
    assert!(scroller.is_animating());

    let mut last = 0.0;
    for now_ms in [0u64, 10, 20, 40, 80, 100] {
        let coordinate = scroller.tick(now_ms).unwrap();
        assert!(coordinate >= last);
        assert!(coordinate <= 2200.0);
        last = coordinate;
    }
    assert_eq!(last, 2200.0);
    assert!(!scroller.is_animating());
    assert_eq!(scroller.tick(120), None);

    // Immediate jump targets never animate.
    let jump = ScrollTarget {
        coordinate: 500.0,
        animate: false,
    };
    assert_eq!(scroller.start(0.0, jump, 0, 100, Easing::Linear), 500.0);
    assert!(!scroller.is_animating());
}

#[test]
fn attribute_values_coerce_permissively() {
    assert_eq!(AttrValue::parse("true"), AttrValue::Bool(true));
    assert_eq!(AttrValue::parse(" false "), AttrValue::Bool(false));
    assert_eq!(AttrValue::parse("0.25"), AttrValue::Number(0.25));
    assert_eq!(AttrValue::parse("3"), AttrValue::Number(3.0));
    assert_eq!(AttrValue::parse("hero"), AttrValue::Text("hero".into()));

    assert_eq!(AttrValue::parse("3").as_count(), Some(3));
    assert_eq!(AttrValue::parse("2.5").as_count(), None);
    assert_eq!(AttrValue::parse("-1").as_count(), None);
    assert_eq!(AttrValue::parse("true").as_number(), None);
}

#[test]
fn marker_attributes_become_overrides() {
    let Page {
        mut dom, marker, ..
    } = page(3, 3);
    dom.set_attribute(&marker, OVERLAP_ATTRIBUTE, "0.2");
    dom.set_attribute(&marker, OVERLAP_END_ATTRIBUTE, "0.05");
    dom.set_attribute(&marker, REVERSE_ATTRIBUTE, "true");
    dom.set_attribute(&marker, ID_ATTRIBUTE, "hero");

    let overrides = overrides_from_marker(&dom, &marker);
    assert_eq!(overrides.overlap, Some(0.2));
    assert_eq!(overrides.overlap_start, None);
    assert_eq!(overrides.overlap_end, Some(0.05));
    assert_eq!(overrides.reverse, Some(true));
    assert_eq!(overrides.sections, Some(3));
    assert_eq!(overrides.id.as_deref(), Some("hero"));

    let options = GroupOptions::resolve(&Defaults::default(), &overrides);
    assert_eq!(options.overlap_start, 0.2);
    assert_eq!(options.overlap_end, 0.05);
    assert!(options.reverse);
}

#[test]
fn state_snapshot_survives_a_new_instance() {
    let Page {
        mut dom, marker, ..
    } = page(3, 3);
    let options = GroupOptions::new().with_sections(3);
    let group = build_group(&mut dom, &marker, &options).unwrap();
    let mut instance = GroupInstance::new(
        &mut dom,
        horizontalizer::GroupId(0),
        group.clone(),
        options.clone(),
        viewport(),
        2200.0,
    );
    instance.on_scroll(2200.0);
    instance.on_frame(&mut dom);

    let state = instance.state();
    assert_eq!(state.zone, Some(Zone::Active));
    assert_eq!(state.last_coordinate, 2200.0);

    let mut revived = GroupInstance::new(
        &mut dom,
        horizontalizer::GroupId(1),
        group,
        options,
        viewport(),
        0.0,
    );
    revived.restore_state(state);
    // Continuing inside the region emits no spurious crossing.
    revived.on_scroll(2300.0);
    let frame = revived.on_frame(&mut dom).unwrap();
    assert_eq!(frame.crossing, None);
    assert_eq!(frame.zone, Zone::Active);
}
