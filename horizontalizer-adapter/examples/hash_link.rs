// Example: intercepting a hash link and tween-scrolling to its section.
use horizontalizer::{Defaults, Viewport};
use horizontalizer_adapter::{
    Easing, HashScroller, MARKER_ATTRIBUTE, MemoryDom, PAGE_SECTION_CLASS, Registry,
    SECTIONS_ATTRIBUTE, SectionDom, on_link_click,
};

fn main() {
    let mut dom = MemoryDom::new();
    let root = dom.root();

    let anchor = dom.create_in(root, PAGE_SECTION_CLASS);
    dom.set_top(anchor, 400.0);
    let marker = dom.create_in(anchor, "code-block");
    dom.set_attribute(&marker, MARKER_ATTRIBUTE, "true");
    dom.set_attribute(&marker, SECTIONS_ATTRIBUTE, "3");

    for (i, id) in ["intro", "pricing", "contact"].iter().enumerate() {
        let section = dom.create_in(root, PAGE_SECTION_CLASS);
        dom.set_width(section, 1000.0);
        dom.set_top(section, 1200.0 + 800.0 * i as f64);
        dom.set_attribute(&section, "id", id);
    }

    let mut registry = Registry::new(Defaults::default(), Viewport::new(1000.0, 800.0));
    registry.init_all(&mut dom);

    let target = on_link_click(&dom, &registry, "#pricing").expect("target inside a group");
    println!("scrolling to {:.1}", target.coordinate);

    let mut scroller = HashScroller::new();
    scroller.start(0.0, target, 0, 200, Easing::EaseInOutCubic);
    let mut now_ms = 0;
    while let Some(coordinate) = scroller.tick(now_ms) {
        registry.on_scroll(coordinate);
        registry.on_frame(&mut dom);
        println!("t={now_ms:>3}ms scroll={coordinate:.1}");
        now_ms += 40;
    }
}
