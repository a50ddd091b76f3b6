// Example: a full lifecycle pass over an in-memory page.
use horizontalizer::{Defaults, Viewport};
use horizontalizer_adapter::{
    MARKER_ATTRIBUTE, MemoryDom, PAGE_SECTION_CLASS, Registry, SECTIONS_ATTRIBUTE, SectionDom,
    TRANSFORM_PROPERTY,
};

fn main() {
    let mut dom = MemoryDom::new();
    let root = dom.root();

    let anchor = dom.create_in(root, PAGE_SECTION_CLASS);
    dom.set_top(anchor, 400.0);
    let marker = dom.create_in(anchor, "code-block");
    dom.set_attribute(&marker, MARKER_ATTRIBUTE, "true");
    dom.set_attribute(&marker, SECTIONS_ATTRIBUTE, "3");

    for i in 0..3 {
        let section = dom.create_in(root, PAGE_SECTION_CLASS);
        dom.set_width(section, 1280.0);
        dom.set_top(section, 1200.0 + 720.0 * i as f64);
    }

    let mut registry = Registry::new(Defaults::new().with_overlap(0.1), Viewport::new(1280.0, 720.0));
    registry.subscribe(|event| println!("event: {event:?}"));
    let built = registry.init_all(&mut dom);
    println!("built {built} group(s)");

    let wrapper = *registry.instances()[0].wrapper();
    for s in [0.0, 1200.0, 1800.0, 2400.0, 3000.0, 4000.0] {
        registry.on_scroll(s);
        registry.on_frame(&mut dom);
        println!("s={s:>7.1} transform={:?}", dom.style(wrapper, TRANSFORM_PROPERTY));
    }

    registry.teardown_all(&mut dom);
    println!("torn down, instances={}", registry.len());
}
