// Example: reverse mode parks at the far end and travels back to the origin.
use horizontalizer::{Defaults, GroupGeometry, GroupOptions, GroupOverrides, ScrollMapper, Viewport, measure};

fn main() {
    let defaults = Defaults::new().with_overlap(0.1);
    let overrides = GroupOverrides {
        reverse: Some(true),
        ..GroupOverrides::default()
    };
    let options = GroupOptions::resolve(&defaults, &overrides);

    let viewport = Viewport::new(1000.0, 800.0);
    let m = measure(
        GroupGeometry::new(3000.0, 1200.0),
        viewport,
        options.overlap_start,
        options.overlap_end,
    );

    let mut mapper = ScrollMapper::new(options.reverse);
    for s in [0.0, m.region.start, (m.region.start + m.region.end) / 2.0, m.region.end, 9e3] {
        let frame = mapper.step(s, &m.region);
        println!("s={s:>7.1} zone={:?} shift={:.1}", frame.zone, frame.shift);
    }
}
