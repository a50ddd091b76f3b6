// Example: minimal measurement + mapping sweep.
use horizontalizer::{GroupGeometry, ScrollMapper, Viewport, measure};

fn main() {
    let viewport = Viewport::new(1280.0, 720.0);
    let m = measure(GroupGeometry::new(3840.0, 900.0), viewport, 0.1, 0.1);
    println!("region={:?}", m.region);
    println!("reserved_height={}", m.reserved_height);

    let mut mapper = ScrollMapper::new(false);
    for s in (0..=3600).step_by(400) {
        let frame = mapper.step(s as f64, &m.region);
        println!(
            "s={s:>5} zone={:?} shift={:.1} crossing={:?}",
            frame.zone, frame.shift, frame.crossing
        );
    }
}
