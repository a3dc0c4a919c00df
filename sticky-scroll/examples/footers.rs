// Example: horizontal scroll with trailing sticky labels and content insets.
use sticky_scroll::{
    Axis, EdgeSet, Insets, Point, Rect, ScrollGeometry, Size, StickyBehavior, StickyEdge,
    StickyOptions, StickyScroll,
};

fn main() {
    let opts = StickyOptions::new(Axis::Horizontal, StickyBehavior::Replace)
        .with_edges_ignoring_safe_area(EdgeSet::only(StickyEdge::TrailingEnd))
        .with_on_change(|s: &StickyScroll<&'static str>| {
            let stuck: Vec<_> = s.stuck().iter().map(|it| (it.key, it.opacity)).collect();
            println!("on_change: {stuck:?}");
        });
    let mut s = StickyScroll::new(opts);

    s.report_many([
        ("alpha", Rect::new(700.0, 0.0, 80.0, 200.0), StickyEdge::TrailingEnd),
        ("beta", Rect::new(1400.0, 0.0, 120.0, 200.0), StickyEdge::TrailingEnd),
        // Bogus frame from a half-finished layout: ignored.
        ("gamma", Rect::new(1800.0, 0.0, -1.0, 200.0), StickyEdge::TrailingEnd),
    ]);

    for x in [0.0, 300.0, 700.0, 1100.0] {
        s.restore_geometry(ScrollGeometry {
            axis: Axis::Horizontal,
            offset: Point::new(x, 0.0),
            content_size: Size::new(2400.0, 200.0),
            container_size: Size::new(500.0, 200.0),
            content_insets: Insets::new(0.0, 16.0, 0.0, 16.0),
        });
        for it in s.stuck() {
            let t = s.axis().translation(it.render_offset);
            println!("x={x}: {} translate=({}, {})", it.key, t.x, t.y);
        }
    }
}
