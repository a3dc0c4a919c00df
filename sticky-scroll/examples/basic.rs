// Example: sticky section headers in a vertical list, cross-fading as they hand off.
use sticky_scroll::{
    Axis, Point, Rect, Size, StickyBehavior, StickyEdge, StickyOptions, StickyScroll,
};

fn main() {
    let mut s = StickyScroll::<u64>::new(StickyOptions::new(Axis::Vertical, StickyBehavior::Fade));

    // A real UI would report these from its layout pass.
    s.batch_update(|s| {
        s.update_container_size(Size::new(320.0, 600.0));
        s.update_content_size(Size::new(320.0, 10.0 * 400.0));
        for i in 0..10u64 {
            s.report(
                i,
                Rect::new(0.0, i as f64 * 400.0, 320.0, 40.0),
                StickyEdge::LeadingStart,
            );
        }
    });

    for offset in [0.0, 150.0, 400.0, 410.0, 420.0, 430.0, 440.0, 900.0] {
        s.update_offset(Point::new(0.0, offset));
        print!("offset={offset:>6}:");
        for it in s.stuck() {
            print!(
                " [key={} role={:?} dy={} opacity={:.2}]",
                it.key, it.role, it.render_offset, it.opacity
            );
        }
        println!();
    }
}
