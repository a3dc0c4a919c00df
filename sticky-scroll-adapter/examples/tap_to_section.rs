// Example: tapping a stuck header asks the host to scroll to its section.
use sticky_scroll::{Axis, Point, Rect, Size, StickyBehavior, StickyEdge, StickyOptions};
use sticky_scroll_adapter::ScrollCoordinator;

fn main() {
    let mut c = ScrollCoordinator::<u32>::new(StickyOptions::new(
        Axis::Vertical,
        StickyBehavior::Replace,
    ));
    c.on_container_size(Size::new(320.0, 480.0));
    c.on_content_size(Size::new(320.0, 3000.0));
    for i in 0..6u32 {
        c.report_frame(
            i,
            Rect::new(0.0, i as f64 * 500.0, 320.0, 44.0),
            StickyEdge::LeadingStart,
        );
    }

    c.on_offset(Point::new(0.0, 1320.0));
    let stuck = c.stuck().primary(StickyEdge::LeadingStart).map(|p| p.key);
    println!("stuck header: {stuck:?}");

    if let Some(key) = stuck {
        c.tap(&key);
    }

    // Host event loop: drain the request, scroll the real view, report the new offset back.
    if let Some(request) = c.take_scroll_request() {
        println!("host scrolls to {:?}", request.target);
        c.on_offset(request.target);
    }
    for it in c.stuck() {
        println!("key={} dy={} opacity={}", it.key, it.render_offset, it.opacity);
    }
}
