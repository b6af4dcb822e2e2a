use super::*;

#[test]
fn records_ops_in_draw_order() {
    let mut list = DisplayList::new(Viewport::new(64, 32));
    list.fill_circle(Point::new(1.0, 2.0), 3.0, Rgba8::WHITE);
    list.stroke_line(Point::ZERO, Point::new(4.0, 4.0), 0.5, Rgba8::BLACK);
    assert_eq!(list.len(), 2);
    assert!(matches!(list.ops()[0], DrawOp::FillCircle { .. }));
    assert!(matches!(list.ops()[1], DrawOp::StrokeLine { .. }));
}

#[test]
fn clear_and_resize_discard_ops() {
    let mut list = DisplayList::new(Viewport::new(64, 32));
    list.fill_circle(Point::new(1.0, 2.0), 3.0, Rgba8::WHITE);
    list.clear();
    assert!(list.is_empty());

    list.fill_circle(Point::new(1.0, 2.0), 3.0, Rgba8::WHITE);
    list.resize(Viewport::new(10, 10));
    assert!(list.is_empty());
    assert_eq!(list.viewport(), Viewport::new(10, 10));
}

#[test]
fn extend_appends_on_top() {
    let mut base = DisplayList::new(Viewport::new(8, 8));
    base.fill_circle(Point::new(1.0, 1.0), 1.0, Rgba8::WHITE);
    let mut top = DisplayList::new(Viewport::new(8, 8));
    top.radial_gradient(
        Point::new(4.0, 4.0),
        2.0,
        vec![GradientStop::new(0.0, Rgba8::WHITE)],
        1.0,
    );
    base.extend_from(&top);
    assert_eq!(base.len(), 2);
    assert!(matches!(base.ops()[1], DrawOp::RadialGradient { .. }));
}
