use super::*;
use crate::foundation::core::Viewport;
use crate::render::display_list::DrawSurface;

fn backend() -> CpuBackend {
    CpuBackend::new(RenderSettings {
        clear_rgba: Some([18, 20, 28, 255]),
    })
}

fn close(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= 2)
}

#[test]
fn empty_list_renders_clear_color() {
    let list = DisplayList::new(Viewport::new(16, 8));
    let frame = backend().render_list(&list).unwrap();
    assert_eq!((frame.width, frame.height), (16, 8));
    assert_eq!(frame.data.len(), 16 * 8 * 4);
    assert!(frame.premultiplied);
    assert!(close(frame.pixel(0, 0).unwrap(), [18, 20, 28, 255]));
    assert!(close(frame.pixel(15, 7).unwrap(), [18, 20, 28, 255]));
    assert!(frame.pixel(16, 0).is_none());
}

#[test]
fn filled_circle_covers_its_center_only() {
    let mut list = DisplayList::new(Viewport::new(64, 64));
    list.fill_circle(Point::new(32.0, 32.0), 10.0, Rgba8::WHITE);
    let frame = backend().render_list(&list).unwrap();
    let center = frame.pixel(32, 32).unwrap();
    assert!(center[0] > 240 && center[1] > 240 && center[2] > 240);
    assert!(close(frame.pixel(2, 2).unwrap(), [18, 20, 28, 255]));
}

#[test]
fn invisible_ops_are_skipped() {
    let mut list = DisplayList::new(Viewport::new(32, 32));
    list.fill_circle(Point::new(16.0, 16.0), 8.0, Rgba8::TRANSPARENT);
    list.stroke_line(Point::ZERO, Point::new(31.0, 31.0), 0.0, Rgba8::WHITE);
    let frame = backend().render_list(&list).unwrap();
    assert!(close(frame.pixel(16, 16).unwrap(), [18, 20, 28, 255]));
}

#[test]
fn gradients_are_cached_by_radius_and_stops() {
    let stops = vec![
        GradientStop::new(0.0, Rgba8::WHITE),
        GradientStop::new(1.0, Rgba8::TRANSPARENT),
    ];
    let mut list = DisplayList::new(Viewport::new(64, 64));
    list.radial_gradient(Point::new(20.0, 20.0), 10.0, stops.clone(), 1.0);
    list.radial_gradient(Point::new(40.0, 40.0), 10.0, stops.clone(), 0.5);
    list.radial_gradient(Point::new(40.0, 40.0), 12.0, stops, 1.0);

    let mut b = backend();
    let frame = b.render_list(&list).unwrap();
    assert_eq!(b.cached_gradients(), 2);
    let core = frame.pixel(20, 20).unwrap();
    assert!(core[0] > 200);
}

#[test]
fn zero_sized_surface_is_a_render_error() {
    let list = DisplayList::new(Viewport::new(0, 10));
    let err = backend().render_list(&list).unwrap_err();
    assert!(matches!(err, BackdropError::Render(_)));
}

#[test]
fn oversized_gradient_is_a_render_error() {
    let stops = vec![
        GradientStop::new(0.0, Rgba8::WHITE),
        GradientStop::new(1.0, Rgba8::TRANSPARENT),
    ];
    let mut list = DisplayList::new(Viewport::new(32, 32));
    list.radial_gradient(Point::new(16.0, 16.0), 1.0e9, stops, 1.0);

    let mut b = backend();
    let err = b.render_list(&list).unwrap_err();
    assert!(matches!(err, BackdropError::Render(_)));
    assert_eq!(b.cached_gradients(), 0);

    let err = b.gradient_paint(u32::MAX, &[]).unwrap_err();
    assert!(matches!(err, BackdropError::Render(_)));
}

#[test]
fn sample_stops_interpolates_and_clamps() {
    let stops = [
        GradientStop::new(0.0, Rgba8::new(255, 0, 0, 255)),
        GradientStop::new(1.0, Rgba8::new(255, 0, 0, 0)),
    ];
    assert_eq!(sample_stops(&stops, -1.0), Rgba8::new(255, 0, 0, 255));
    assert_eq!(sample_stops(&stops, 2.0), Rgba8::new(255, 0, 0, 0));
    let mid = sample_stops(&stops, 0.5);
    assert_eq!((mid.r, mid.a), (255, 128));
    assert_eq!(sample_stops(&[], 0.5), Rgba8::TRANSPARENT);
}
