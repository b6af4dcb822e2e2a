use super::*;

#[test]
fn wrap_coord_is_toroidal() {
    assert_eq!(wrap_coord(5.0, 10.0), 5.0);
    assert!((wrap_coord(-0.25, 10.0) - 9.75).abs() < 1e-12);
    assert!((wrap_coord(10.25, 10.0) - 0.25).abs() < 1e-12);
    assert_eq!(wrap_coord(10.0, 10.0), 0.0);
    assert!((wrap_coord(-35.0, 10.0) - 5.0).abs() < 1e-12);
}

#[test]
fn wrap_coord_never_returns_extent() {
    let v = wrap_coord(-1e-18, 10.0);
    assert!((0.0..10.0).contains(&v));
}

#[test]
fn wrap_coord_degenerate_inputs() {
    assert_eq!(wrap_coord(3.0, 0.0), 0.0);
    assert_eq!(wrap_coord(f64::NAN, 10.0), 0.0);
}

#[test]
fn rng_is_deterministic_and_unit_bounded() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..1000 {
        let x = a.next_f64_01();
        assert_eq!(x, b.next_f64_01());
        assert!((0.0..1.0).contains(&x));
    }
}

#[test]
fn pulse_stays_in_unit_range() {
    for i in 0..100 {
        let v = pulse01(i as f64 * 0.37);
        assert!((0.0..=1.0).contains(&v));
    }
}
