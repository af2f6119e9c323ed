use chaos_math::core::traits::*;
use chaos_math::vector::*;

#[test]
fn three_four_five() {
    let v = Vector2::new(3.0, 4.0);
    assert_eq!(v.magnitude(), 5.0);
    let n = v.normalized();
    assert_eq!(n.x(), 0.6);
    assert_eq!(n.y(), 0.8);
}

#[test]
fn magnitude_matches_definition() {
    let cases = [
        (0.0, 0.0),
        (1.0, 0.0),
        (-2.5, 7.25),
        (1e-3, -4e3),
        (123.456, 0.001),
    ];
    for &(x, y) in cases.iter() {
        let v = Vector2::new(x, y);
        let expected: f64 = (x * x + y * y).sqrt();
        assert!(v.magnitude().fuzzy_eq(expected), "{} != {}", v.magnitude(), expected);
    }
}

#[test]
fn magnitude_is_never_cached() {
    let mut v = Vector2::new(3.0f32, 4.0);
    assert_eq!(v.magnitude(), 5.0);
    *v.x_mut() = 0.0;
    assert_eq!(v.magnitude(), 4.0);
    v.yx_mut().set(Vector2::new(12.0, 5.0));
    assert_eq!(v.magnitude(), 13.0);
    let mut xy = v.xy_mut();
    xy *= 2.0;
    assert_eq!(v.magnitude(), 26.0);
}

#[test]
fn normalized_has_unit_length() {
    let cases = [(1.0, 1.0), (-3.0, 0.5), (1e6, 2e6), (0.0, -0.25)];
    for &(x, y) in cases.iter() {
        let n = Vector2::new(x, y).normalized();
        assert!(n.magnitude().fuzzy_eq(1.0), "|{}| = {}", n, n.magnitude());
    }
}

#[test]
fn normalized_tracks_current_state() {
    let mut v = Vector2::new(2.0, 0.0);
    assert_eq!(v.normalized(), Vector2::new(1.0, 0.0));
    v.xy_mut().set(Vector2::new(0.0, -5.0));
    assert_eq!(v.normalized(), Vector2::new(0.0, -1.0));
}

#[test]
fn normalized_zero_float_vector_is_nan() {
    let n = Vector2::new(0.0f64, 0.0).normalized();
    assert!(n.x().is_nan());
    assert!(n.y().is_nan());
}

#[test]
#[should_panic]
fn normalized_zero_integer_vector_panics() {
    let _ = Vector2::new(0i32, 0).normalized();
}

#[test]
fn integer_magnitude_truncates() {
    assert_eq!(Vector2::new(3, 4).magnitude(), 5);
    assert_eq!(Vector2::new(2u16, 2).magnitude(), 2);
    assert_eq!(Vector2::new(3, 4).normalized(), Vector2::new(0, 0));
    assert_eq!(Vector2::new(0, 7).normalized(), Vector2::new(0, 1));
}

#[test]
fn bound_property_recomputes_on_each_get() {
    let mut v = Vector2::new(6.0, 8.0);
    {
        let magnitude = v.property::<Magnitude>();
        assert_eq!(magnitude.get(), 10.0);
        assert_eq!(magnitude.get(), 10.0);
        assert_eq!(magnitude.owner(), &Vector2::new(6.0, 8.0));
    }
    *v.y_mut() = 0.0;
    let magnitude = v.property::<Magnitude>();
    let normalized = v.property::<Normalized>();
    assert_eq!(magnitude.get(), 6.0);
    assert_eq!(normalized.get(), Vector2::new(1.0, 0.0));
}

#[test]
fn copied_property_stays_bound_to_its_owner() {
    let a = Vector2::new(3.0, 4.0);
    let b = Vector2::new(5.0, 12.0);
    let pa = a.property::<Magnitude>();
    let pa_copy = pa;
    let pb = Property::<_, Magnitude>::new(&b);
    assert_eq!(pa_copy.get(), 5.0);
    assert_eq!(pb.get(), 13.0);
    assert!(std::ptr::eq(pa.owner(), &a));
    assert!(std::ptr::eq(pa_copy.owner(), &a));
}

#[test]
fn property_over_swizzle_view() {
    let v = Vector2::new(0.0, 2.0);
    let yx = v.yx();
    assert_eq!(Property::<_, Magnitude>::new(&yx).get(), 2.0);
    assert_eq!(Normalized::compute(&yx), Vector2::new(1.0, 0.0));
}

#[test]
fn property_debug_shows_current_value() {
    let v = Vector2::new(3.0, 4.0);
    assert_eq!(format!("{:?}", v.property::<Magnitude>()), "Property(5.0)");
}
