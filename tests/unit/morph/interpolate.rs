use super::*;
use crate::{morph::resolve::resolve, path::parse::parse_path, path::serialize::serialize_shape};

fn shape(s: &str) -> Shape {
    Shape::new(parse_path(s).unwrap())
}

fn square_map() -> CorrespondenceMap {
    // Unit square and the same square scaled by 3 about the origin.
    let source = shape("M0,0 L1,0 L1,1 L0,1 Z");
    let target = shape("M0,0 L3,0 L3,3 L0,3 Z");
    resolve(&source, &target).unwrap()
}

#[test]
fn linear_blend_is_exact_for_scaled_squares() {
    let map = square_map();

    // s + t*(3s - s) = s*(1 + 2t): quarter way is exactly 1.5x the source,
    // halfway exactly 2x.
    let quarter = map.at(0.25).unwrap();
    assert_eq!(serialize_shape(&quarter), "M0,0 L1.5,0 L1.5,1.5 L0,1.5 Z");
    let half = map.at(0.5).unwrap();
    assert_eq!(serialize_shape(&half), "M0,0 L2,0 L2,2 L0,2 Z");
}

#[test]
fn identity_morph_returns_the_shape_for_every_t() {
    let s = shape("M0.1,0.2 C0.3,0.4 0.5,0.6 0.7,0.8 Z");
    let map = resolve(&s, &s).unwrap();
    for t in [0.0, 0.3, 0.5, 0.7, 1.0] {
        assert_eq!(map.at(t).unwrap(), s);
    }
}

#[test]
fn endpoints_reproduce_sides_exactly() {
    let map = square_map();
    assert_eq!(&map.at(0.0).unwrap(), map.source());
    assert_eq!(&map.at(1.0).unwrap(), map.target());
}

#[test]
fn clamp_policy_pins_out_of_range_t() {
    let map = square_map();
    let opts = BlendOptions::default();
    assert_eq!(&interpolate(&map, -0.5, &opts).unwrap(), map.source());
    assert_eq!(&interpolate(&map, 1.5, &opts).unwrap(), map.target());
}

#[test]
fn reject_policy_refuses_out_of_range_t() {
    let map = square_map();
    let opts = BlendOptions {
        policy: TimePolicy::Reject,
        ease: Ease::Linear,
    };
    assert!(matches!(
        interpolate(&map, 1.5, &opts),
        Err(MorphError::Validation(_))
    ));
    assert!(interpolate(&map, 1.0, &opts).is_ok());
}

#[test]
fn extrapolate_policy_continues_the_blend() {
    let map = square_map();
    let opts = BlendOptions {
        policy: TimePolicy::Extrapolate,
        ease: Ease::Linear,
    };
    // s*(1 + 2t) at t=2 is 5x the source.
    let shape = interpolate(&map, 2.0, &opts).unwrap();
    assert_eq!(serialize_shape(&shape), "M0,0 L5,0 L5,5 L0,5 Z");
}

#[test]
fn non_finite_t_is_a_geometry_error() {
    let map = square_map();
    for t in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            map.at(t),
            Err(MorphError::Geometry(GeometryError::NonFiniteValue { .. }))
        ));
    }
}

#[test]
fn overflowing_extrapolation_is_a_geometry_error() {
    // s + t*(0 - s) = s*(1 - t): at t=3 this is -2e308, past f64::MAX.
    let source = shape("M0,0 L1e308,0");
    let target = shape("M0,0 L0,0");
    let map = resolve(&source, &target).unwrap();
    let opts = BlendOptions {
        policy: TimePolicy::Extrapolate,
        ease: Ease::Linear,
    };
    assert!(matches!(
        interpolate(&map, 3.0, &opts),
        Err(MorphError::Geometry(GeometryError::NonFiniteValue { .. }))
    ));
    // In range the same map blends fine.
    assert!(interpolate(&map, 0.5, &opts).is_ok());
}

#[test]
fn easing_remaps_t_but_keeps_endpoints() {
    let map = square_map();
    let opts = BlendOptions {
        policy: TimePolicy::Clamp,
        ease: Ease::SmoothStep,
    };
    assert_eq!(&interpolate(&map, 0.0, &opts).unwrap(), map.source());
    assert_eq!(&interpolate(&map, 1.0, &opts).unwrap(), map.target());
    // Smoothstep fixes 0.5 but bends 0.25 toward the source.
    assert_eq!(
        interpolate(&map, 0.5, &opts).unwrap(),
        map.at(0.5).unwrap()
    );
    let eased = interpolate(&map, 0.25, &opts).unwrap();
    assert_eq!(eased, map.at(Ease::SmoothStep.apply(0.25)).unwrap());
}

#[test]
fn curve_control_points_blend_positionally() {
    let source = shape("M0,0 C0,2 2,2 2,0");
    let target = shape("M0,0 C0,4 4,4 4,0");
    let map = resolve(&source, &target).unwrap();
    let mid = map.at(0.5).unwrap();
    assert_eq!(serialize_shape(&mid), "M0,0 C0,3 3,3 3,0");
}
