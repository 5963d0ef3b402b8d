use super::*;
use crate::path::parse::parse_path;

#[test]
fn formats_one_command_per_segment() {
    let path = parse_path("M0,0 L1,0 L1,1 L0,1 Z").unwrap();
    assert_eq!(serialize_path(&path), "M0,0 L1,0 L1,1 L0,1 Z");
}

#[test]
fn curve_operands_keep_fixed_order() {
    let path = parse_path("M0,0 C0,1 1,1 1,0").unwrap();
    assert_eq!(serialize_path(&path), "M0,0 C0,1 1,1 1,0");
}

#[test]
fn round_trip_is_structural() {
    // Spacing may differ from the input; the re-parsed path may not.
    for s in [
        "M0,0 L1,0 L1,1 L0,1 Z",
        "M -1.5 , 2e2 L +0.25 -3",
        "M0.1234567890123,0 C0,1 1,1 1,0 Z",
        "M512,512 L100.25,0.125",
    ] {
        let parsed = parse_path(s).unwrap();
        let reparsed = parse_path(&serialize_path(&parsed)).unwrap();
        assert_eq!(parsed, reparsed, "round trip failed for {s:?}");
    }
}

#[test]
fn shape_serialization_delegates() {
    let shape = Shape::new(parse_path("M0,0 L2,3").unwrap());
    assert_eq!(serialize_shape(&shape), "M0,0 L2,3");
}
