//! Serialization format tests, run with `--features serde`

#![cfg(feature = "serde")]

use pts_algebra::prelude::*;

#[test]
fn pts_serializes_as_bare_ticks() {
    let json = serde_json::to_string(&Pts::new(8_589_934_591)).unwrap();
    assert_eq!(json, "8589934591");

    let back: Pts = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Pts::MAX);
}

#[test]
fn bound_serializes_as_tagged_enum() {
    assert_eq!(
        serde_json::to_string(&PtsBound::PositiveInfinity).unwrap(),
        "\"PositiveInfinity\""
    );
    assert_eq!(
        serde_json::to_string(&PtsBound::from(Pts::new(5))).unwrap(),
        "{\"Finite\":5}"
    );

    let back: PtsBound = serde_json::from_str("\"NegativeInfinity\"").unwrap();
    assert_eq!(back, PtsBound::NegativeInfinity);
}
