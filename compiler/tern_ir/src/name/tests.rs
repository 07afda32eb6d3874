use super::*;
use pretty_assertions::assert_eq;

#[test]
fn raw_round_trip() {
    let name = Name::from_raw(42);
    assert_eq!(name.raw(), 42);
    assert_eq!(name.index(), 42);
}

#[test]
fn default_is_empty() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert_eq!(format!("{:?}", Name::EMPTY), "Name(0)");
}

#[test]
fn ordering_follows_raw_index() {
    assert!(Name::from_raw(1) < Name::from_raw(2));
}
