use super::*;

#[test]
fn primitive_indices_are_fixed() {
    assert_eq!(TyId::INT.raw(), 0);
    assert_eq!(TyId::FLOAT.raw(), 1);
    assert_eq!(TyId::BOOL.raw(), 2);
    assert_eq!(TyId::UNIT.raw(), 3);
    assert_eq!(TyId::ERROR.raw(), 4);
}

#[test]
fn debug_output() {
    assert_eq!(format!("{:?}", TyId::BOOL), "TyId::BOOL");
    assert_eq!(format!("{:?}", TyId::from_raw(40)), "TyId(40)");
    assert_eq!(format!("{:?}", ValId::from_raw(3)), "ValId(3)");
    assert_eq!(format!("{:?}", DeclId::from_raw(7)), "DeclId(7)");
}
