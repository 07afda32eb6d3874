use super::*;
use crate::DeclId;

#[test]
fn int_val_classification() {
    let param = ValKind::GenericParamInt {
        decl_ref: DeclRef::unspecialized(DeclId::from_raw(0)),
    };
    assert!(ValKind::ConstantInt { value: 3 }.is_int_val());
    assert!(param.is_int_val());
    assert!(ValKind::ErrorInt.is_int_val());
    assert!(!ValKind::ErrorInt.is_witness());
}

#[test]
fn witness_subtype_pair() {
    let eq = ValKind::TypeEquality {
        sub: TyId::INT,
        sup: TyId::INT,
    };
    assert!(eq.is_witness());
    assert_eq!(eq.subtype_pair(), Some((TyId::INT, TyId::INT)));
    assert_eq!(ValKind::ConstantInt { value: 1 }.subtype_pair(), None);
}

#[test]
fn constant_int_accessor() {
    assert_eq!(ValKind::ConstantInt { value: -7 }.as_constant_int(), Some(-7));
    assert_eq!(ValKind::ErrorInt.as_constant_int(), None);
}
