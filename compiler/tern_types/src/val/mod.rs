//! Compile-time values and subtype witnesses.
//!
//! [`ValKind`] is the closed set of semantic values the checker builds:
//!
//! ```text
//! Val ─┬─ IntVal ──── ConstantInt | GenericParamInt | ErrorInt
//!      └─ Witness ─── SubtypeWitness { sub, sup }
//!                        ├─ TypeEquality
//!                        ├─ DeclaredSubtype
//!                        ├─ TransitiveSubtype
//!                        ├─ ExtractExistentialSubtype
//!                        └─ TaggedUnionSubtype
//! ```
//!
//! Every witness proves `sub <: sup` and carries both types inline; there is
//! no standalone `SubtypeWitness` node.
//!
//! A witness is a constructive proof. Given
//!
//! ```text
//! void example<L>(L light) where L : ILight { ... }
//! ```
//!
//! a call `example(x)` needs a type argument `X` for `L` *and* a witness that
//! `X : ILight`. Following the structure of the witness (through its decl
//! refs) leads from "X conforms to ILight" to the declarations implementing
//! `ILight` for `X`.

use crate::{DeclRef, TyId, ValId};

/// A semantic value node.
#[derive(Clone, Debug)]
pub enum ValKind {
    // === IntVal ===
    /// An integer literal.
    ConstantInt { value: i64 },
    /// Whatever value is eventually bound to a generic value parameter.
    GenericParamInt { decl_ref: DeclRef },
    /// An integer that could not be computed due to an earlier error.
    ///
    /// All error ints are equal to each other, so one failure does not cascade
    /// into unrelated mismatches.
    ErrorInt,

    // === SubtypeWitness ===
    /// `sub : sup` because they are the same type.
    TypeEquality { sub: TyId, sup: TyId },
    /// `sub : sup` because a declaration (conformance, inheritance, or
    /// generic constraint) says so.
    DeclaredSubtype {
        sub: TyId,
        sup: TyId,
        decl_ref: DeclRef,
    },
    /// `sub : sup` because `sub : mid` (nested witness) and `mid : sup`
    /// (declaration).
    TransitiveSubtype {
        sub: TyId,
        sup: TyId,
        sub_to_mid: ValId,
        mid_to_sup: DeclRef,
    },
    /// `sub : sup` because `sub` is the opened type of an existential value
    /// of type `sup`.
    ExtractExistentialSubtype {
        sub: TyId,
        sup: TyId,
        decl_ref: DeclRef,
    },
    /// `sub : sup` because `sub` is a tagged union and every case is a
    /// subtype of `sup`. Witnesses are in the union's declared case order.
    TaggedUnionSubtype {
        sub: TyId,
        sup: TyId,
        case_witnesses: Box<[ValId]>,
    },
}

impl ValKind {
    /// Check if this is an IntVal variant.
    pub fn is_int_val(&self) -> bool {
        matches!(
            self,
            ValKind::ConstantInt { .. } | ValKind::GenericParamInt { .. } | ValKind::ErrorInt
        )
    }

    /// Check if this is a subtype witness.
    pub fn is_witness(&self) -> bool {
        !self.is_int_val()
    }

    /// The `(sub, sup)` pair a witness proves; `None` for IntVals.
    pub fn subtype_pair(&self) -> Option<(TyId, TyId)> {
        match *self {
            ValKind::ConstantInt { .. } | ValKind::GenericParamInt { .. } | ValKind::ErrorInt => {
                None
            }
            ValKind::TypeEquality { sub, sup }
            | ValKind::DeclaredSubtype { sub, sup, .. }
            | ValKind::TransitiveSubtype { sub, sup, .. }
            | ValKind::ExtractExistentialSubtype { sub, sup, .. }
            | ValKind::TaggedUnionSubtype { sub, sup, .. } => Some((sub, sup)),
        }
    }

    /// Literal value of a constant int.
    pub fn as_constant_int(&self) -> Option<i64> {
        match *self {
            ValKind::ConstantInt { value } => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
