//! Structural equality of vals, decl refs and substitution sets.
//!
//! Equality never assumes interning: identical handles are equal without
//! looking further, differing cached hashes are unequal, and everything else
//! is compared field by field.

use tern_stack::ensure_sufficient_stack;

use crate::{Arg, DeclRef, Pool, SubstSet, ValId, ValKind};

impl Pool {
    /// Check two vals for structural equality.
    pub fn vals_equal(&self, a: ValId, b: ValId) -> bool {
        if a == b {
            return true;
        }
        if self.val_hash(a) != self.val_hash(b) {
            return false;
        }
        ensure_sufficient_stack(|| self.kinds_equal(self.val(a), self.val(b)))
    }

    /// Check two decl refs for equality: same declaration under equal
    /// contexts.
    pub fn decl_refs_equal(&self, a: DeclRef, b: DeclRef) -> bool {
        a.decl == b.decl && self.sets_equal(a.context, b.context)
    }

    /// Check two substitution sets for structural equality, layer by layer.
    pub fn sets_equal(&self, a: SubstSet, b: SubstSet) -> bool {
        let (mut a, mut b) = (a, b);
        loop {
            if a == b {
                return true;
            }
            let (Some(la), Some(lb)) = (a.innermost(), b.innermost()) else {
                return false;
            };
            let (la, lb) = (self.layer(la), self.layer(lb));
            if la.generic != lb.generic
                || la.args.len() != lb.args.len()
                || !la
                    .args
                    .iter()
                    .zip(lb.args.iter())
                    .all(|(&x, &y)| self.args_equal(x, y))
            {
                return false;
            }
            a = la.outer;
            b = lb.outer;
        }
    }

    fn args_equal(&self, a: Arg, b: Arg) -> bool {
        match (a, b) {
            (Arg::Type(x), Arg::Type(y)) => x == y,
            (Arg::Val(x), Arg::Val(y)) => self.vals_equal(x, y),
            _ => false,
        }
    }

    /// Compare two val kinds, which need not be stored in the pool.
    pub(super) fn kinds_equal(&self, a: &ValKind, b: &ValKind) -> bool {
        match (a, b) {
            (ValKind::ConstantInt { value: x }, ValKind::ConstantInt { value: y }) => x == y,
            (
                ValKind::GenericParamInt { decl_ref: x },
                ValKind::GenericParamInt { decl_ref: y },
            ) => self.decl_refs_equal(*x, *y),
            (ValKind::ErrorInt, ValKind::ErrorInt) => true,
            (
                ValKind::TypeEquality { sub: s1, sup: p1 },
                ValKind::TypeEquality { sub: s2, sup: p2 },
            ) => s1 == s2 && p1 == p2,
            (
                ValKind::DeclaredSubtype {
                    sub: s1,
                    sup: p1,
                    decl_ref: r1,
                },
                ValKind::DeclaredSubtype {
                    sub: s2,
                    sup: p2,
                    decl_ref: r2,
                },
            )
            | (
                ValKind::ExtractExistentialSubtype {
                    sub: s1,
                    sup: p1,
                    decl_ref: r1,
                },
                ValKind::ExtractExistentialSubtype {
                    sub: s2,
                    sup: p2,
                    decl_ref: r2,
                },
            ) => s1 == s2 && p1 == p2 && self.decl_refs_equal(*r1, *r2),
            (
                ValKind::TransitiveSubtype {
                    sub: s1,
                    sup: p1,
                    sub_to_mid: w1,
                    mid_to_sup: r1,
                },
                ValKind::TransitiveSubtype {
                    sub: s2,
                    sup: p2,
                    sub_to_mid: w2,
                    mid_to_sup: r2,
                },
            ) => {
                s1 == s2 && p1 == p2 && self.vals_equal(*w1, *w2) && self.decl_refs_equal(*r1, *r2)
            }
            (
                ValKind::TaggedUnionSubtype {
                    sub: s1,
                    sup: p1,
                    case_witnesses: c1,
                },
                ValKind::TaggedUnionSubtype {
                    sub: s2,
                    sup: p2,
                    case_witnesses: c2,
                },
            ) => {
                s1 == s2
                    && p1 == p2
                    && c1.len() == c2.len()
                    && c1.iter().zip(c2.iter()).all(|(&x, &y)| self.vals_equal(x, y))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
