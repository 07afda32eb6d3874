//! Structural hashing of vals, decl refs and types.
//!
//! Hashes are consistent with the pool's equality: structurally equal nodes
//! hash equally whether or not they share a handle. Each val and layer hash is
//! computed once at construction from the cached hashes of its children, so
//! none of the functions here recurse.
//!
//! # Strategy
//!
//! For each val:
//! 1. Hash `discriminant(kind)`
//! 2. Hash the `sub`/`sup` types of witnesses
//! 3. Hash variant data (literals, decl refs)
//! 4. Fold in the cached hash of every child val (content, not handle)
//!
//! Every `ErrorInt` hashes alike since all error ints are equal.

use std::hash::{Hash, Hasher};
use std::mem;

use rustc_hash::FxHasher;

use crate::{Arg, DeclId, DeclRef, Pool, SubstSet, TyId, ValId, ValKind};

/// Hash of the empty substitution set.
const EMPTY_SET_HASH: u64 = 0;

impl Pool {
    /// Structural hash of a val.
    #[inline]
    pub fn val_hash(&self, val: ValId) -> u64 {
        self.val_hashes[val.index()]
    }

    /// Structural hash of a type.
    ///
    /// Types are hash-consed, so this is also consistent with `TyId` equality.
    pub fn type_hash(&self, ty: TyId) -> u64 {
        let mut state = FxHasher::default();
        self.ty(ty).hash(&mut state);
        state.finish()
    }

    /// Structural hash of a decl ref: its declaration and its context.
    pub fn decl_ref_hash(&self, decl_ref: DeclRef) -> u64 {
        let mut state = FxHasher::default();
        self.hash_decl_ref_into(decl_ref, &mut state);
        state.finish()
    }

    /// Structural hash of a substitution set.
    #[inline]
    pub fn set_hash(&self, set: SubstSet) -> u64 {
        set.innermost()
            .map_or(EMPTY_SET_HASH, |layer| self.layer_hashes[layer.index()])
    }

    fn hash_decl_ref_into(&self, decl_ref: DeclRef, state: &mut FxHasher) {
        decl_ref.decl.raw().hash(state);
        self.set_hash(decl_ref.context).hash(state);
    }

    fn hash_type_into(&self, ty: TyId, state: &mut FxHasher) {
        self.type_hash(ty).hash(state);
    }

    /// Hash a val that may not be in the pool yet.
    pub(super) fn hash_val_kind(&self, kind: &ValKind) -> u64 {
        let mut state = FxHasher::default();
        mem::discriminant(kind).hash(&mut state);

        match *kind {
            ValKind::ConstantInt { value } => value.hash(&mut state),
            ValKind::GenericParamInt { decl_ref } => self.hash_decl_ref_into(decl_ref, &mut state),
            ValKind::ErrorInt => {}
            ValKind::TypeEquality { sub, sup } => {
                self.hash_type_into(sub, &mut state);
                self.hash_type_into(sup, &mut state);
            }
            ValKind::DeclaredSubtype { sub, sup, decl_ref }
            | ValKind::ExtractExistentialSubtype { sub, sup, decl_ref } => {
                self.hash_type_into(sub, &mut state);
                self.hash_type_into(sup, &mut state);
                self.hash_decl_ref_into(decl_ref, &mut state);
            }
            ValKind::TransitiveSubtype {
                sub,
                sup,
                sub_to_mid,
                mid_to_sup,
            } => {
                self.hash_type_into(sub, &mut state);
                self.hash_type_into(sup, &mut state);
                self.val_hash(sub_to_mid).hash(&mut state);
                self.hash_decl_ref_into(mid_to_sup, &mut state);
            }
            ValKind::TaggedUnionSubtype {
                sub,
                sup,
                ref case_witnesses,
            } => {
                self.hash_type_into(sub, &mut state);
                self.hash_type_into(sup, &mut state);
                case_witnesses.len().hash(&mut state);
                for &witness in case_witnesses.iter() {
                    self.val_hash(witness).hash(&mut state);
                }
            }
        }

        state.finish()
    }

    /// Hash a layer that is about to be pushed.
    pub(super) fn hash_layer(&self, generic: DeclId, args: &[Arg], outer: SubstSet) -> u64 {
        let mut state = FxHasher::default();
        generic.raw().hash(&mut state);
        args.len().hash(&mut state);
        for &arg in args {
            mem::discriminant(&arg).hash(&mut state);
            match arg {
                Arg::Type(ty) => self.hash_type_into(ty, &mut state),
                Arg::Val(val) => self.val_hash(val).hash(&mut state),
            }
        }
        self.set_hash(outer).hash(&mut state);
        state.finish()
    }
}
