//! Generic substitution.
//!
//! Specializes a val (or type, or decl ref) under a [`SubstSet`]: every
//! generic parameter the set binds is replaced by its argument, and every
//! node containing a replaced node is rebuilt through the pool's
//! constructors. The walk is a fold:
//!
//! - nodes whose flags say they mention no parameter are returned as is;
//! - a node whose children all come back unchanged is returned as is, so an
//!   identity substitution allocates nothing;
//! - each binding that actually replaces something adds one to the caller's
//!   `diff` counter, so `diff == 0` means the result is the input.
//!
//! Type parameters are replaced by the bound type, value parameters by the
//! bound IntVal, and a declared witness whose declaration is a bound
//! constraint (`where L : ILight`) by the bound witness (`X : ILight`).
//!
//! Vals are folded under a [`DepthBudget`]; exceeding it aborts the whole
//! substitution with [`SubstError::DepthLimitExceeded`]. Types are finite and
//! acyclic by construction and only need the stack guard.

mod error;

pub use error::SubstError;

use smallvec::SmallVec;
use tern_stack::{ensure_sufficient_stack, DepthBudget};

use crate::{Arg, DeclId, DeclKind, DeclRef, Pool, SubstSet, TyId, TypeData, ValId, ValKind};

impl Pool {
    /// Substitute `set` into `val`, adding the number of bindings used to
    /// `diff`.
    ///
    /// On error `diff` is left untouched.
    #[tracing::instrument(level = "trace", skip_all, fields(val = val.raw()))]
    pub fn substitute_val(
        &mut self,
        val: ValId,
        set: SubstSet,
        diff: &mut u32,
    ) -> Result<ValId, SubstError> {
        let mut folder = Substituter::new(self, set);
        let result = folder.fold_val(val)?;
        *diff += folder.diff;
        Ok(result)
    }

    /// Substitute `set` into `val`, returning the result and how many
    /// bindings were used.
    pub fn substitute(&mut self, val: ValId, set: SubstSet) -> Result<(ValId, u32), SubstError> {
        let mut diff = 0;
        let result = self.substitute_val(val, set, &mut diff)?;
        Ok((result, diff))
    }

    /// Substitute `set` into a type.
    pub fn substitute_type(&mut self, ty: TyId, set: SubstSet, diff: &mut u32) -> TyId {
        let mut folder = Substituter::new(self, set);
        let result = folder.fold_type(ty);
        *diff += folder.diff;
        result
    }

    /// Substitute `set` into a decl ref's context, attaching the set's
    /// layers for enclosing generics the context leaves unspecialized.
    pub fn substitute_decl_ref(
        &mut self,
        decl_ref: DeclRef,
        set: SubstSet,
        diff: &mut u32,
    ) -> Result<DeclRef, SubstError> {
        let mut folder = Substituter::new(self, set);
        let result = folder.fold_decl_ref(decl_ref)?;
        *diff += folder.diff;
        Ok(result)
    }
}

/// One substitution pass.
struct Substituter<'p> {
    pool: &'p mut Pool,
    set: SubstSet,
    budget: DepthBudget,
    diff: u32,
}

impl<'p> Substituter<'p> {
    fn new(pool: &'p mut Pool, set: SubstSet) -> Self {
        let budget = DepthBudget::new(pool.config().subst.max_depth);
        Self {
            pool,
            set,
            budget,
            diff: 0,
        }
    }

    /// The argument the set binds to `param` at `occurrence`.
    ///
    /// Counts toward `diff` only if the argument is not the occurrence
    /// itself, so binding a parameter to itself leaves `diff` untouched.
    fn bound(&mut self, param: DeclId, occurrence: Arg) -> Option<Arg> {
        let arg = self.pool.lookup_param(self.set, param)?;
        if arg != occurrence {
            self.diff += 1;
        }
        Some(arg)
    }

    // === Types ===

    fn fold_type(&mut self, ty: TyId) -> TyId {
        if self.set.is_empty() || !self.pool.type_flags(ty).needs_subst() {
            return ty;
        }
        ensure_sufficient_stack(|| self.fold_type_inner(ty))
    }

    fn fold_type_inner(&mut self, ty: TyId) -> TyId {
        match self.pool.ty(ty).clone() {
            TypeData::Param(param) => match self.bound(param, Arg::Type(ty)) {
                Some(Arg::Type(bound)) => bound,
                _ => ty,
            },
            TypeData::Named { decl, args } => match self.fold_types(&args) {
                Some(args) => self.pool.named(decl, &args),
                None => ty,
            },
            TypeData::TaggedUnion(cases) => match self.fold_types(&cases) {
                Some(cases) => self.pool.tagged_union(&cases),
                None => ty,
            },
            TypeData::Int
            | TypeData::Float
            | TypeData::Bool
            | TypeData::Unit
            | TypeData::Error
            | TypeData::Opened(_) => ty,
        }
    }

    /// Fold a list of types; `None` if every element is unchanged.
    fn fold_types(&mut self, tys: &[TyId]) -> Option<SmallVec<[TyId; 4]>> {
        let folded: SmallVec<[TyId; 4]> = tys.iter().map(|&ty| self.fold_type(ty)).collect();
        (folded[..] != *tys).then_some(folded)
    }

    // === Vals ===

    fn fold_val(&mut self, val: ValId) -> Result<ValId, SubstError> {
        if self.set.is_empty() || !self.pool.val_flags(val).needs_subst() {
            return Ok(val);
        }

        if let Err(exceeded) = self.budget.enter() {
            tracing::debug!(
                val = val.raw(),
                limit = exceeded.limit,
                "substitution depth limit exceeded"
            );
            return Err(exceeded.into());
        }
        let result = ensure_sufficient_stack(|| self.fold_val_inner(val));
        self.budget.leave();
        result
    }

    fn fold_val_inner(&mut self, val: ValId) -> Result<ValId, SubstError> {
        let result = match self.pool.val(val).clone() {
            ValKind::ConstantInt { .. } | ValKind::ErrorInt => val,

            ValKind::GenericParamInt { decl_ref } => {
                if let Some(Arg::Val(bound)) = self.bound(decl_ref.decl, Arg::Val(val)) {
                    return Ok(bound);
                }
                let folded = self.fold_decl_ref(decl_ref)?;
                if folded == decl_ref {
                    val
                } else {
                    self.pool.generic_param_int(folded)
                }
            }

            ValKind::TypeEquality { sub, .. } => {
                let folded = self.fold_type(sub);
                if folded == sub {
                    val
                } else {
                    self.pool.type_equality_witness(folded)
                }
            }

            ValKind::DeclaredSubtype { sub, sup, decl_ref } => {
                let (new_sub, new_sup) = (self.fold_type(sub), self.fold_type(sup));
                if matches!(self.pool.decl(decl_ref.decl).kind, DeclKind::Constraint { .. }) {
                    if let Some(Arg::Val(bound)) = self.bound(decl_ref.decl, Arg::Val(val)) {
                        return Ok(bound);
                    }
                }
                let new_ref = self.fold_decl_ref(decl_ref)?;
                if new_sub == sub && new_sup == sup && new_ref == decl_ref {
                    val
                } else {
                    self.pool
                        .declared_subtype_witness(new_sub, new_sup, new_ref)
                }
            }

            ValKind::TransitiveSubtype {
                sub,
                sup,
                sub_to_mid,
                mid_to_sup,
            } => {
                let (new_sub, new_sup) = (self.fold_type(sub), self.fold_type(sup));
                let new_sub_to_mid = self.fold_val(sub_to_mid)?;
                let new_mid_to_sup = self.fold_decl_ref(mid_to_sup)?;
                if new_sub == sub
                    && new_sup == sup
                    && new_sub_to_mid == sub_to_mid
                    && new_mid_to_sup == mid_to_sup
                {
                    val
                } else {
                    self.pool.transitive_subtype_witness(
                        new_sub,
                        new_sup,
                        new_sub_to_mid,
                        new_mid_to_sup,
                    )
                }
            }

            ValKind::ExtractExistentialSubtype { sub, sup, decl_ref } => {
                let (new_sub, new_sup) = (self.fold_type(sub), self.fold_type(sup));
                let new_ref = self.fold_decl_ref(decl_ref)?;
                if new_sub == sub && new_sup == sup && new_ref == decl_ref {
                    val
                } else {
                    self.pool
                        .extract_existential_subtype_witness(new_sub, new_sup, new_ref)
                }
            }

            ValKind::TaggedUnionSubtype {
                sub,
                sup,
                case_witnesses,
            } => {
                let (new_sub, new_sup) = (self.fold_type(sub), self.fold_type(sup));
                let mut new_cases: SmallVec<[ValId; 4]> =
                    SmallVec::with_capacity(case_witnesses.len());
                for &witness in case_witnesses.iter() {
                    new_cases.push(self.fold_val(witness)?);
                }
                if new_sub == sub && new_sup == sup && new_cases[..] == case_witnesses[..] {
                    val
                } else {
                    self.pool
                        .tagged_union_subtype_witness(new_sub, new_sup, &new_cases)
                }
            }
        };

        if result != val {
            tracing::trace!(from = val.raw(), to = result.raw(), "rebuilt val");
        }
        Ok(result)
    }

    // === Decl Refs ===

    fn fold_decl_ref(&mut self, decl_ref: DeclRef) -> Result<DeclRef, SubstError> {
        if self.set.is_empty() || !self.pool.decl_ref_flags(decl_ref).needs_subst() {
            return Ok(decl_ref);
        }

        // Innermost first: (generic, args) for every layer the result keeps.
        let mut layers: SmallVec<[(DeclId, Box<[Arg]>); 2]> = SmallVec::new();
        let mut changed = false;

        for generic in self.pool.enclosing_generics(decl_ref.decl) {
            if let Some(layer) = self.pool.find_layer(decl_ref.context, generic) {
                let args = self.pool.layer(layer).args.clone();
                match self.fold_args(&args)? {
                    Some(folded) => {
                        changed = true;
                        layers.push((generic, folded));
                    }
                    None => layers.push((generic, args)),
                }
            } else if let Some(layer) = self.pool.find_layer(self.set, generic) {
                changed = true;
                self.diff += 1;
                layers.push((generic, self.pool.layer(layer).args.clone()));
            }
        }

        if !changed {
            return Ok(decl_ref);
        }

        let mut context = SubstSet::EMPTY;
        for (generic, args) in layers.into_iter().rev() {
            context = self.pool.bind(context, generic, &args);
        }
        Ok(DeclRef::new(decl_ref.decl, context))
    }

    /// Fold generic arguments; `None` if every argument is unchanged.
    fn fold_args(&mut self, args: &[Arg]) -> Result<Option<Box<[Arg]>>, SubstError> {
        let mut folded = Vec::with_capacity(args.len());
        for &arg in args {
            folded.push(match arg {
                Arg::Type(ty) => Arg::Type(self.fold_type(ty)),
                Arg::Val(val) => Arg::Val(self.fold_val(val)?),
            });
        }
        Ok((folded[..] != *args).then(|| folded.into_boxed_slice()))
    }
}
