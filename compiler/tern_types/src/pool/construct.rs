//! Node construction for the Pool.
//!
//! Every constructor checks the invariants of the node it builds. A violated
//! invariant is a bug in the caller (the checker), not a user error, so
//! constructors panic instead of returning an error.

use tern_ir::Name;

use crate::idx::next_index;
use crate::{
    Arg, Decl, DeclId, DeclKind, DeclRef, LayerId, NodeFlags, Pool, SubstLayer, SubstSet, TyId,
    TypeData, ValId, ValKind,
};

impl Pool {
    // === Types ===

    /// Hash-cons a type, returning the existing handle for equal data.
    pub(super) fn intern_type(&mut self, data: TypeData) -> TyId {
        if let Some(&existing) = self.type_dedup.get(&data) {
            return existing;
        }

        let flags = self.compute_type_flags(&data);
        let id = TyId::from_raw(next_index(self.types.len(), "type"));
        self.type_dedup.insert(data.clone(), id);
        self.types.push(data);
        self.type_flags.push(flags);
        id
    }

    fn compute_type_flags(&self, data: &TypeData) -> NodeFlags {
        match data {
            TypeData::Int | TypeData::Float | TypeData::Bool | TypeData::Unit => {
                NodeFlags::empty()
            }
            TypeData::Error => NodeFlags::HAS_ERROR,
            TypeData::Param(_) => NodeFlags::HAS_TYPE_PARAM,
            TypeData::Named { args, .. } => self.union_type_flags(args),
            TypeData::TaggedUnion(cases) => self.union_type_flags(cases),
            TypeData::Opened(_) => NodeFlags::empty(),
        }
    }

    fn union_type_flags(&self, tys: &[TyId]) -> NodeFlags {
        tys.iter().fold(NodeFlags::empty(), |acc, &ty| {
            acc | self.type_flags(ty).propagated()
        })
    }

    /// Create the type of a generic type parameter.
    pub fn param_type(&mut self, param: DeclId) -> TyId {
        assert!(
            matches!(self.decl(param).kind, DeclKind::TypeParam),
            "param_type: {param:?} is not a type parameter"
        );
        self.intern_type(TypeData::Param(param))
    }

    /// Create a struct or interface type with the given type arguments.
    pub fn named(&mut self, decl: DeclId, args: &[TyId]) -> TyId {
        assert!(
            matches!(self.decl(decl).kind, DeclKind::Struct | DeclKind::Interface),
            "named: {decl:?} is not a struct or interface"
        );
        self.intern_type(TypeData::Named {
            decl,
            args: args.into(),
        })
    }

    /// Create a tagged union type. Case order is significant.
    pub fn tagged_union(&mut self, cases: &[TyId]) -> TyId {
        assert!(!cases.is_empty(), "tagged_union: a union needs at least one case");
        self.intern_type(TypeData::TaggedUnion(cases.into()))
    }

    /// Create the hidden concrete type of an opened existential binding.
    pub fn opened(&mut self, binding: DeclId) -> TyId {
        assert!(
            matches!(self.decl(binding).kind, DeclKind::ExistentialBinding { .. }),
            "opened: {binding:?} is not an existential binding"
        );
        self.intern_type(TypeData::Opened(binding))
    }

    // === Declarations ===

    fn add_decl(&mut self, name: Name, parent: Option<DeclId>, kind: DeclKind) -> DeclId {
        let id = DeclId::from_raw(next_index(self.decls.len(), "decl"));
        self.decls.push(Decl { name, parent, kind });
        id
    }

    /// Register a parameter and append it to its generic's parameter list.
    fn add_param(&mut self, generic: DeclId, name: Name, kind: DeclKind) -> DeclId {
        let id = DeclId::from_raw(next_index(self.decls.len(), "decl"));
        match &mut self.decls[generic.index()].kind {
            DeclKind::Generic { params } => params.push(id),
            _ => panic!("{generic:?} is not a generic declaration"),
        }
        self.decls.push(Decl {
            name,
            parent: Some(generic),
            kind,
        });
        id
    }

    /// Register a generic container with no parameters yet.
    pub fn generic(&mut self, name: Name, parent: Option<DeclId>) -> DeclId {
        self.add_decl(name, parent, DeclKind::Generic { params: Vec::new() })
    }

    /// Register a type parameter of `generic`.
    pub fn type_param(&mut self, generic: DeclId, name: Name) -> DeclId {
        self.add_param(generic, name, DeclKind::TypeParam)
    }

    /// Register a value parameter of `generic` with type `ty`.
    pub fn value_param(&mut self, generic: DeclId, name: Name, ty: TyId) -> DeclId {
        self.add_param(generic, name, DeclKind::ValueParam { ty })
    }

    /// Register a constraint `where sub : sup` of `generic`.
    pub fn constraint(&mut self, generic: DeclId, name: Name, sub: TyId, sup: TyId) -> DeclId {
        self.add_param(generic, name, DeclKind::Constraint { sub, sup })
    }

    /// Register a struct declaration.
    pub fn struct_decl(&mut self, name: Name, parent: Option<DeclId>) -> DeclId {
        self.add_decl(name, parent, DeclKind::Struct)
    }

    /// Register an interface declaration.
    pub fn interface(&mut self, name: Name, parent: Option<DeclId>) -> DeclId {
        self.add_decl(name, parent, DeclKind::Interface)
    }

    /// Register an explicit conformance `sub : sup`.
    pub fn inheritance(
        &mut self,
        name: Name,
        parent: Option<DeclId>,
        sub: TyId,
        sup: TyId,
    ) -> DeclId {
        self.add_decl(name, parent, DeclKind::Inheritance { sub, sup })
    }

    /// Register a binding of existential type `ty` that can be opened.
    pub fn existential_binding(&mut self, name: Name, parent: Option<DeclId>, ty: TyId) -> DeclId {
        self.add_decl(name, parent, DeclKind::ExistentialBinding { ty })
    }

    // === Substitution Layers ===

    /// Push a layer binding the parameters of `generic` on top of `outer`.
    ///
    /// `args` has one entry per parameter, in declaration order: a type for a
    /// type parameter, an IntVal for a value parameter, a witness for a
    /// constraint.
    pub fn bind(&mut self, outer: SubstSet, generic: DeclId, args: &[Arg]) -> SubstSet {
        let params = self.generic_params(generic);
        assert!(
            matches!(self.decl(generic).kind, DeclKind::Generic { .. }),
            "bind: {generic:?} is not a generic declaration"
        );
        assert_eq!(
            params.len(),
            args.len(),
            "bind: {generic:?} takes {} arguments",
            params.len()
        );
        for (&param, &arg) in params.iter().zip(args) {
            let ok = match (&self.decl(param).kind, arg) {
                (DeclKind::TypeParam, Arg::Type(_)) => true,
                (DeclKind::ValueParam { .. }, Arg::Val(val)) => self.val(val).is_int_val(),
                (DeclKind::Constraint { .. }, Arg::Val(val)) => self.val(val).is_witness(),
                _ => false,
            };
            assert!(ok, "bind: argument {arg:?} does not fit parameter {param:?}");
        }

        let flags = args
            .iter()
            .fold(self.set_flags(outer), |acc, &arg| acc | self.arg_flags(arg).propagated());
        let hash = self.hash_layer(generic, args, outer);
        let id = LayerId::from_raw(next_index(self.layers.len(), "layer"));
        self.layers.push(SubstLayer {
            generic,
            args: args.into(),
            outer,
        });
        self.layer_flags.push(flags);
        self.layer_hashes.push(hash);
        SubstSet::from_layer(id)
    }

    fn arg_flags(&self, arg: Arg) -> NodeFlags {
        match arg {
            Arg::Type(ty) => self.type_flags(ty),
            Arg::Val(val) => self.val_flags(val),
        }
    }

    // === Vals ===

    /// Add a val, reusing a structurally equal one in canonical mode.
    fn intern_val(&mut self, kind: ValKind) -> ValId {
        let hash = self.hash_val_kind(&kind);

        if self.interns_vals() {
            if let Some(bucket) = self.val_dedup.get(&hash) {
                if let Some(&existing) = bucket
                    .iter()
                    .find(|&&candidate| self.kinds_equal(self.val(candidate), &kind))
                {
                    tracing::trace!(val = existing.raw(), "val interning hit");
                    return existing;
                }
            }
        }

        let flags = self.compute_val_flags(&kind);
        let id = ValId::from_raw(next_index(self.vals.len(), "val"));
        self.vals.push(kind);
        self.val_flags.push(flags);
        self.val_hashes.push(hash);
        if self.interns_vals() {
            self.val_dedup.entry(hash).or_default().push(id);
        }
        id
    }

    fn compute_val_flags(&self, kind: &ValKind) -> NodeFlags {
        let witness = |sub: TyId, sup: TyId| {
            NodeFlags::IS_WITNESS
                | self.type_flags(sub).propagated()
                | self.type_flags(sup).propagated()
        };

        match kind {
            ValKind::ConstantInt { .. } => NodeFlags::empty(),
            ValKind::GenericParamInt { decl_ref } => self.decl_ref_flags(*decl_ref).propagated(),
            ValKind::ErrorInt => NodeFlags::HAS_ERROR,
            ValKind::TypeEquality { sub, sup } => witness(*sub, *sup),
            ValKind::DeclaredSubtype { sub, sup, decl_ref }
            | ValKind::ExtractExistentialSubtype { sub, sup, decl_ref } => {
                witness(*sub, *sup) | self.decl_ref_flags(*decl_ref).propagated()
            }
            ValKind::TransitiveSubtype {
                sub,
                sup,
                sub_to_mid,
                mid_to_sup,
            } => {
                witness(*sub, *sup)
                    | self.val_flags(*sub_to_mid).propagated()
                    | self.decl_ref_flags(*mid_to_sup).propagated()
            }
            ValKind::TaggedUnionSubtype {
                sub,
                sup,
                case_witnesses,
            } => case_witnesses.iter().fold(witness(*sub, *sup), |acc, &w| {
                acc | self.val_flags(w).propagated()
            }),
        }
    }

    /// Create an integer literal.
    pub fn constant_int(&mut self, value: i64) -> ValId {
        self.intern_val(ValKind::ConstantInt { value })
    }

    /// Create a reference to a generic value parameter.
    pub fn generic_param_int(&mut self, decl_ref: DeclRef) -> ValId {
        assert!(
            matches!(self.decl(decl_ref.decl).kind, DeclKind::ValueParam { .. }),
            "generic_param_int: {:?} is not a value parameter",
            decl_ref.decl
        );
        self.intern_val(ValKind::GenericParamInt { decl_ref })
    }

    /// Create an error integer.
    pub fn error_int(&mut self) -> ValId {
        self.intern_val(ValKind::ErrorInt)
    }

    /// Witness that `ty : ty`.
    pub fn type_equality_witness(&mut self, ty: TyId) -> ValId {
        self.intern_val(ValKind::TypeEquality { sub: ty, sup: ty })
    }

    /// Witness that `sub : sup` because `decl_ref` declares it.
    pub fn declared_subtype_witness(&mut self, sub: TyId, sup: TyId, decl_ref: DeclRef) -> ValId {
        assert!(
            self.decl(decl_ref.decl).kind.subtype_pair().is_some(),
            "declared_subtype_witness: {:?} declares no subtype relation",
            decl_ref.decl
        );
        self.intern_val(ValKind::DeclaredSubtype { sub, sup, decl_ref })
    }

    /// Witness that `sub : sup` by composing `sub : mid` with the declared
    /// `mid : sup`.
    ///
    /// The supertype proven by `sub_to_mid` must be the subtype side of the
    /// declaration `mid_to_sup` names, as seen under its context.
    pub fn transitive_subtype_witness(
        &mut self,
        sub: TyId,
        sup: TyId,
        sub_to_mid: ValId,
        mid_to_sup: DeclRef,
    ) -> ValId {
        assert!(
            self.val(sub_to_mid).is_witness(),
            "transitive_subtype_witness: {sub_to_mid:?} is not a witness"
        );
        let Some((declared_mid, _)) = self.decl(mid_to_sup.decl).kind.subtype_pair() else {
            panic!(
                "transitive_subtype_witness: {:?} declares no subtype relation",
                mid_to_sup.decl
            );
        };

        let mut scratch = 0;
        let mid = self.substitute_type(declared_mid, mid_to_sup.context, &mut scratch);
        assert_eq!(
            self.witness_sup(sub_to_mid),
            Some(mid),
            "transitive_subtype_witness: sub_to_mid does not end where mid_to_sup starts"
        );

        self.intern_val(ValKind::TransitiveSubtype {
            sub,
            sup,
            sub_to_mid,
            mid_to_sup,
        })
    }

    /// Witness that the opened type `sub` of an existential value is a
    /// subtype of its existential type `sup`.
    pub fn extract_existential_subtype_witness(
        &mut self,
        sub: TyId,
        sup: TyId,
        decl_ref: DeclRef,
    ) -> ValId {
        assert!(
            matches!(
                self.decl(decl_ref.decl).kind,
                DeclKind::ExistentialBinding { .. }
            ),
            "extract_existential_subtype_witness: {:?} is not an existential binding",
            decl_ref.decl
        );
        self.intern_val(ValKind::ExtractExistentialSubtype { sub, sup, decl_ref })
    }

    /// Witness that the tagged union `sub` is a subtype of `sup` because
    /// every case is. `case_witnesses` follows the union's case order.
    pub fn tagged_union_subtype_witness(
        &mut self,
        sub: TyId,
        sup: TyId,
        case_witnesses: &[ValId],
    ) -> ValId {
        let Some(cases) = self.ty(sub).union_cases() else {
            panic!("tagged_union_subtype_witness: {sub:?} is not a tagged union");
        };
        assert_eq!(
            cases.len(),
            case_witnesses.len(),
            "tagged_union_subtype_witness: one witness per case required"
        );
        for &witness in case_witnesses {
            assert!(
                self.val(witness).is_witness() && self.witness_sup(witness) == Some(sup),
                "tagged_union_subtype_witness: {witness:?} does not prove a case is a subtype of {sup:?}"
            );
        }

        self.intern_val(ValKind::TaggedUnionSubtype {
            sub,
            sup,
            case_witnesses: case_witnesses.into(),
        })
    }
}
