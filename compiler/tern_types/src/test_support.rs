//! Shared fixtures for unit tests.

use tern_ir::StringInterner;

use crate::{Arg, DeclId, DeclRef, Pool, PoolConfig, SubstSet, TyId, ValId, ValInterning};

/// Both interning modes; every property must hold in each.
pub(crate) const MODES: [ValInterning; 2] = [ValInterning::Canonical, ValInterning::Distinct];

/// The `example<L, N>` scenario:
///
/// ```text
/// interface ILight;
/// struct X;
/// X : ILight;                               // x_light
/// void example<L, N : int>(L light) where L : ILight;   // l_light
/// ```
pub(crate) struct World {
    pub pool: Pool,
    pub names: StringInterner,
    pub i_light: DeclId,
    pub x: DeclId,
    pub x_light: DeclId,
    pub example: DeclId,
    pub l: DeclId,
    pub l_light: DeclId,
    pub n: DeclId,
    pub t_light: TyId,
    pub t_x: TyId,
    pub t_l: TyId,
    /// `X : ILight`
    pub w_x: ValId,
    /// `L : ILight`
    pub w_l: ValId,
    /// The value parameter `N`
    pub n_val: ValId,
}

impl World {
    pub fn new(interning: ValInterning) -> Self {
        Self::with_config(PoolConfig::default().with_interning(interning))
    }

    pub fn with_config(config: PoolConfig) -> Self {
        let names = StringInterner::new();
        let mut pool = Pool::with_config(config);

        let i_light = pool.interface(names.intern("ILight"), None);
        let x = pool.struct_decl(names.intern("X"), None);
        let t_light = pool.named(i_light, &[]);
        let t_x = pool.named(x, &[]);
        let x_light = pool.inheritance(names.intern("X_ILight"), None, t_x, t_light);

        let example = pool.generic(names.intern("example"), None);
        let l = pool.type_param(example, names.intern("L"));
        let t_l = pool.param_type(l);
        let l_light = pool.constraint(example, names.intern("L_ILight"), t_l, t_light);
        let n = pool.value_param(example, names.intern("N"), TyId::INT);

        let w_x = pool.declared_subtype_witness(t_x, t_light, DeclRef::unspecialized(x_light));
        let w_l = pool.declared_subtype_witness(t_l, t_light, DeclRef::unspecialized(l_light));
        let n_val = pool.generic_param_int(DeclRef::unspecialized(n));

        Self {
            pool,
            names,
            i_light,
            x,
            x_light,
            example,
            l,
            l_light,
            n,
            t_light,
            t_x,
            t_l,
            w_x,
            w_l,
            n_val,
        }
    }

    /// `example<X, N = value>` with `X : ILight` for the constraint.
    pub fn bind_x(&mut self, value: i64) -> SubstSet {
        let n = self.pool.constant_int(value);
        self.pool.bind(
            SubstSet::EMPTY,
            self.example,
            &[Arg::Type(self.t_x), Arg::Val(self.w_x), Arg::Val(n)],
        )
    }

    /// Register an interface with no parent.
    pub fn interface(&mut self, name: &str) -> TyId {
        let decl = self.pool.interface(self.names.intern(name), None);
        self.pool.named(decl, &[])
    }

    /// Register `sub : sup` and return its declaration.
    pub fn inherit(&mut self, sub: TyId, sup: TyId) -> DeclId {
        let name = self.names.intern("inherits");
        self.pool.inheritance(name, None, sub, sup)
    }

    /// `L : I0 : I1 : ... : In` as `len` nested transitive witnesses over
    /// the constraint witness `w_l`.
    pub fn generic_chain(&mut self, len: usize) -> ValId {
        let mut witness = self.w_l;
        let mut ty = self.t_light;
        for i in 0..len {
            let next = self.interface(&format!("I{i}"));
            let link = self.inherit(ty, next);
            witness = self.pool.transitive_subtype_witness(
                self.t_l,
                next,
                witness,
                DeclRef::unspecialized(link),
            );
            ty = next;
        }
        witness
    }
}
