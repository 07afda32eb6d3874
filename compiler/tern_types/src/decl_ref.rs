//! Declaration references and layered substitution contexts.
//!
//! A [`DeclRef`] is a declaration viewed under a generic substitution
//! context: `IFoo<T>.inherits(IBase<T>)` seen from `IFoo<int>` is a different
//! reference than the same declaration seen unspecialized. Contexts are
//! chains of [`SubstLayer`]s stored in the pool, innermost layer first.

use crate::{DeclId, LayerId, TyId, ValId};

/// A generic argument: a type, or a val (IntVal for value parameters,
/// witness for constraints).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arg {
    Type(TyId),
    Val(ValId),
}

/// A layered mapping from generic parameters to arguments.
///
/// Points at the innermost layer; each layer links to its outer one.
/// Lookups walk innermost to outermost, so an inner binding shadows an outer
/// binding of the same generic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SubstSet(Option<LayerId>);

impl SubstSet {
    /// The set binding nothing.
    pub const EMPTY: Self = Self(None);

    #[inline]
    pub(crate) const fn from_layer(layer: LayerId) -> Self {
        Self(Some(layer))
    }

    /// The innermost layer, if any.
    #[inline]
    pub const fn innermost(self) -> Option<LayerId> {
        self.0
    }

    /// Check if this set binds nothing.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }
}

/// One layer of a substitution set: the arguments for one generic.
#[derive(Clone, Debug)]
pub struct SubstLayer {
    /// The generic whose parameters this layer binds.
    pub generic: DeclId,
    /// One argument per entry of the generic's parameter list.
    pub args: Box<[Arg]>,
    /// The enclosing layers.
    pub outer: SubstSet,
}

/// A reference to a declaration paired with its substitution context.
///
/// Two references to the same declaration under different contexts are
/// different references. Compare with
/// [`Pool::decl_refs_equal`](crate::Pool::decl_refs_equal): contexts may hold
/// vals, which are compared structurally.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclRef {
    /// The referenced declaration.
    pub decl: DeclId,
    /// The generic context the declaration is viewed under.
    pub context: SubstSet,
}

impl DeclRef {
    /// Reference `decl` in its own, unspecialized context.
    pub const fn unspecialized(decl: DeclId) -> Self {
        Self {
            decl,
            context: SubstSet::EMPTY,
        }
    }

    /// Reference `decl` under `context`.
    pub const fn new(decl: DeclId, context: SubstSet) -> Self {
        Self { decl, context }
    }
}
