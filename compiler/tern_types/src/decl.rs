//! Declarations referenced by types, vals and witnesses.
//!
//! Only what the semantic-value layer needs is recorded: a name for
//! diagnostics, the parent link used to find enclosing generics, and the
//! kind-specific payload.

use tern_ir::Name;

use crate::{DeclId, TyId};

/// A registered declaration.
#[derive(Clone, Debug)]
pub struct Decl {
    /// Declared name.
    pub name: Name,
    /// Lexically enclosing declaration, if any.
    pub parent: Option<DeclId>,
    /// What kind of declaration this is.
    pub kind: DeclKind,
}

/// Declaration kinds.
#[derive(Clone, Debug)]
pub enum DeclKind {
    /// A generic container. `params` lists its type parameters, value
    /// parameters and constraints in declaration order; a substitution layer
    /// for this generic binds one argument per entry.
    Generic { params: Vec<DeclId> },
    /// A generic type parameter.
    TypeParam,
    /// A generic value parameter of the given type.
    ValueParam { ty: TyId },
    /// A generic constraint `where sub : sup`, bound to a witness.
    Constraint { sub: TyId, sup: TyId },
    /// A struct type.
    Struct,
    /// An interface type.
    Interface,
    /// An explicit conformance or inheritance declaration `sub : sup`.
    Inheritance { sub: TyId, sup: TyId },
    /// A value of existential (interface) type `ty` that can be opened.
    ExistentialBinding { ty: TyId },
}

impl DeclKind {
    /// Check if this declaration is a parameter of its enclosing generic.
    pub fn is_generic_param(&self) -> bool {
        matches!(
            self,
            DeclKind::TypeParam | DeclKind::ValueParam { .. } | DeclKind::Constraint { .. }
        )
    }

    /// The `sub : sup` pair of a conformance-like declaration.
    pub fn subtype_pair(&self) -> Option<(TyId, TyId)> {
        match *self {
            DeclKind::Constraint { sub, sup } | DeclKind::Inheritance { sub, sup } => {
                Some((sub, sup))
            }
            _ => None,
        }
    }
}
