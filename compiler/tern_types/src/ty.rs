//! Type representation stored in the pool.
//!
//! Types are the collaborator layer the witnesses talk about: the pool only
//! needs identity, hashing, formatting and substitution from them. Children
//! are referenced by [`TyId`], and every type is hash-consed, so two `TyId`s
//! are equal exactly when the types are structurally equal.

use crate::{DeclId, TyId};

/// Internal type representation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    // Primitives (pre-interned at fixed indices)
    /// Integer type.
    Int,
    /// Floating point type.
    Float,
    /// Boolean type.
    Bool,
    /// Unit type `()`.
    Unit,
    /// Error type (for error recovery).
    Error,

    /// A generic type parameter, e.g. `L` in `example<L>`.
    Param(DeclId),

    /// A struct or interface, with its type arguments.
    Named {
        /// The struct or interface declaration.
        decl: DeclId,
        /// Type arguments, empty for non-generic types.
        args: Box<[TyId]>,
    },

    /// A tagged union `A | B | C`. Case order is the declared order.
    TaggedUnion(Box<[TyId]>),

    /// The hidden concrete type of an opened existential binding.
    Opened(DeclId),
}

impl TypeData {
    /// Case types of a tagged union, `None` for every other type.
    pub fn union_cases(&self) -> Option<&[TyId]> {
        match self {
            TypeData::TaggedUnion(cases) => Some(cases),
            _ => None,
        }
    }
}
