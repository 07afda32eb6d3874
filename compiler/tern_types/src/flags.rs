//! Pre-computed node metadata flags.
//!
//! `NodeFlags` are computed once when a type, val, or substitution layer is
//! built and cached next to it, so substitution can skip whole subtrees that
//! mention no generic parameter without walking them.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed properties of a type, val, or substitution layer.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct NodeFlags: u32 {
        // === Presence Flags ===

        /// Mentions a generic type parameter.
        const HAS_TYPE_PARAM = 1 << 0;
        /// Mentions a generic value parameter.
        const HAS_VALUE_PARAM = 1 << 1;
        /// Refers to a generic constraint (`where L : I`).
        const HAS_CONSTRAINT = 1 << 2;
        /// Holds a decl ref to a declaration nested inside a generic.
        const HAS_GENERIC_DECL_REF = 1 << 3;
        /// Contains an error type or error value.
        const HAS_ERROR = 1 << 4;

        // === Category Flags ===

        /// Node is a subtype witness.
        const IS_WITNESS = 1 << 8;

        /// Any flag that makes substitution potentially non-trivial.
        const NEEDS_SUBST = Self::HAS_TYPE_PARAM.bits()
            | Self::HAS_VALUE_PARAM.bits()
            | Self::HAS_CONSTRAINT.bits()
            | Self::HAS_GENERIC_DECL_REF.bits();
    }
}

impl NodeFlags {
    /// Flags that propagate from a child to every node containing it.
    const PROPAGATED: Self = Self::NEEDS_SUBST.union(Self::HAS_ERROR);

    /// Check whether substitution may change this node.
    #[inline]
    pub fn needs_subst(self) -> bool {
        self.intersects(Self::NEEDS_SUBST)
    }

    /// Check whether this node contains an error.
    #[inline]
    pub fn has_errors(self) -> bool {
        self.contains(Self::HAS_ERROR)
    }

    /// The subset of `self` a parent node inherits.
    #[inline]
    #[must_use]
    pub fn propagated(self) -> Self {
        self.intersection(Self::PROPAGATED)
    }
}
