//! Handles into the semantic [`Pool`](crate::Pool).
//!
//! Every node kind lives in its own arena vector and is referenced by a
//! 32-bit index. Handles are `Copy` and never own what they point at;
//! the pool is dropped as a whole at the end of the compilation unit.
//!
//! Handle equality is *identity*, not structural equality. Types are always
//! hash-consed so the two coincide for [`TyId`]; vals may or may not be
//! interned, so compare them with [`Pool::vals_equal`](crate::Pool::vals_equal).

use std::fmt;

/// A 32-bit index into the pool's type table.
///
/// Primitive types have fixed indices so they can be named without a pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TyId(u32);

impl TyId {
    // === Primitive Types (indices 0-4) ===
    // Pre-interned at pool creation.

    /// The `int` type.
    pub const INT: Self = Self(0);
    /// The `float` type.
    pub const FLOAT: Self = Self(1);
    /// The `bool` type.
    pub const BOOL: Self = Self(2);
    /// The unit type `()`.
    pub const UNIT: Self = Self(3);
    /// The error type (placeholder for types that failed to check).
    pub const ERROR: Self = Self(4);

    /// Number of pre-interned primitive types.
    pub const PRIMITIVE_COUNT: u32 = 5;

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INT => write!(f, "TyId::INT"),
            Self::FLOAT => write!(f, "TyId::FLOAT"),
            Self::BOOL => write!(f, "TyId::BOOL"),
            Self::UNIT => write!(f, "TyId::UNIT"),
            Self::ERROR => write!(f, "TyId::ERROR"),
            _ => write!(f, "TyId({})", self.0),
        }
    }
}

/// Define a plain arena handle with `from_raw`/`raw` accessors.
macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $debug:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a handle from a raw u32 value.
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub(crate) const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($debug, "({})"), self.0)
            }
        }
    };
}

define_handle!(
    /// Handle to a declaration registered in the pool.
    DeclId,
    "DeclId"
);

define_handle!(
    /// Handle to a val (compile-time integer or subtype witness).
    ValId,
    "ValId"
);

define_handle!(
    /// Handle to one layer of a generic substitution context.
    LayerId,
    "LayerId"
);

/// Convert an arena length into the next handle index.
///
/// # Panics
/// Panics if the arena holds more than `u32::MAX` nodes.
#[inline]
pub(crate) fn next_index(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} arena exceeded u32::MAX entries"))
}

// Handles must stay 4 bytes; they are copied everywhere.
tern_ir::static_assert_size!(TyId, 4);
tern_ir::static_assert_size!(ValId, 4);

#[cfg(test)]
mod tests;
