//! Tern IR - shared identifier types.
//!
//! Declarations, generic parameters and diagnostics all refer to source names
//! through [`Name`], a 32-bit handle into a [`StringInterner`]. Comparing two
//! names is a single integer comparison.

mod interner;
mod name;

pub use interner::{InternError, StringInterner};
pub use name::Name;

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied handles.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

static_assert_size!(Name, 4);
