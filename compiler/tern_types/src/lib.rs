//! Compile-time values, subtype witnesses and generic substitution for Tern.
//!
//! This crate is the semantic-value layer of the type checker:
//!
//! - **IntVals**: integer literals, references to generic value parameters,
//!   and an absorbing error value.
//! - **Subtype witnesses**: constructive proofs that `sub <: sup`, by type
//!   equality, a declaration, transitivity, existential opening, or case
//!   analysis over a tagged union.
//! - **Substitution**: specializing any of the above under a layered generic
//!   binding, with an identity fast path and a recursion depth budget.
//!
//! Everything lives in a [`Pool`] and is addressed by `Copy` handles.
//! Vals support structural equality ([`Pool::vals_equal`]), structural hashing
//! ([`Pool::val_hash`]), diagnostic formatting ([`Pool::format_val`]) and
//! substitution ([`Pool::substitute_val`]), whether or not the pool interns
//! them.

mod config;
mod decl;
mod decl_ref;
mod flags;
mod idx;
mod pool;
mod subst;
mod ty;
mod val;

#[cfg(test)]
mod test_support;

use std::sync::Once;

pub use config::{PoolConfig, SubstConfig, ValInterning, MAX_DEPTH_ENV};
pub use decl::{Decl, DeclKind};
pub use decl_ref::{Arg, DeclRef, SubstLayer, SubstSet};
pub use flags::NodeFlags;
pub use idx::{DeclId, LayerId, TyId, ValId};
pub use pool::Pool;
pub use subst::SubstError;
pub use ty::TypeData;
pub use val::ValKind;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tern_types=debug` or `RUST_LOG=tern_types=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

// A finished pool is shared read-only across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pool>();
};
