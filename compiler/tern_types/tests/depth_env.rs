//! `TERN_SUBST_MAX_DEPTH` reaches pools built with `Pool::new`.
//!
//! Lives in its own test binary so the variable never leaks into other tests.

use tern_types::{Pool, MAX_DEPTH_ENV};

#[test]
fn environment_limit_applies_to_new_pools() {
    std::env::set_var(MAX_DEPTH_ENV, "8");
    assert_eq!(Pool::new().config().subst.max_depth, 8);

    std::env::set_var(MAX_DEPTH_ENV, "not a number");
    assert_eq!(Pool::new().config().subst.max_depth, 256);

    std::env::remove_var(MAX_DEPTH_ENV);
    assert_eq!(Pool::new().config().subst.max_depth, 256);
}
