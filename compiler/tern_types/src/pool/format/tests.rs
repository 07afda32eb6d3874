use super::*;
use crate::test_support::World;
use crate::ValInterning;
use pretty_assertions::assert_eq;

#[test]
fn format_primitives() {
    let world = World::new(ValInterning::Canonical);
    let fmt = |ty| world.pool.format_type(ty, &world.names);

    assert_eq!(fmt(TyId::INT), "int");
    assert_eq!(fmt(TyId::FLOAT), "float");
    assert_eq!(fmt(TyId::BOOL), "bool");
    assert_eq!(fmt(TyId::UNIT), "()");
    assert_eq!(fmt(TyId::ERROR), "<error>");
}

#[test]
fn format_compound_types() {
    let mut world = World::new(ValInterning::Canonical);
    let list = world.pool.struct_decl(world.names.intern("List"), None);
    let list_l = world.pool.named(list, &[world.t_l]);
    let union = world.pool.tagged_union(&[world.t_x, list_l]);
    let binding = world
        .pool
        .existential_binding(world.names.intern("light"), None, world.t_light);
    let opened = world.pool.opened(binding);

    assert_eq!(world.pool.format_type(list_l, &world.names), "List<L>");
    assert_eq!(world.pool.format_type(union, &world.names), "X | List<L>");
    assert_eq!(world.pool.format_type(opened, &world.names), "open(light)");
}

#[test]
fn format_int_vals() {
    let mut world = World::new(ValInterning::Canonical);
    let five = world.pool.constant_int(-5);
    let error = world.pool.error_int();

    assert_eq!(world.pool.format_val(five, &world.names), "-5");
    assert_eq!(world.pool.format_val(world.n_val, &world.names), "N");
    assert_eq!(world.pool.format_val(error, &world.names), "<error>");
}

#[test]
fn format_witnesses() {
    let mut world = World::new(ValInterning::Canonical);
    let eq = world.pool.type_equality_witness(world.t_x);
    let t_y = world.interface("Y");
    let y_light = world.inherit(t_y, world.t_light);
    let w_y = world
        .pool
        .declared_subtype_witness(t_y, world.t_light, DeclRef::unspecialized(y_light));
    let union = world.pool.tagged_union(&[world.t_x, t_y]);
    let by_cases = world
        .pool
        .tagged_union_subtype_witness(union, world.t_light, &[world.w_x, w_y]);

    assert_eq!(world.pool.format_val(eq, &world.names), "TypeEqualityWitness(X)");
    assert_eq!(
        world.pool.format_val(world.w_x, &world.names),
        "DeclaredSubtypeWitness(X, ILight, X_ILight)"
    );
    assert_eq!(
        world.pool.format_val(by_cases, &world.names),
        "TaggedUnionSubtypeWitness(X | Y, ILight, [DeclaredSubtypeWitness(X, ILight, X_ILight), \
         DeclaredSubtypeWitness(Y, ILight, inherits)])"
    );
}

#[test]
fn format_transitive_witness() {
    let mut world = World::new(ValInterning::Canonical);
    let t_base = world.interface("IBase");
    let light_base = world.inherit(world.t_light, t_base);
    let w = world.pool.transitive_subtype_witness(
        world.t_x,
        t_base,
        world.w_x,
        DeclRef::unspecialized(light_base),
    );

    assert_eq!(
        world.pool.format_val(w, &world.names),
        "TransitiveSubtypeWitness(DeclaredSubtypeWitness(X, ILight, X_ILight), inherits)"
    );
}

#[test]
fn format_decl_ref_with_context() {
    let mut world = World::new(ValInterning::Canonical);
    let set = world.bind_x(5);
    let specialized = DeclRef::new(world.l_light, set);

    assert_eq!(
        world
            .pool
            .format_decl_ref(DeclRef::unspecialized(world.l_light), &world.names),
        "L_ILight"
    );
    assert_eq!(
        world.pool.format_decl_ref(specialized, &world.names),
        "L_ILight<X, DeclaredSubtypeWitness(X, ILight, X_ILight), 5>"
    );
}

#[test]
fn format_deep_chain() {
    let mut world = World::new(ValInterning::Canonical);
    let chain = world.generic_chain(20_000);

    let text = world.pool.format_val(chain, &world.names);
    assert!(text.starts_with("TransitiveSubtypeWitness(TransitiveSubtypeWitness("));
    assert!(text.ends_with(", inherits), inherits)"));
    assert_eq!(text.matches("TransitiveSubtypeWitness(").count(), 20_000);
    assert_eq!(text.matches("DeclaredSubtypeWitness(L, ILight, L_ILight)").count(), 1);
}
