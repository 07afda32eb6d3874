use super::*;
use pretty_assertions::assert_eq;

#[test]
fn intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn len_counts_distinct_strings() {
    let interner = StringInterner::new();
    interner.intern("ILight");
    interner.intern("ILight");
    interner.intern("L");
    assert_eq!(interner.len(), 3);
    assert!(!interner.is_empty());
}

#[test]
fn concurrent_readers_see_same_names() {
    let interner = StringInterner::new();
    let light = interner.intern("ILight");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(interner.intern("ILight"), light);
                assert_eq!(interner.lookup(light), "ILight");
            });
        }
    });
}
