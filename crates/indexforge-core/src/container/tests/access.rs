use super::*;

#[test]
fn test_mutable_implicit_creation_scenario() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .mutable(true)
        .build()
        .unwrap();
    assert_eq!(c.len(), 0);

    c.set(2, 5).unwrap();
    assert_eq!(c.len(), 1);
    assert_eq!(c.lookup(2).unwrap(), &Entry::from(5));
    assert!(c.is_constructed());

    c.lookup(1).unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.get(1), Some(&Entry::Unconstructed));

    c.lookup(1).unwrap();
    assert_eq!(c.len(), 2);
}

#[test]
fn test_mutable_lookup_uses_default() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .mutable(true)
        .default(1.5)
        .build()
        .unwrap();
    assert_eq!(c.lookup(3).unwrap(), &Entry::from(1.5));
    assert_eq!(c.len(), 1);
}

#[test]
fn test_mutable_iterates_in_insertion_order() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .mutable(true)
        .build()
        .unwrap();
    c.set(3, 1).unwrap();
    c.set(1, 1).unwrap();
    c.lookup(2).unwrap();
    assert_eq!(
        keys(&c),
        vec![IndexKey::Int(3), IndexKey::Int(1), IndexKey::Int(2)]
    );
}

#[test]
fn test_mutable_rejects_non_members() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .mutable(true)
        .build()
        .unwrap();
    assert!(matches!(c.lookup(9), Err(ComponentError::Index { .. })));
    assert!(matches!(c.set(9, 1), Err(ComponentError::Index { .. })));
    assert_eq!(c.len(), 0);
}

#[test]
fn test_mutable_lookup_constructs_lazily() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .mutable(true)
        .initialize([(1, 10)])
        .build()
        .unwrap();
    assert_eq!(c.state(), ConstructionState::Declared);
    assert_eq!(c.lookup(1).unwrap(), &Entry::from(10));
    assert!(c.is_constructed());
}

#[test]
fn test_immutable_set_is_rejected() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .initialize([(1, 1.0)])
        .build()
        .unwrap();
    c.construct().unwrap();

    let err = c.set(1, 2.0).unwrap_err();
    assert!(matches!(err, ComponentError::Immutable { .. }));
    let err = c.set(2, 2.0).unwrap_err();
    assert!(matches!(err, ComponentError::Immutable { .. }));
    assert_eq!(c.len(), 1);
    assert_eq!(c.get(1), Some(&Entry::from(1.0)));
}

#[test]
fn test_immutable_lookup_missing_is_key_error() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .default(0.0)
        .build()
        .unwrap();
    c.construct().unwrap();

    assert!(matches!(c.lookup(2), Err(ComponentError::Missing { .. })));
    assert!(matches!(c.lookup(7), Err(ComponentError::Index { .. })));
    assert_eq!(c.get_or_default(2), Some(&Entry::from(0.0)));
    assert_eq!(c.get_or_default(7), None);
    assert_eq!(c.len(), 0);
}

#[test]
fn test_add_materializes_and_keeps_index_order() {
    let mut c = IndexedContainer::builder("p", one_two_three()).build().unwrap();
    c.construct().unwrap();

    c.add(3, "c").unwrap();
    c.add(1, "a").unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(keys(&c), vec![IndexKey::Int(1), IndexKey::Int(3)]);
}

#[test]
fn test_add_slots_into_index_order() {
    let mut c = IndexedContainer::builder("p", IndexSet::range(0, 6))
        .build()
        .unwrap();
    for i in [4, 0, 5, 2, 1] {
        c.add(i, i).unwrap();
    }
    let expected: Vec<IndexKey> = [0, 1, 2, 4, 5].into_iter().map(IndexKey::Int).collect();
    assert_eq!(keys(&c), expected);

    c.construct().unwrap();
    c.add(3, 3).unwrap();
    assert_eq!(keys(&c), (0..6).map(IndexKey::Int).collect::<Vec<_>>());
}

#[test]
fn test_add_drops_repeated_set_members() {
    let mut c = IndexedContainer::scalar("s")
        .kind(ComponentKind::Set)
        .requires_initial_value(false)
        .build()
        .unwrap();
    let raw = Value::Set(vec![Value::from("a"), Value::from("a"), Value::from("b")]);
    c.add(IndexKey::Scalar, raw).unwrap();
    assert_eq!(c.len(), 2);
}

#[test]
fn test_add_duplicate_and_non_member() {
    let mut c = IndexedContainer::builder("p", one_two_three()).build().unwrap();
    c.add(1, 1).unwrap();

    let err = c.add(1, 2).unwrap_err();
    assert!(matches!(err, ComponentError::DuplicateIndex { .. }));
    assert_eq!(c.get(1), Some(&Entry::from(1)));

    let err = c.add(4, 2).unwrap_err();
    assert!(matches!(err, ComponentError::Index { .. }));
}

#[test]
fn test_add_overwrite_when_configured() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .overwrite_on_add(true)
        .build()
        .unwrap();
    c.add(1, 1).unwrap();
    c.add(1, 2).unwrap();
    assert_eq!(c.get(1), Some(&Entry::from(2)));
    assert_eq!(c.len(), 1);
}

#[test]
fn test_add_before_construct_conflicts_with_initializer() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .initialize([(1, 1)])
        .build()
        .unwrap();
    c.add(1, 5).unwrap();
    let err = c.construct().unwrap_err();
    assert!(matches!(err, ComponentError::DuplicateIndex { .. }));
}

#[test]
fn test_add_before_construct_conflicts_with_rule() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .rule(|_, _| Ok(RuleOutcome::value(0)))
        .build()
        .unwrap();
    c.add(2, 99).unwrap();

    let err = c.construct().unwrap_err();
    assert!(matches!(
        err,
        ComponentError::DuplicateIndex { index: IndexKey::Int(2), .. }
    ));
    assert_eq!(c.get(2), Some(&Entry::from(99)));
    assert_eq!(c.progress().failed, Some(IndexKey::Int(2)));
    assert_eq!(c.state(), ConstructionState::Constructing);
}

#[test]
fn test_rule_replaces_added_entry_when_overwrite_configured() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .rule(|_, _| Ok(RuleOutcome::value(0)))
        .overwrite_on_add(true)
        .build()
        .unwrap();
    c.add(2, 99).unwrap();
    c.construct().unwrap();
    assert_eq!(c.get(2), Some(&Entry::from(0)));
    assert_eq!(c.len(), 3);
}

#[test]
fn test_add_checks_domain() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .domain(Domain::Integers)
        .build()
        .unwrap();
    assert!(matches!(c.add(1, 0.5), Err(ComponentError::Domain { .. })));
    c.add(1, 2).unwrap();
}

#[test]
fn test_remove() {
    let mut c = IndexedContainer::builder("p", one_two_three())
        .mutable(true)
        .build()
        .unwrap();
    c.set(1, 1).unwrap();
    assert_eq!(c.remove(1).unwrap(), Entry::from(1));
    assert!(c.is_empty());
    assert!(matches!(c.remove(1), Err(ComponentError::Missing { .. })));

    let mut frozen = IndexedContainer::builder("q", one_two_three())
        .initialize([(1, 1)])
        .build()
        .unwrap();
    frozen.construct().unwrap();
    assert!(matches!(frozen.remove(1), Err(ComponentError::Immutable { .. })));
}

#[test]
fn test_iteration_is_restartable() {
    let mut c = IndexedContainer::builder("p", IndexSet::range(0, 4))
        .default(1)
        .dense(true)
        .build()
        .unwrap();
    c.construct().unwrap();

    let first: Vec<_> = c.iter().map(|(k, _)| k.clone()).collect();
    let second: Vec<_> = c.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}
