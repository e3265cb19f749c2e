//! Property tests for container construction laws.

use std::collections::BTreeMap;

use indexforge_core::{Entry, IndexKey, IndexSet, IndexedContainer};
use indexforge_test::rules::skip_where;
use indexforge_test::CallCounter;
use proptest::prelude::*;

fn index_set(n: i64) -> IndexSet {
    IndexSet::range(0, n)
}

proptest! {
    #[test]
    fn sparse_without_source_is_empty(n in 0i64..50) {
        let mut c = IndexedContainer::builder("p", index_set(n)).build().unwrap();
        c.construct().unwrap();
        prop_assert_eq!(c.len(), 0);
    }

    #[test]
    fn dense_fills_every_index(n in 0i64..50, default in -10.0f64..10.0) {
        let mut c = IndexedContainer::builder("p", index_set(n))
            .default(default)
            .dense(true)
            .build()
            .unwrap();
        c.construct().unwrap();
        prop_assert_eq!(c.len(), n as usize);
    }

    #[test]
    fn initializer_values_are_readable(
        values in proptest::collection::btree_map(0i64..30, -100i64..100, 0..20)
    ) {
        let pairs: BTreeMap<i64, i64> = values;
        let mut c = IndexedContainer::builder("p", index_set(30))
            .initialize(pairs.clone())
            .build()
            .unwrap();
        c.construct().unwrap();

        prop_assert_eq!(c.len(), pairs.len());
        for (k, v) in &pairs {
            prop_assert!(c.contains(*k));
            prop_assert_eq!(c.lookup(*k).unwrap(), &Entry::from(*v));
        }
    }

    #[test]
    fn skipped_indices_are_never_materialized(n in 1i64..40, modulus in 2i64..5) {
        let counter = CallCounter::new();
        let mut c = IndexedContainer::builder("p", index_set(n))
            .rule(skip_where(move |i| i % modulus == 0, counter.clone()))
            .build()
            .unwrap();
        c.construct().unwrap();

        for i in 0..n {
            prop_assert_eq!(counter.count(i), 1);
            prop_assert_eq!(c.contains(i), i % modulus != 0);
        }
    }

    #[test]
    fn mutable_access_materializes_once(n in 1i64..30, picks in proptest::collection::vec(0i64..30, 1..20)) {
        let mut c = IndexedContainer::builder("p", index_set(n))
            .mutable(true)
            .build()
            .unwrap();
        for i in picks.into_iter().filter(|i| *i < n) {
            let before = c.len();
            let existed = c.contains(i);
            c.lookup(i).unwrap();
            prop_assert_eq!(c.len(), if existed { before } else { before + 1 });
            c.lookup(i).unwrap();
            prop_assert_eq!(c.len(), if existed { before } else { before + 1 });
        }
    }

    #[test]
    fn immutable_set_never_changes_len(n in 1i64..30, target in 0i64..30) {
        let mut c = IndexedContainer::builder("p", index_set(n))
            .default(0)
            .dense(true)
            .build()
            .unwrap();
        c.construct().unwrap();
        let before = c.len();
        prop_assert!(c.set(IndexKey::Int(target), 1).is_err());
        prop_assert_eq!(c.len(), before);
    }
}
