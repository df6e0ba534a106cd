#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can use
// the constant test hasher and inspect bucket placement.

use crate::chained_hash_map::tests::ConstBuildHasher;
use crate::chained_hash_map::ChainedHashMap;
use core::hash::BuildHasher;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Get(usize),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,4}", 1..=8).prop_flat_map(|pool| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => idx.prop_map(Op::Get),
            1 => Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Model: an insertion-ordered list of pairs; lookup is the first match.
fn run_against_model<S: BuildHasher>(
    mut sut: ChainedHashMap<String, i32, S>,
    pool: &[String],
    ops: &[Op],
) -> Result<(), TestCaseError> {
    let mut model: Vec<(String, i32)> = Vec::new();
    for op in ops {
        match op {
            Op::Insert(i, v) => {
                sut.insert(pool[*i].clone(), *v);
                model.push((pool[*i].clone(), *v));
            }
            Op::Get(i) => {
                let expected = model.iter().find(|(k, _)| *k == pool[*i]).map(|(_, v)| v);
                prop_assert_eq!(sut.get(pool[*i].as_str()), expected);
                prop_assert_eq!(sut.contains_key(pool[*i].as_str()), expected.is_some());
            }
            Op::Iterate => {
                let mut seen: Vec<(String, i32)> =
                    sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                let mut all = model.clone();
                seen.sort();
                all.sort();
                prop_assert_eq!(seen, all);
            }
        }
        prop_assert_eq!(sut.len(), model.len());
        prop_assert!(sut.len() <= sut.bucket_count());
        sut.assert_home_buckets();
    }
    Ok(())
}

// Property: state-machine equivalence with a first-match list model.
// - `len` counts duplicates; `get` returns the earliest value for a key.
// - `iter` yields every inserted pair exactly once.
// - After every op each entry sits in its home bucket and load factor <= 1.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), growth in 2usize..=4, cap in 2usize..=5) {
        let sut: ChainedHashMap<String, i32> = ChainedHashMap::new(cap, growth).unwrap();
        run_against_model(sut, &pool, &ops)?;
    }

    #[test]
    fn prop_state_machine_all_collisions((pool, ops) in arb_scenario()) {
        let sut: ChainedHashMap<String, i32, ConstBuildHasher> =
            ChainedHashMap::with_hasher(2, 2, ConstBuildHasher).unwrap();
        run_against_model(sut, &pool, &ops)?;
    }

    // Within a bucket, iteration preserves insertion order across rehashes.
    #[test]
    fn prop_chain_order_survives_rehash(n in 1usize..200) {
        let mut sut: ChainedHashMap<u32, usize, ConstBuildHasher> =
            ChainedHashMap::with_hasher(2, 3, ConstBuildHasher).unwrap();
        for i in 0..n {
            sut.insert((i % 7) as u32, i);
        }
        let order: Vec<usize> = sut.iter().map(|(_, v)| *v).collect();
        prop_assert_eq!(order, (0..n).collect::<Vec<_>>());
    }
}
