// ExpandableArray integration tests.
//
// Invariants exercised:
// - Growth: pushes past capacity keep every element, in order.
// - Bounds: get/set outside [0, len) fail with IndexOutOfRange and do not mutate.
// - Construction: growth factor below 2 is rejected.
// - Iteration: restartable, index order, exactly len items.
use expandable_collections::{Error, ExpandableArray};

// Test: a fresh array is empty regardless of its initial capacity.
#[test]
fn new_array_is_empty() {
    let a: ExpandableArray<i32> = ExpandableArray::new(5, 2).unwrap();
    assert!(a.is_empty());
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 5);
    assert_eq!(a.iter().count(), 0);
}

// Test: push increments len.
#[test]
fn push_increases_len() {
    let mut a = ExpandableArray::default();
    a.push(1);
    a.push(2);
    assert_eq!(a.len(), 2);
}

// Test: cap 2, factor 2, five pushes.
// Verifies: values in order and capacity path 2 -> 4 -> 8.
#[test]
fn push_grows_multiple_times_and_keeps_order() {
    let mut a = ExpandableArray::new(2, 2).unwrap();
    let mut capacities = vec![a.capacity()];
    for v in 1..=5 {
        a.push(v);
        if *capacities.last().unwrap() != a.capacity() {
            capacities.push(a.capacity());
        }
    }
    assert_eq!(a.len(), 5);
    for (i, expected) in (1..=5).enumerate() {
        assert_eq!(a.get(i), Ok(&expected));
    }
    assert_eq!(capacities, vec![2, 4, 8]);
}

// Test: reads past len fail even when the slot is allocated.
#[test]
fn get_out_of_range_errors() {
    let mut a = ExpandableArray::new(4, 2).unwrap();
    a.push(1);
    assert_eq!(a.get(1), Err(Error::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(
        a.get(usize::MAX),
        Err(Error::IndexOutOfRange {
            index: usize::MAX,
            len: 1
        })
    );
    assert_eq!(a.get(0), Ok(&1));
}

// Test: set and get_mut write through; out-of-range set is rejected.
#[test]
fn set_and_get_mut() {
    let mut a = ExpandableArray::new(0, 2).unwrap();
    a.extend([10, 20, 30]);
    a.set(1, 21).unwrap();
    *a.get_mut(2).unwrap() += 1;
    a[0] = 11;
    assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![11, 21, 31]);
    assert!(matches!(
        a.set(3, 0),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert_eq!(a.len(), 3);
}

// Test: construction validation.
#[test]
fn growth_factor_below_two_is_rejected() {
    assert!(matches!(
        ExpandableArray::<u8>::new(1, 1),
        Err(Error::InvalidArgument {
            name: "growth_factor",
            value: 1,
            min: 2
        })
    ));
    assert!(ExpandableArray::<u8>::new(1, 0).is_err());
    assert!(ExpandableArray::<u8>::new(0, 2).is_ok());
}

// Test: iteration is restartable and yields elements in index order.
#[test]
fn iteration_is_restartable() {
    let a: ExpandableArray<i32> = [10, 20, 30].into_iter().collect();
    let first: Vec<i32> = a.iter().copied().collect();
    let second: Vec<i32> = (&a).into_iter().copied().collect();
    assert_eq!(first, vec![10, 20, 30]);
    assert_eq!(first, second);
    assert_eq!(a.iter().len(), 3);
}

// Test: non-Copy elements move intact across growth.
#[test]
fn owned_elements_survive_growth() {
    let mut a = ExpandableArray::new(1, 2).unwrap();
    for i in 0..33 {
        a.push(format!("item-{i}"));
    }
    assert_eq!(a.capacity(), 64);
    assert_eq!(a[32], "item-32");
    assert_eq!(format!("{:?}", a.iter().take(2).collect::<Vec<_>>()), r#"["item-0", "item-1"]"#);
}
