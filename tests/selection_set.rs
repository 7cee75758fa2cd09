// tests/selection_set.rs
use proptest::prelude::*;

use amasift_compare::api::types::{Product, ProductId};
use amasift_compare::config::consts::MAX_COMPARE;
use amasift_compare::core::{SelectionError, SelectionSet, Toggle};

fn product(id: &str) -> Product {
    Product { product_id: ProductId::from(id), title: format!("P{}", id), ..Product::default() }
}

#[derive(Clone, Debug)]
enum Op {
    Add(u8),
    Remove(u8),
    Toggle(u8),
}

fn op() -> impl Strategy<Value = Op> {
    // Small id space so duplicates and removals actually happen
    prop_oneof![
        (0u8..8).prop_map(Op::Add),
        (0u8..8).prop_map(Op::Remove),
        (0u8..8).prop_map(Op::Toggle),
    ]
}

proptest! {
    #[test]
    fn bounded_and_unique_under_any_sequence(ops in prop::collection::vec(op(), 0..64)) {
        let mut set = SelectionSet::new();
        for op in ops {
            match op {
                Op::Add(n) => { let _ = set.add(product(&n.to_string())); }
                Op::Remove(n) => { set.remove(&ProductId::from(n.to_string())); }
                Op::Toggle(n) => { let _ = set.toggle(&product(&n.to_string())); }
            }

            prop_assert!(set.count() <= MAX_COMPARE);
            let mut ids = set.ids();
            let before = ids.len();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
            prop_assert_eq!(set.can_compare(), set.count() >= 2);
        }
    }

    #[test]
    fn add_then_remove_restores(start in 0usize..MAX_COMPARE, extra in 10u8..20) {
        let mut set = SelectionSet::new();
        for i in 0..start {
            set.add(product(&i.to_string())).unwrap();
        }
        let before = set.ids();

        let id = extra.to_string();
        set.add(product(&id)).unwrap();
        prop_assert!(set.remove(&ProductId::from(id)).is_some());
        prop_assert_eq!(set.ids(), before);
    }

    #[test]
    fn toggle_twice_is_identity_below_capacity(start in 0usize..MAX_COMPARE, extra in 10u8..20) {
        let mut set = SelectionSet::new();
        for i in 0..start {
            set.add(product(&i.to_string())).unwrap();
        }
        let before = set.ids();
        let p = product(&extra.to_string());

        prop_assert_eq!(set.toggle(&p), Ok(Toggle::Added));
        prop_assert_eq!(set.toggle(&p), Ok(Toggle::Removed));
        prop_assert_eq!(set.ids(), before);
    }
}

#[test]
fn insertion_order_is_kept() {
    let mut set = SelectionSet::new();
    for id in ["c", "a", "b"] {
        set.add(product(id)).unwrap();
    }
    let titles: Vec<&str> = set.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Pc", "Pa", "Pb"]);
}

#[test]
fn capacity_message_matches_notice() {
    assert_eq!(
        SelectionError::Full.to_string(),
        "You can compare up to 4 products at a time. Please remove a product before adding another."
    );
}
