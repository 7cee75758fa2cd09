// src/core/selection.rs
//
// The products a user has picked for comparison.
// Ordered by insertion so comparison columns stay stable; unique by id;
// never more than MAX_COMPARE entries.

use thiserror::Error;

use crate::api::types::{Product, ProductId};
use crate::config::consts::{MAX_COMPARE, MIN_COMPARE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("You can compare up to {max} products at a time. Please remove a product before adding another.", max = MAX_COMPARE)]
    Full,
    #[error("Product {0} is already selected")]
    Duplicate(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    items: Vec<Product>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self { items: Vec::with_capacity(MAX_COMPARE) }
    }

    /// Append `product`. Rejected when full or already present; the set is
    /// left untouched in both cases.
    pub fn add(&mut self, product: Product) -> Result<(), SelectionError> {
        if self.contains(&product.product_id) {
            return Err(SelectionError::Duplicate(product.product_id));
        }
        if self.is_full() {
            return Err(SelectionError::Full);
        }
        self.items.push(product);
        Ok(())
    }

    /// Remove by id. Idempotent.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let ix = self.items.iter().position(|p| &p.product_id == id)?;
        Some(self.items.remove(ix))
    }

    /// Remove if present, add otherwise.
    pub fn toggle(&mut self, product: &Product) -> Result<Toggle, SelectionError> {
        if self.remove(&product.product_id).is_some() {
            return Ok(Toggle::Removed);
        }
        self.add(product.clone())?;
        Ok(Toggle::Added)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.product_id == id)
    }

    #[inline] pub fn count(&self) -> usize { self.items.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.items.is_empty() }
    #[inline] pub fn is_full(&self) -> bool { self.items.len() >= MAX_COMPARE }

    /// The compare action is enabled from two picks upward.
    #[inline] pub fn can_compare(&self) -> bool { self.items.len() >= MIN_COMPARE }

    pub fn clear(&mut self) { self.items.clear(); }

    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.product_id.clone()).collect()
    }

    pub fn products(&self) -> &[Product] { &self.items }

    pub fn iter(&self) -> impl Iterator<Item = &Product> { self.items.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str) -> Product {
        Product { product_id: ProductId::from(id), title: format!("Item {id}"), ..Product::default() }
    }

    #[test]
    fn fifth_add_is_rejected() {
        let mut set = SelectionSet::new();
        for id in ["a", "b", "c", "d"] {
            set.add(p(id)).unwrap();
        }
        assert_eq!(set.add(p("e")), Err(SelectionError::Full));
        assert_eq!(set.count(), 4);
        assert!(!set.contains(&ProductId::from("e")));
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut set = SelectionSet::new();
        set.add(p("a")).unwrap();
        assert_eq!(set.add(p("a")), Err(SelectionError::Duplicate(ProductId::from("a"))));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn remove_is_idempotent_and_keeps_order() {
        let mut set = SelectionSet::new();
        for id in ["a", "b", "c"] {
            set.add(p(id)).unwrap();
        }
        assert!(set.remove(&ProductId::from("b")).is_some());
        assert!(set.remove(&ProductId::from("b")).is_none());
        assert_eq!(set.ids(), vec![ProductId::from("a"), ProductId::from("c")]);
    }

    #[test]
    fn toggle_at_capacity_leaves_set_unchanged() {
        let mut set = SelectionSet::new();
        for id in ["a", "b", "c", "d"] {
            set.add(p(id)).unwrap();
        }
        let before = set.ids();
        assert_eq!(set.toggle(&p("e")), Err(SelectionError::Full));
        assert_eq!(set.ids(), before);

        // Removing still works when full
        assert_eq!(set.toggle(&p("a")), Ok(Toggle::Removed));
        assert_eq!(set.toggle(&p("e")), Ok(Toggle::Added));
        assert_eq!(set.ids().last(), Some(&ProductId::from("e")));
    }

    #[test]
    fn compare_enables_at_exactly_two() {
        let mut set = SelectionSet::new();
        assert!(!set.can_compare());
        set.add(p("a")).unwrap();
        assert!(!set.can_compare());
        set.add(p("b")).unwrap();
        assert!(set.can_compare());
        set.remove(&ProductId::from("a"));
        assert!(!set.can_compare());
    }
}
