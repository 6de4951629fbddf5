//! Ordered, in-memory inventory container.

use crate::domain::{CatalogItem, Product};

/// An ordered collection of catalog items.
///
/// Insertion order is preserved and duplicates are allowed. Listing methods return
/// lazy iterators that are rebuilt on every call.
#[derive(Debug, Clone)]
pub struct Inventory<T> {
    items: Vec<T>,
}

/// Inventory of plain products, as managed by the discount demo.
pub type InventoryManager = Inventory<Product>;

/// Inventory backing the store facade.
pub type Store = Inventory<Product>;

impl<T> Inventory<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Read-only view of the stored items, in insertion order.
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: CatalogItem> Inventory<T> {
    /// One listing line per item.
    pub fn list(&self) -> impl Iterator<Item = String> + '_ {
        self.items.iter().map(|item| item.listing())
    }

    /// Every display line of every item, innermost decorator output first.
    pub fn display(&self) -> impl Iterator<Item = String> + '_ {
        self.items.iter().flat_map(|item| item.info_lines())
    }
}

impl<T> Default for Inventory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Inventory<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}
