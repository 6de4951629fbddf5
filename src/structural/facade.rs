use tracing::debug;

use crate::domain::Product;
use crate::inventory::Store;

pub const INVENTORY_HEADING: &str = "Store Inventory:";
pub const EMPTY_INVENTORY: &str = "No products in inventory.";

/// Two-operation front for a [`Store`]; callers never construct a [`Product`] themselves.
#[derive(Debug, Default)]
pub struct StoreFacade {
    store: Store,
}

impl StoreFacade {
    pub fn new() -> Self {
        Self { store: Store::new() }
    }

    pub fn add_product(&mut self, name: impl Into<String>, price: f64) {
        let product = Product::new(name, price);
        debug!(product_name = %product.name, "Adding product through facade");
        self.store.add(product);
    }

    /// Heading plus one line per product, or the empty-inventory notice.
    pub fn inventory_lines(&self) -> Vec<String> {
        if self.store.is_empty() {
            return vec![EMPTY_INVENTORY.to_string()];
        }
        std::iter::once(INVENTORY_HEADING.to_string())
            .chain(self.store.display())
            .collect()
    }

    pub fn show_inventory(&self) {
        for line in self.inventory_lines() {
            println!("{}", line);
        }
    }
}
