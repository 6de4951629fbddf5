//! Inventory manager with factory-made products and pluggable discounts.

use crate::creational::ProductFactory;
use crate::discount::{discount_report, BuyOneGetOneFree, DiscountStrategy, FixedAmountDiscount, PercentageDiscount};
use crate::inventory::InventoryManager;

pub fn seed_inventory() -> InventoryManager {
    let mut inventory_manager = InventoryManager::new();
    inventory_manager.add(ProductFactory::create_product("Laptop", "High-end Laptop", 1500.0));
    inventory_manager.add(ProductFactory::create_product("Smartphone", "Latest Smartphone", 800.0));
    inventory_manager
}

/// The strategies applied by the demo, in report order.
pub fn demo_strategies() -> Vec<Box<dyn DiscountStrategy>> {
    vec![
        Box::new(PercentageDiscount::new(20.0)),
        Box::new(FixedAmountDiscount::new(100.0)),
        Box::new(BuyOneGetOneFree),
    ]
}

/// Listing before discounts, then one block per strategy.
pub fn report(inventory: &InventoryManager, strategies: &[Box<dyn DiscountStrategy>]) -> Vec<String> {
    let mut lines = vec!["Products before discounts:".to_string()];
    lines.extend(inventory.list());
    for strategy in strategies {
        lines.extend(discount_report(strategy.as_ref(), inventory.get_all()));
    }
    lines
}
