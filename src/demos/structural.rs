//! Adapter, decorator and facade sections, in the two orders the programs print them.

use crate::domain::{CatalogItem, Product};
use crate::structural::{AdvancedProduct, AdvancedProductAdapter, Decorate, StoreFacade};

pub fn adapter_section() -> Vec<String> {
    let product = Product::new("Tablet", 400.0);
    AdvancedProductAdapter::new(&product).detailed_info_lines()
}

pub fn decorator_section() -> Vec<String> {
    Product::new("Monitor", 300.0).with_discount(10.0).info_lines()
}

pub fn facade_section() -> Vec<String> {
    let mut facade = StoreFacade::new();
    facade.add_product("Laptop", 1500.0);
    facade.add_product("Smartphone", 800.0);
    facade.inventory_lines()
}

fn join_sections(sections: Vec<(String, Vec<String>)>) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, (heading, body)) in sections.into_iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        if !heading.is_empty() {
            lines.push(heading);
        }
        lines.extend(body);
    }
    lines
}

/// Adapter, decorator, facade, each under a `### ... ###` heading.
pub fn report() -> Vec<String> {
    join_sections(vec![
        ("### Adapter Pattern ###".to_string(), adapter_section()),
        ("### Decorator Pattern ###".to_string(), decorator_section()),
        ("### Facade Pattern ###".to_string(), facade_section()),
    ])
}

/// Facade first, then adapter and decorator.
pub fn showcase_report() -> Vec<String> {
    join_sections(vec![
        (String::new(), facade_section()),
        ("Using Adapter Pattern:".to_string(), adapter_section()),
        ("Using Decorator Pattern:".to_string(), decorator_section()),
    ])
}
