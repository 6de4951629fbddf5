use crate::domain::CatalogItem;

/// Wraps a catalog item and annotates its display output with a discount.
///
/// The wrapped item is neither modified nor repriced; the annotation is display-only.
/// Decorators nest, and each layer appends its line after everything the inner layers
/// printed.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountDecorator<P> {
    inner: P,
    discount_percentage: f64,
}

impl<P: CatalogItem> DiscountDecorator<P> {
    pub fn new(inner: P, discount_percentage: f64) -> Self {
        Self { inner, discount_percentage }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn discount_percentage(&self) -> f64 {
        self.discount_percentage
    }
}

impl<P: CatalogItem> CatalogItem for DiscountDecorator<P> {
    fn info_lines(&self) -> Vec<String> {
        let mut lines = self.inner.info_lines();
        lines.push(format!("Discount: {}% off", self.discount_percentage));
        lines
    }
}

/// Fluent decoration for any catalog item.
pub trait Decorate: CatalogItem + Sized {
    fn with_discount(self, discount_percentage: f64) -> DiscountDecorator<Self> {
        DiscountDecorator::new(self, discount_percentage)
    }
}

impl<P: CatalogItem> Decorate for P {}
