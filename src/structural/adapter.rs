use crate::domain::CatalogItem;

pub const LIMITED_STOCK_NOTE: &str = "Additional info: This product is available in limited stock.";

/// Target interface expected by clients that want extended product details.
pub trait AdvancedProduct {
    fn detailed_info_lines(&self) -> Vec<String>;

    fn show_detailed_product_info(&self) {
        for line in self.detailed_info_lines() {
            println!("{}", line);
        }
    }
}

/// Exposes any [`CatalogItem`] through the [`AdvancedProduct`] interface.
pub struct AdvancedProductAdapter<'a, P: CatalogItem> {
    product: &'a P,
}

impl<'a, P: CatalogItem> AdvancedProductAdapter<'a, P> {
    pub fn new(product: &'a P) -> Self {
        Self { product }
    }
}

impl<P: CatalogItem> AdvancedProduct for AdvancedProductAdapter<'_, P> {
    fn detailed_info_lines(&self) -> Vec<String> {
        let mut lines = self.product.info_lines();
        lines.push(LIMITED_STOCK_NOTE.to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[test]
    fn test_adapter_appends_stock_note() {
        let tablet = Product::new("Tablet", 400.0);
        let adapter = AdvancedProductAdapter::new(&tablet);
        assert_eq!(
            adapter.detailed_info_lines(),
            vec![
                "Product Name: Tablet, Price: $400".to_string(),
                LIMITED_STOCK_NOTE.to_string(),
            ]
        );
    }
}
