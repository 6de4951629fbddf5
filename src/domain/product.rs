use super::CatalogItem;

/// Represents a priced product in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl Product {
    /// Creates a product without a description.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
        }
    }

    /// Creates a product carrying a catalog description.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `description` - Free-form catalog text
    /// * `price` - Unit price
    pub fn with_description(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            price,
        }
    }
}

impl CatalogItem for Product {
    fn info_lines(&self) -> Vec<String> {
        vec![format!("Product Name: {}, Price: ${}", self.name, self.price)]
    }

    fn listing(&self) -> String {
        match &self.description {
            Some(description) => format!(
                "Name: {}, Description: {}, Price: ${:.2}",
                self.name, description, self.price
            ),
            None => format!("Name: {}, Price: ${:.2}", self.name, self.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_line_uses_plain_price() {
        let tablet = Product::new("Tablet", 400.0);
        assert_eq!(tablet.info_lines(), vec!["Product Name: Tablet, Price: $400".to_string()]);

        let cable = Product::new("Cable", 9.5);
        assert_eq!(cable.info_lines()[0], "Product Name: Cable, Price: $9.5");
    }

    #[test]
    fn test_listing_formats_two_decimals() {
        let laptop = Product::with_description("Laptop", "High-end Laptop", 1500.0);
        assert_eq!(laptop.listing(), "Name: Laptop, Description: High-end Laptop, Price: $1500.00");

        let bare = Product::new("Mouse", 19.999);
        assert_eq!(bare.listing(), "Name: Mouse, Price: $20.00");
    }
}
