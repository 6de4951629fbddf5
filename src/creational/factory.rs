use crate::domain::{CatalogItem, Computer, DeviceInfo, Product, Smartphone};

/// Constructs plain catalog products.
pub struct ProductFactory;

impl ProductFactory {
    pub fn create_product(name: impl Into<String>, description: impl Into<String>, price: f64) -> Product {
        Product::with_description(name, description, price)
    }
}

/// Factory method for one device category.
///
/// Only identity is supplied by the caller; category attributes come from the factory.
pub trait DeviceFactory {
    type Output: CatalogItem;

    fn create_product(&self, brand: &str, model: &str) -> Self::Output;
}

/// Builds computers with a fixed hardware configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputerFactory {
    pub cpu: String,
    pub ram_gb: u32,
    pub storage_gb: u32,
}

impl Default for ComputerFactory {
    fn default() -> Self {
        Self {
            cpu: "Intel i5".to_string(),
            ram_gb: 8,
            storage_gb: 512,
        }
    }
}

impl DeviceFactory for ComputerFactory {
    type Output = Computer;

    fn create_product(&self, brand: &str, model: &str) -> Computer {
        Computer::new(DeviceInfo::new(brand, model), self.cpu.clone(), self.ram_gb, self.storage_gb)
    }
}

/// Builds smartphones with a fixed color and memory configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartphoneFactory {
    pub color: String,
    pub ram_gb: u32,
    pub storage_gb: u32,
}

impl Default for SmartphoneFactory {
    fn default() -> Self {
        Self {
            color: "Black".to_string(),
            ram_gb: 8,
            storage_gb: 128,
        }
    }
}

impl DeviceFactory for SmartphoneFactory {
    type Output = Smartphone;

    fn create_product(&self, brand: &str, model: &str) -> Smartphone {
        Smartphone::new(DeviceInfo::new(brand, model), self.color.clone(), self.ram_gb, self.storage_gb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_factory() {
        let smartphone = ProductFactory::create_product("Smartphone", "Latest Smartphone", 800.0);
        assert_eq!(smartphone.name, "Smartphone");
        assert_eq!(smartphone.description.as_deref(), Some("Latest Smartphone"));
        assert_eq!(smartphone.price, 800.0);
    }

    #[test]
    fn test_computer_factory_defaults() {
        let computer = ComputerFactory::default().create_product("Lenovo", "Legion 5i Pro");
        assert_eq!(computer.info, DeviceInfo::new("Lenovo", "Legion 5i Pro"));
        assert_eq!(computer.cpu.as_deref(), Some("Intel i5"));
        assert_eq!(computer.ram_gb, Some(8));
        assert_eq!(computer.storage_gb, Some(512));
    }

    #[test]
    fn test_smartphone_factory_defaults() {
        let phone = SmartphoneFactory::default().create_product("Samsung", "Galaxy S23");
        assert_eq!(
            phone.listing(),
            "Smartphone - Brand: Samsung, Model: Galaxy S23, Color: Black, RAM: 8GB, Storage: 128GB"
        );
    }

    #[test]
    fn test_factories_are_interchangeable() {
        fn stock<F: DeviceFactory>(factory: &F, models: &[&str]) -> Vec<String> {
            models.iter().map(|model| factory.create_product("Acme", model).listing()).collect()
        }

        let computers = stock(&ComputerFactory::default(), &["A1", "A2"]);
        let phones = stock(&SmartphoneFactory::default(), &["P1"]);
        assert_eq!(computers.len(), 2);
        assert!(computers[1].contains("Model: A2"));
        assert!(phones[0].starts_with("Smartphone - Brand: Acme"));
    }
}
