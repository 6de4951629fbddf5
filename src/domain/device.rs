use std::fmt::Display;

use super::CatalogItem;

/// Renders an optional attribute, showing `None` for fields a builder left unset.
fn field<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}

/// Identity shared by every device category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceInfo {
    pub brand: Option<String>,
    pub model: Option<String>,
}

impl DeviceInfo {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: Some(brand.into()),
            model: Some(model.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Computer {
    pub info: DeviceInfo,
    pub cpu: Option<String>,
    pub ram_gb: Option<u32>,
    pub storage_gb: Option<u32>,
}

impl Computer {
    pub fn new(
        info: DeviceInfo,
        cpu: impl Into<String>,
        ram_gb: u32,
        storage_gb: u32,
    ) -> Self {
        Self {
            info,
            cpu: Some(cpu.into()),
            ram_gb: Some(ram_gb),
            storage_gb: Some(storage_gb),
        }
    }
}

impl CatalogItem for Computer {
    fn info_lines(&self) -> Vec<String> {
        vec![format!(
            "Computer - Brand: {}, Model: {}, CPU: {}, RAM: {}GB, Storage: {}GB",
            field(&self.info.brand),
            field(&self.info.model),
            field(&self.cpu),
            field(&self.ram_gb),
            field(&self.storage_gb),
        )]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Smartphone {
    pub info: DeviceInfo,
    pub color: Option<String>,
    pub ram_gb: Option<u32>,
    pub storage_gb: Option<u32>,
}

impl Smartphone {
    pub fn new(
        info: DeviceInfo,
        color: impl Into<String>,
        ram_gb: u32,
        storage_gb: u32,
    ) -> Self {
        Self {
            info,
            color: Some(color.into()),
            ram_gb: Some(ram_gb),
            storage_gb: Some(storage_gb),
        }
    }
}

impl CatalogItem for Smartphone {
    fn info_lines(&self) -> Vec<String> {
        vec![format!(
            "Smartphone - Brand: {}, Model: {}, Color: {}, RAM: {}GB, Storage: {}GB",
            field(&self.info.brand),
            field(&self.info.model),
            field(&self.color),
            field(&self.ram_gb),
            field(&self.storage_gb),
        )]
    }
}

/// Any device the store can stock.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Computer(Computer),
    Smartphone(Smartphone),
}

impl Device {
    pub fn info(&self) -> &DeviceInfo {
        match self {
            Device::Computer(computer) => &computer.info,
            Device::Smartphone(smartphone) => &smartphone.info,
        }
    }
}

impl From<Computer> for Device {
    fn from(computer: Computer) -> Self {
        Device::Computer(computer)
    }
}

impl From<Smartphone> for Device {
    fn from(smartphone: Smartphone) -> Self {
        Device::Smartphone(smartphone)
    }
}

impl CatalogItem for Device {
    fn info_lines(&self) -> Vec<String> {
        match self {
            Device::Computer(computer) => computer.info_lines(),
            Device::Smartphone(smartphone) => smartphone.info_lines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computer_line() {
        let computer = Computer::new(DeviceInfo::new("Lenovo", "Legion 5i Pro"), "Intel i5", 8, 512);
        assert_eq!(
            computer.listing(),
            "Computer - Brand: Lenovo, Model: Legion 5i Pro, CPU: Intel i5, RAM: 8GB, Storage: 512GB"
        );
    }

    #[test]
    fn test_unset_fields_render_as_none() {
        let phone = Smartphone {
            info: DeviceInfo { brand: Some("Apple".into()), model: None },
            ..Default::default()
        };
        assert_eq!(
            phone.info_lines(),
            vec!["Smartphone - Brand: Apple, Model: None, Color: None, RAM: NoneGB, Storage: NoneGB".to_string()]
        );
    }

    #[test]
    fn test_device_delegates_to_variant() {
        let phone = Smartphone::new(DeviceInfo::new("Samsung", "Galaxy S23"), "Black", 8, 128);
        let device = Device::from(phone.clone());
        assert_eq!(device.info_lines(), phone.info_lines());
        assert_eq!(device.info().brand.as_deref(), Some("Samsung"));
    }
}
