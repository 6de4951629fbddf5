//! Step-wise construction of devices.
//!
//! Every setter is optional and `build` never validates: unset fields stay `None`.
//! `build` borrows the builder, so one builder can yield several equal devices.

use crate::domain::{Computer, DeviceInfo, Smartphone};

#[derive(Debug, Clone, Default)]
pub struct ComputerBuilder {
    info: DeviceInfo,
    cpu: Option<String>,
    ram_gb: Option<u32>,
    storage_gb: Option<u32>,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_brand(mut self, brand: impl Into<String>) -> Self {
        self.info.brand = Some(brand.into());
        self
    }

    pub fn set_model(mut self, model: impl Into<String>) -> Self {
        self.info.model = Some(model.into());
        self
    }

    pub fn set_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn set_ram(mut self, ram_gb: u32) -> Self {
        self.ram_gb = Some(ram_gb);
        self
    }

    pub fn set_storage(mut self, storage_gb: u32) -> Self {
        self.storage_gb = Some(storage_gb);
        self
    }

    pub fn build(&self) -> Computer {
        Computer {
            info: self.info.clone(),
            cpu: self.cpu.clone(),
            ram_gb: self.ram_gb,
            storage_gb: self.storage_gb,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmartphoneBuilder {
    info: DeviceInfo,
    color: Option<String>,
    ram_gb: Option<u32>,
    storage_gb: Option<u32>,
}

impl SmartphoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_brand(mut self, brand: impl Into<String>) -> Self {
        self.info.brand = Some(brand.into());
        self
    }

    pub fn set_model(mut self, model: impl Into<String>) -> Self {
        self.info.model = Some(model.into());
        self
    }

    pub fn set_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn set_ram(mut self, ram_gb: u32) -> Self {
        self.ram_gb = Some(ram_gb);
        self
    }

    pub fn set_storage(mut self, storage_gb: u32) -> Self {
        self.storage_gb = Some(storage_gb);
        self
    }

    pub fn build(&self) -> Smartphone {
        Smartphone {
            info: self.info.clone(),
            color: self.color.clone(),
            ram_gb: self.ram_gb,
            storage_gb: self.storage_gb,
        }
    }
}
