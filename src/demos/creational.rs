//! The single store, stocked through factories and builders.

use tracing::{info, instrument};

use crate::actor_framework::StoreClient;
use crate::app_system::StoreHost;
use crate::creational::{ComputerBuilder, ComputerFactory, DeviceFactory, SmartphoneBuilder, SmartphoneFactory};
use crate::domain::Device;
use crate::error::StoreError;

/// Two factory-made and two custom-built devices, in stocking order.
pub fn catalog_devices() -> Vec<Device> {
    let computer = ComputerFactory::default().create_product("Lenovo", "Legion 5i Pro");
    let smartphone = SmartphoneFactory::default().create_product("Samsung", "Galaxy S23");

    let custom_computer = ComputerBuilder::new()
        .set_brand("Asus")
        .set_model("ROG")
        .set_cpu("AMD Ryzen 7")
        .set_ram(16)
        .set_storage(512)
        .build();

    let custom_smartphone = SmartphoneBuilder::new()
        .set_brand("Apple")
        .set_model("iPhone 16 Pro Max")
        .set_color("Space Gray")
        .set_ram(8)
        .set_storage(512)
        .build();

    vec![
        computer.into(),
        smartphone.into(),
        custom_computer.into(),
        custom_smartphone.into(),
    ]
}

/// Adds every catalog device to the store; returns the resulting item count.
#[instrument(skip_all)]
pub async fn stock_catalog(store: &StoreClient<Device>) -> Result<usize, StoreError> {
    let mut count = 0;
    for device in catalog_devices() {
        info!(brand = ?device.info().brand, model = ?device.info().model, "Stocking device");
        count = store.add_product(device).await?;
    }
    Ok(count)
}

/// Stocks the host's store and returns its display lines.
pub async fn report(host: &StoreHost<Device>) -> Result<Vec<String>, StoreError> {
    let store = host.get_instance().await;
    stock_catalog(&store).await?;
    store.display_inventory().await
}
