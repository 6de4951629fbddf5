//! # Store Patterns
//!
//! Classic object-oriented design patterns applied to a small store inventory.
//!
//! ## Ingredients
//!
//! - **Catalog model** - [`Product`](domain::Product), devices built from a shared
//!   [`DeviceInfo`](domain::DeviceInfo), all behind the [`CatalogItem`](domain::CatalogItem) capability
//! - **Inventory** - ordered container with lazy listings → [`Inventory`](inventory::Inventory)
//! - **Strategies** - pure pricing transforms → [`DiscountStrategy`](discount::DiscountStrategy)
//! - **Structural wrappers** - adapter, decorator and facade → [`structural`]
//! - **Creational helpers** - factories and builders → [`creational`]
//! - **Single store** - one store actor owned by the program and reached through
//!   cloneable handles → [`StoreHost`](app_system::StoreHost), [`StoreClient`](actor_framework::StoreClient)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), store_patterns::error::StoreError> {
//! use store_patterns::app_system::StoreHost;
//! use store_patterns::creational::{ComputerFactory, DeviceFactory};
//! use store_patterns::domain::Device;
//!
//! let host = StoreHost::<Device>::default();
//! let store = host.get_instance().await;
//! store.add_product(ComputerFactory::default().create_product("Lenovo", "Legion 5i Pro").into()).await?;
//! for line in store.display_inventory().await? {
//!     println!("{}", line);
//! }
//! host.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod creational;
pub mod demos;
pub mod discount;
pub mod domain;
pub mod error;
pub mod inventory;
pub mod messages;
pub mod structural;

#[cfg(test)]
mod mock_framework;
