//! Catalog entities and the display capability they share.

pub mod product;
pub mod device;

pub use product::*;
pub use device::*;

/// Capability implemented by everything that can sit in a store and describe itself.
///
/// `info_lines` is the source of truth for display output; `display_product_info`
/// prints those lines to standard output.
pub trait CatalogItem {
    /// Lines produced by `display_product_info`, in output order.
    fn info_lines(&self) -> Vec<String>;

    /// One-line summary used by inventory listings.
    fn listing(&self) -> String {
        self.info_lines().join(" ")
    }

    fn display_product_info(&self) {
        for line in self.info_lines() {
            println!("{}", line);
        }
    }
}

impl<T: CatalogItem + ?Sized> CatalogItem for Box<T> {
    fn info_lines(&self) -> Vec<String> {
        (**self).info_lines()
    }

    fn listing(&self) -> String {
        (**self).listing()
    }
}

impl<T: CatalogItem + ?Sized> CatalogItem for &T {
    fn info_lines(&self) -> Vec<String> {
        (**self).info_lines()
    }

    fn listing(&self) -> String {
        (**self).listing()
    }
}
