//! Factories and builders for catalog items.

pub mod builder;
pub mod factory;

pub use builder::*;
pub use factory::*;
