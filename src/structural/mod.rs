//! Structural wrappers around catalog items and the store.

pub mod adapter;
pub mod decorator;
pub mod facade;

pub use adapter::*;
pub use decorator::*;
pub use facade::*;
