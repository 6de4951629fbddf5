//! Report builders behind the demo programs. Each returns the lines its program prints.

pub mod creational;
pub mod solid;
pub mod structural;
