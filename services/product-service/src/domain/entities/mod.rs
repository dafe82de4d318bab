//! 实体定义

mod product;

pub use product::*;
