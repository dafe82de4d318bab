//! product-service - 商品持久化

pub mod domain;
pub mod error;
pub mod infrastructure;
