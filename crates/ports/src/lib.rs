//! ports - 抽象 trait 层
//!
//! 定义领域层依赖的持久化接口，具体实现由适配器提供

mod repository;

pub use repository::*;
