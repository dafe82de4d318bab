//! domain-core - 跨 context 的领域核心类型
//!
//! 实体 trait 与货币相关的值对象

mod entity;
mod error;
mod money;

pub use entity::*;
pub use error::*;
pub use money::*;
