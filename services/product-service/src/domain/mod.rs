//! 领域层
//!
//! 包含商品聚合根、值对象和仓储接口

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;

pub use catalog_domain_core::{Currency, Price, ValueError};
