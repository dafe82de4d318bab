//! 值对象

mod ids;
mod stock;

pub use ids::*;
pub use stock::*;
