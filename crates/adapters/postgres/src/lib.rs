//! catalog-adapter-postgres - PostgreSQL 适配器

mod config;
mod connection;
mod error;

pub use config::*;
pub use connection::*;
pub use error::*;
