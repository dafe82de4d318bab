//! Persistence implementations

pub mod mapper;
mod memory;
mod postgres;
mod record;
mod repository;
mod store;

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;
pub use record::ProductRecord;
pub use repository::StoreProductRepository;
pub use store::ProductStore;
