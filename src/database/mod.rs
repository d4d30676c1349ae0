pub mod bootstrap;
pub mod models;
pub mod query_builder;
pub mod repository;
pub mod store;

pub use bootstrap::{initialize, BootstrapReport};
pub use repository::ProductRepository;
pub use store::{DatabaseError, Store};
