//! Products domain module.
//!
//! This crate contains the seller-scoped product query pipeline as pure
//! domain logic (no IO, no HTTP, no storage engine). The HTTP layer depends
//! on [`ProductQueries`] only; storage hides behind [`ProductRepository`].

pub mod product;
pub mod repository;
pub mod service;

pub use product::Product;
pub use repository::{
    InMemoryProductRepository, ProductRepository, RepositoryError, RepositoryResult,
};
pub use service::{ProductQueries, ProductService};
