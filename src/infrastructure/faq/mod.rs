//! FAQ infrastructure - persistence backends

mod postgres_repository;

pub use postgres_repository::PostgresFaqRepository;
