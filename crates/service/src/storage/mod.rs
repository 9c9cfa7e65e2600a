//! Storage for the service layer.
//!
//! Heroes live in memory for the lifetime of the process; nothing is persisted.

pub mod hero_store;

pub use hero_store::HeroStore;
