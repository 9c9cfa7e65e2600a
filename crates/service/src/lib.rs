//! Service layer for the hero collection.
//! - `ids` issues identifiers, `storage` keeps heroes ordered by id.
//! - `pagination` serves cursor pages from the store.
//! - `HeroRepository` is the seam the HTTP layer talks to.

pub mod errors;
pub mod ids;
pub mod storage;
pub mod pagination;
pub mod seed;
pub mod repository;
pub mod hero_service;

pub use hero_service::HeroService;
pub use repository::HeroRepository;
