use async_trait::async_trait;
use models::{Hero, HeroId, HeroInput};

use crate::errors::ServiceError;

/// Trait abstraction over hero storage as seen by the HTTP layer.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    async fn list(&self) -> Vec<Hero>;
    async fn get(&self, id: HeroId) -> Result<Hero, ServiceError>;
    async fn create(&self, input: HeroInput) -> Result<Hero, ServiceError>;
    async fn update(&self, id: HeroId, input: HeroInput) -> Result<Hero, ServiceError>;
    async fn delete(&self, id: HeroId) -> Result<(), ServiceError>;
    async fn page(&self, cursor: Option<HeroId>) -> Result<Vec<Hero>, ServiceError>;
    async fn len(&self) -> usize;
}
