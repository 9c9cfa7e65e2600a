use async_trait::async_trait;
use models::{Hero, HeroId, HeroInput};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::ids::IdIssuer;
use crate::pagination::Paginator;
use crate::repository::HeroRepository;
use crate::seed::DEFAULT_HERO_NAMES;
use crate::storage::HeroStore;

/// Store plus paging policy; the unit handed to request handlers.
#[derive(Clone)]
pub struct HeroService {
    store: HeroStore,
    paginator: Paginator,
}

impl HeroService {
    pub fn new(store: HeroStore, paginator: Paginator) -> Self {
        Self { store, paginator }
    }

    /// Fresh service with ids starting at `id_start`, optionally seeded with the default roster.
    pub fn bootstrap(id_start: HeroId, page_size: usize, seed_defaults: bool) -> Result<Self, ServiceError> {
        let ids = IdIssuer::new(id_start);
        let names: &[&str] = if seed_defaults { DEFAULT_HERO_NAMES } else { &[] };
        let store = HeroStore::with_seed(ids, names.iter().copied())?;
        info!(seeded = names.len(), page_size, id_start, "hero store ready");
        Ok(Self::new(store, Paginator::new(page_size)))
    }

    pub fn store(&self) -> &HeroStore {
        &self.store
    }

    pub fn paginator(&self) -> Paginator {
        self.paginator
    }
}

#[async_trait]
impl HeroRepository for HeroService {
    async fn list(&self) -> Vec<Hero> {
        self.store.list().await
    }

    async fn get(&self, id: HeroId) -> Result<Hero, ServiceError> {
        self.store.get(id).await
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: HeroInput) -> Result<Hero, ServiceError> {
        self.store.create(input.name).await
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: HeroId, input: HeroInput) -> Result<Hero, ServiceError> {
        self.store.update(id, input.name).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: HeroId) -> Result<(), ServiceError> {
        self.store.delete(id).await
    }

    async fn page(&self, cursor: Option<HeroId>) -> Result<Vec<Hero>, ServiceError> {
        self.paginator.page(&self.store, cursor).await
    }

    async fn len(&self) -> usize {
        self.store.len().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn bootstrap_seeds_default_roster() -> anyhow::Result<()> {
        let svc = HeroService::bootstrap(1, 4, true)?;
        assert_eq!(svc.len().await, DEFAULT_HERO_NAMES.len());
        assert_eq!(svc.get(1).await?.name, "Dr Nice");
        assert_eq!(svc.paginator().page_size(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn bootstrap_without_seed_honours_id_start() -> anyhow::Result<()> {
        let svc = HeroService::bootstrap(500, 2, false)?;
        assert!(svc.store().is_empty().await);
        let created = svc.create(HeroInput::new("Monsoon")).await?;
        assert_eq!(created.id, 500);
        Ok(())
    }

    #[tokio::test]
    async fn empty_names_are_rejected_before_lookup() -> anyhow::Result<()> {
        let svc = HeroService::bootstrap(1, 4, false)?;
        assert!(matches!(svc.create(HeroInput::default()).await, Err(ServiceError::Validation(_))));
        // validation wins over a missing id
        assert!(matches!(svc.update(99, HeroInput::new("")).await, Err(ServiceError::Validation(_))));
        assert!(matches!(svc.update(99, HeroInput::new("Apex")).await, Err(ServiceError::NotFound(_))));
        assert!(svc.store().is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn works_behind_a_trait_object() -> anyhow::Result<()> {
        let repo: Arc<dyn HeroRepository> = Arc::new(HeroService::bootstrap(1, 2, false)?);
        for name in ["Urchin", "Firefly", "Rubble"] {
            repo.create(HeroInput::new(name)).await?;
        }
        let page = repo.page(None).await?;
        assert_eq!(page.len(), 2);
        let page = repo.page(Some(2)).await?;
        assert_eq!(page, vec![Hero { id: 3, name: "Rubble".into() }]);

        assert!(matches!(repo.create(HeroInput::default()).await, Err(ServiceError::Validation(_))));
        repo.delete(1).await?;
        assert_eq!(repo.list().await.len(), 2);
        Ok(())
    }
}
