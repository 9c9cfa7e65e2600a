use std::sync::Arc;

use models::{hero::validate_name, Hero, HeroId};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::ids::IdIssuer;

/// Index of the hero with `id`, found by binary search over the id-ordered slice.
pub(crate) fn locate(heroes: &[Hero], id: HeroId) -> Option<usize> {
    let i = heroes.partition_point(|h| h.id < id);
    match heroes.get(i) {
        Some(h) if h.id == id => Some(i),
        _ => None,
    }
}

struct Inner {
    heroes: Vec<Hero>,
    ids: IdIssuer,
}

impl Inner {
    /// Issue an id and append at the tail. Both happen under the same write guard,
    /// so the vector stays sorted by id even with concurrent creators.
    fn append(&mut self, name: String) -> Hero {
        let id = self.ids.next();
        if let Some(last) = self.heroes.last() {
            assert!(last.id < id, "id issuer went backwards: {} after {}", id, last.id);
        }
        let hero = Hero { id, name };
        self.heroes.push(hero.clone());
        hero
    }
}

/// In-memory hero collection kept in ascending id order.
///
/// Cloning is cheap and every clone shares the same underlying collection.
/// Reads hand out copies; no caller ever holds a reference into the store.
#[derive(Clone)]
pub struct HeroStore {
    inner: Arc<RwLock<Inner>>,
}

impl HeroStore {
    pub fn new(ids: IdIssuer) -> Self {
        Self { inner: Arc::new(RwLock::new(Inner { heroes: Vec::new(), ids })) }
    }

    /// Build a store pre-populated with `names`, in order, through the regular create path.
    pub fn with_seed<I, S>(ids: IdIssuer, names: I) -> Result<Self, ServiceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut inner = Inner { heroes: Vec::new(), ids };
        for name in names {
            let name = name.into();
            validate_name(&name)?;
            inner.append(name);
        }
        Ok(Self { inner: Arc::new(RwLock::new(inner)) })
    }

    pub async fn create(&self, name: impl Into<String>) -> Result<Hero, ServiceError> {
        let name = name.into();
        validate_name(&name)?;
        let mut inner = self.inner.write().await;
        let hero = inner.append(name);
        debug!(id = hero.id, name = %hero.name, "hero created");
        Ok(hero)
    }

    pub async fn get(&self, id: HeroId) -> Result<Hero, ServiceError> {
        let inner = self.inner.read().await;
        locate(&inner.heroes, id)
            .map(|i| inner.heroes[i].clone())
            .ok_or_else(|| ServiceError::hero_not_found(id))
    }

    /// Rename in place; id and position are untouched.
    pub async fn update(&self, id: HeroId, name: impl Into<String>) -> Result<Hero, ServiceError> {
        let name = name.into();
        validate_name(&name)?;
        let mut inner = self.inner.write().await;
        let i = locate(&inner.heroes, id).ok_or_else(|| ServiceError::hero_not_found(id))?;
        let hero = &mut inner.heroes[i];
        hero.name = name;
        debug!(id, name = %hero.name, "hero updated");
        Ok(hero.clone())
    }

    /// Remove one hero, shifting the tail left so the remaining order is preserved.
    pub async fn delete(&self, id: HeroId) -> Result<(), ServiceError> {
        let mut inner = self.inner.write().await;
        let i = locate(&inner.heroes, id).ok_or_else(|| ServiceError::hero_not_found(id))?;
        inner.heroes.remove(i);
        debug!(id, "hero deleted");
        Ok(())
    }

    /// Snapshot copy of every hero in id order.
    pub async fn list(&self) -> Vec<Hero> {
        self.inner.read().await.heroes.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.heroes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Run `f` against the ordered heroes under the read guard.
    pub async fn view<R>(&self, f: impl FnOnce(&[Hero]) -> R) -> R {
        let inner = self.inner.read().await;
        f(&inner.heroes)
    }
}

impl Default for HeroStore {
    fn default() -> Self {
        Self::new(IdIssuer::default())
    }
}
