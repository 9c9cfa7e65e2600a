//! Cursor pagination over the hero store.
//!
//! A cursor is the id of the last hero the client has already seen. Pages are
//! computed from the current store contents on every call; no cursor state is
//! kept between requests.

use models::{Hero, HeroId};

use crate::errors::ServiceError;
use crate::storage::hero_store::{locate, HeroStore};

pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Next page after `cursor`.
///
/// - `None` or a negative cursor starts from the first hero.
/// - A non-negative cursor must be the id of a stored hero, otherwise `NotFound`.
/// - Returns up to `page_size` heroes; empty once the cursor is the last hero.
pub fn paginate(
    heroes: &[Hero],
    cursor: Option<HeroId>,
    page_size: usize,
) -> Result<Vec<Hero>, ServiceError> {
    let start = match cursor {
        Some(id) if id >= 0 => locate(heroes, id).ok_or_else(|| ServiceError::hero_not_found(id))? + 1,
        _ => 0,
    };
    let end = start.saturating_add(page_size).min(heroes.len());
    Ok(heroes[start..end].to_vec())
}

#[derive(Clone, Copy, Debug)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self { page_size: page_size.max(1) }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub async fn page(&self, store: &HeroStore, cursor: Option<HeroId>) -> Result<Vec<Hero>, ServiceError> {
        let page_size = self.page_size;
        store.view(|heroes| paginate(heroes, cursor, page_size)).await
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdIssuer;
    use crate::seed::DEFAULT_HERO_NAMES;

    fn names(page: &[Hero]) -> Vec<&str> {
        page.iter().map(|h| h.name.as_str()).collect()
    }

    fn numbered(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("H{i}")).collect()
    }

    #[tokio::test]
    async fn walks_seventy_heroes_four_at_a_time() -> anyhow::Result<()> {
        let store = HeroStore::with_seed(IdIssuer::default(), numbered(70))?;
        let paginator = Paginator::default();

        let first = paginator.page(&store, None).await?;
        assert_eq!(names(&first), vec!["H1", "H2", "H3", "H4"]);

        let second = paginator.page(&store, Some(first[3].id)).await?;
        assert_eq!(names(&second), vec!["H5", "H6", "H7", "H8"]);

        let mut cursor = Some(second[3].id);
        let mut seen = first.len() + second.len();
        let mut pages = 2;
        loop {
            let page = paginator.page(&store, cursor).await?;
            if page.is_empty() {
                break;
            }
            assert!(page.len() <= 4);
            seen += page.len();
            pages += 1;
            cursor = page.last().map(|h| h.id);
        }
        assert_eq!(seen, 70);
        // 17 full pages and one page of 2
        assert_eq!(pages, 18);
        assert_eq!(cursor, Some(70));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_cursor_is_not_found() -> anyhow::Result<()> {
        let store = HeroStore::with_seed(IdIssuer::default(), numbered(70))?;
        let res = Paginator::default().page(&store, Some(9999)).await;
        assert_eq!(res, Err(ServiceError::hero_not_found(9999)));
        Ok(())
    }

    #[tokio::test]
    async fn deleted_cursor_is_not_found() -> anyhow::Result<()> {
        let store = HeroStore::with_seed(IdIssuer::default(), numbered(6))?;
        store.delete(4).await?;
        let res = Paginator::default().page(&store, Some(4)).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn negative_cursor_starts_from_the_beginning() -> anyhow::Result<()> {
        let store = HeroStore::with_seed(IdIssuer::default(), numbered(6))?;
        let paginator = Paginator::default();
        let from_start = paginator.page(&store, None).await?;
        assert_eq!(paginator.page(&store, Some(-1)).await?, from_start);
        assert_eq!(paginator.page(&store, Some(i64::MIN)).await?, from_start);
        Ok(())
    }

    #[tokio::test]
    async fn zero_cursor_must_exist() -> anyhow::Result<()> {
        let store = HeroStore::with_seed(IdIssuer::default(), numbered(3))?;
        let res = Paginator::default().page(&store, Some(0)).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn empty_store_yields_empty_page() -> anyhow::Result<()> {
        assert!(paginate(&[], None, 4)?.is_empty());
        assert!(paginate(&[], Some(-3), 4)?.is_empty());
        assert!(matches!(paginate(&[], Some(1), 4), Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn short_tail_is_truncated() -> anyhow::Result<()> {
        let heroes: Vec<Hero> = (1..=6).map(|id| Hero { id, name: format!("H{id}") }).collect();
        let page = paginate(&heroes, Some(4), 4)?;
        assert_eq!(names(&page), vec!["H5", "H6"]);
        assert!(paginate(&heroes, Some(6), 4)?.is_empty());
        Ok(())
    }

    #[test]
    fn page_size_is_at_least_one() {
        assert_eq!(Paginator::new(0).page_size(), 1);
        assert_eq!(Paginator::new(10).page_size(), 10);
        assert_eq!(Paginator::default().page_size(), DEFAULT_PAGE_SIZE);
    }

    #[tokio::test]
    async fn delete_shifts_the_first_page() -> anyhow::Result<()> {
        let store = HeroStore::with_seed(IdIssuer::default(), numbered(10))?;
        let paginator = Paginator::default();

        assert_eq!(names(&paginator.page(&store, None).await?), vec!["H1", "H2", "H3", "H4"]);
        store.delete(2).await?;
        assert_eq!(names(&paginator.page(&store, None).await?), vec!["H1", "H3", "H4", "H5"]);
        assert!(matches!(store.get(2).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn default_roster_pages_like_any_other() -> anyhow::Result<()> {
        let store = HeroStore::with_seed(IdIssuer::default(), DEFAULT_HERO_NAMES.iter().copied())?;
        let page = Paginator::default().page(&store, Some(1)).await?;
        assert_eq!(names(&page), vec!["Narco", "Bombasto", "Celeritas", "Magneta"]);
        Ok(())
    }
}
