use std::sync::Arc;

use service::HeroRepository;

/// Shared handler state. Every request task sees the same repository.
#[derive(Clone)]
pub struct AppState {
    pub heroes: Arc<dyn HeroRepository>,
}

impl AppState {
    pub fn new(heroes: Arc<dyn HeroRepository>) -> Self {
        Self { heroes }
    }
}
