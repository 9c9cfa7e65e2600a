use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Identifier type shared by heroes and pagination cursors.
/// Signed so that a negative cursor can be carried through to the paginator.
pub type HeroId = i64;

/// A stored hero. `id` is assigned once by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

/// Create/update payload; the id always comes from the store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroInput {
    #[serde(default)]
    pub name: String,
}

impl HeroInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)
    }
}

/// A hero needs a non-empty name. Content is not otherwise checked.
pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.is_empty() {
        return Err(ModelError::Validation("hero name required".into()));
    }
    Ok(())
}
