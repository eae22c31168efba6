use super::Entity;
use serde::{Deserialize, Serialize};

/// Bloc entity - a subdivision of a foyer containing rooms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bloc {
    pub id: Option<i64>,
    pub name: String,
    pub capacity: i64,
    /// `None` when the bloc is not attached to any foyer.
    pub foyer_id: Option<i64>,
}

impl Bloc {
    pub fn new(name: impl Into<String>, capacity: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            capacity,
            foyer_id: None,
        }
    }

    pub fn in_foyer(mut self, foyer_id: i64) -> Self {
        self.foyer_id = Some(foyer_id);
        self
    }
}

impl Entity for Bloc {
    type Id = i64;
    const KIND: &'static str = "Bloc";

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
