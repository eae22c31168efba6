use super::Entity;
use serde::{Deserialize, Serialize};

/// Foyer entity - a dormitory building owned by a university
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foyer {
    pub id: Option<i64>,
    pub name: String,
    pub capacity: i64,
}

impl Foyer {
    pub fn new(name: impl Into<String>, capacity: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            capacity,
        }
    }
}

impl Entity for Foyer {
    type Id = i64;
    const KIND: &'static str = "Foyer";

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
