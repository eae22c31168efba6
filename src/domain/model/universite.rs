use super::{Entity, Foyer};
use serde::{Deserialize, Serialize};

/// Universite entity - the institution owning a foyer.
///
/// The foyer is owned: saving or deleting a university saves or deletes it too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Universite {
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub contact_number: Option<String>,
    pub foyer: Option<Foyer>,
}

impl Universite {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
            description: None,
            contact_number: None,
            foyer: None,
        }
    }

    pub fn with_foyer(mut self, foyer: Foyer) -> Self {
        self.foyer = Some(foyer);
        self
    }
}

impl Entity for Universite {
    type Id = i64;
    const KIND: &'static str = "Universite";

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
