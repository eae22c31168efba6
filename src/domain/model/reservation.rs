use super::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reservation entity - books students for an academic year
///
/// Identified by a string; the store generates a ULID when none is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Option<String>,
    pub academic_year: NaiveDate,
    pub valid: bool,
    #[serde(default)]
    pub etudiant_ids: BTreeSet<i64>,
}

impl Reservation {
    pub fn new(academic_year: NaiveDate, valid: bool) -> Self {
        Self {
            id: None,
            academic_year,
            valid,
            etudiant_ids: BTreeSet::new(),
        }
    }
}

impl Entity for Reservation {
    type Id = String;
    const KIND: &'static str = "Reservation";

    fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
