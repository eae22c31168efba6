use super::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Etudiant entity - a student
///
/// Owns the student/course association: `course_ids` is what gets persisted.
/// `reservation_ids` is the inverse side of the reservation association and is
/// only filled in when the student is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Etudiant {
    pub id: Option<i64>,
    pub name: String,
    pub surname: String,
    /// National identity card number
    pub cin: i64,
    pub birth_date: NaiveDate,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub course_ids: BTreeSet<i64>,
    #[serde(default)]
    pub reservation_ids: BTreeSet<String>,
}

impl Etudiant {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        cin: i64,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            surname: surname.into(),
            cin,
            birth_date,
            email: None,
            phone_number: None,
            course_ids: BTreeSet::new(),
            reservation_ids: BTreeSet::new(),
        }
    }
}

impl Entity for Etudiant {
    type Id = i64;
    const KIND: &'static str = "Etudiant";

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
