use super::Entity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Course entity - inverse side of the student/course association
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    /// Students following this course. Read from the store, never written:
    /// enrolment goes through `Etudiant::course_ids`.
    #[serde(default)]
    pub etudiant_ids: BTreeSet<i64>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            etudiant_ids: BTreeSet::new(),
        }
    }
}

impl Entity for Course {
    type Id = i64;
    const KIND: &'static str = "Course";

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
