use super::CrudService;
use crate::domain::model::Etudiant;
use crate::domain::repository::{EtudiantRepository, Result};
use chrono::NaiveDate;

pub type EtudiantService<R> = CrudService<Etudiant, R>;

impl<R: EtudiantRepository> EtudiantService<R> {
    pub fn find_etudiant_by_cin(&self, cin: i64) -> Result<Option<Etudiant>> {
        self.repository().find_by_cin(cin)
    }

    pub fn find_etudiants_by_course(&self, course_name: &str) -> Result<Vec<Etudiant>> {
        self.repository().find_all_by_course_name(course_name)
    }

    /// Students born between `start` and `end`, both inclusive.
    pub fn find_etudiants_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Etudiant>> {
        self.repository().find_all_by_birth_date_between(start, end)
    }

    /// Enroll a student in a course through the owning side of the association.
    pub fn assign_course(&self, etudiant_id: i64, course_id: i64) -> Result<Etudiant> {
        let mut etudiant = self.retrieve(&etudiant_id)?;
        if etudiant.course_ids.insert(course_id) {
            tracing::info!("Assigning course {} to Etudiant {}", course_id, etudiant_id);
        }
        self.repository().save(&etudiant)
    }
}
