use super::CrudService;
use crate::domain::model::Universite;
use crate::domain::repository::{Result, UniversiteRepository};

/// The owned foyer is saved and deleted by the repository, see
/// [`UniversiteRepository`].
pub type UniversiteService<R> = CrudService<Universite, R>;

impl<R: UniversiteRepository> UniversiteService<R> {
    pub fn find_universites_by_name(&self, name: &str) -> Result<Vec<Universite>> {
        self.repository().find_by_name(name)
    }
}
