use super::CrudService;
use crate::domain::model::Bloc;
use crate::domain::repository::{BlocRepository, Result};

pub type BlocService<R> = CrudService<Bloc, R>;

impl<R: BlocRepository> BlocService<R> {
    /// Blocs whose capacity is strictly greater than `threshold`.
    ///
    /// Filters the full listing in memory rather than asking the store.
    pub fn retrieve_blocs_by_min_capacity(&self, threshold: i64) -> Result<Vec<Bloc>> {
        let blocs = self.repository().find_all()?;
        Ok(blocs
            .into_iter()
            .filter(|bloc| bloc.capacity > threshold)
            .collect())
    }

    pub fn find_blocs_without_foyer(&self) -> Result<Vec<Bloc>> {
        self.repository().find_all_by_foyer_is_null()
    }

    pub fn find_blocs_by_name_and_capacity(&self, name: &str, capacity: i64) -> Result<Vec<Bloc>> {
        self.repository().find_all_by_name_and_capacity(name, capacity)
    }

    pub fn find_blocs_by_foyer(&self, foyer_id: i64) -> Result<Vec<Bloc>> {
        self.repository().find_all_by_foyer_id(foyer_id)
    }
}
