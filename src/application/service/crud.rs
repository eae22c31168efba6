use crate::domain::error::DomainError;
use crate::domain::model::Entity;
use crate::domain::repository::{Repository, Result};
use std::marker::PhantomData;

/// Validating CRUD service over a single entity repository.
///
/// Absent input is rejected with `InvalidArgument` before the repository is
/// touched. `modify` and `remove` check existence first; that check and the
/// following write are two separate repository calls and are not atomic.
///
/// The repository stays behind the service outside this crate:
///
/// ```compile_fail
/// use foyer_lib::adapter::state::{AppState, StorageBackend};
/// use foyer_lib::domain::repository::Repository;
/// use foyer_lib::infrastructure::persistence::sqlite::open_in_memory;
///
/// let state = AppState::new(StorageBackend::sqlite(open_in_memory().unwrap()));
/// state.bloc_service.repository().delete_by_id(&1).unwrap();
/// ```
pub struct CrudService<E, R> {
    repo: R,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, R: Repository<E>> CrudService<E, R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    pub(crate) fn repository(&self) -> &R {
        &self.repo
    }

    pub fn retrieve_all(&self) -> Result<Vec<E>> {
        self.repo.find_all()
    }

    pub fn retrieve(&self, id: &E::Id) -> Result<E> {
        tracing::debug!("Retrieving {} {}", E::KIND, id);
        self.repo.find_by_id(id)?.ok_or_else(|| {
            DomainError::NotFound(format!("{} not found with ID: {}", E::KIND, id))
        })
    }

    pub fn add(&self, entity: Option<E>) -> Result<E> {
        let entity = entity.ok_or_else(|| {
            DomainError::InvalidArgument(format!("{} must be provided", E::KIND))
        })?;

        let saved = self.repo.save(&entity)?;
        tracing::info!("Added {} {:?}", E::KIND, saved.id());
        Ok(saved)
    }

    pub fn modify(&self, entity: Option<E>) -> Result<E> {
        let entity = entity.ok_or_else(|| {
            DomainError::InvalidArgument(format!("{} must be provided", E::KIND))
        })?;
        let id = entity.id().ok_or_else(|| {
            DomainError::InvalidArgument(format!("{} ID must be provided", E::KIND))
        })?;

        if !self.repo.exists_by_id(id)? {
            return Err(DomainError::NotFound(format!(
                "Cannot modify non-existing {} with ID: {}",
                E::KIND,
                id
            )));
        }

        let saved = self.repo.save(&entity)?;
        tracing::info!("Modified {} {}", E::KIND, id);
        Ok(saved)
    }

    pub fn remove(&self, id: Option<&E::Id>) -> Result<()> {
        let id = id.ok_or_else(|| {
            DomainError::InvalidArgument(format!("{} ID must be provided", E::KIND))
        })?;

        if !self.repo.exists_by_id(id)? {
            return Err(DomainError::NotFound(format!(
                "Cannot delete non-existing {} with ID: {}",
                E::KIND,
                id
            )));
        }

        self.repo.delete_by_id(id)?;
        tracing::info!("Removed {} {}", E::KIND, id);
        Ok(())
    }
}
