use super::CrudService;
use crate::domain::model::{Chambre, ChambreType};
use crate::domain::repository::{ChambreRepository, Result};

pub type ChambreService<R> = CrudService<Chambre, R>;

impl<R: ChambreRepository> ChambreService<R> {
    pub fn find_chambres_by_type(&self, kind: ChambreType) -> Result<Vec<Chambre>> {
        self.repository().find_all_by_kind(kind)
    }

    pub fn find_chambres_by_bloc(&self, bloc_id: i64) -> Result<Vec<Chambre>> {
        self.repository().find_all_by_bloc_id(bloc_id)
    }
}
