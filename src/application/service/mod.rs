mod bloc_service;
mod chambre_service;
mod crud;
mod etudiant_service;
mod reservation_service;
mod universite_service;

pub use bloc_service::BlocService;
pub use chambre_service::ChambreService;
pub use crud::CrudService;
pub use etudiant_service::EtudiantService;
pub use reservation_service::ReservationService;
pub use universite_service::UniversiteService;

use crate::domain::model::{Course, Foyer};

/// Foyer has no reads beyond plain CRUD
pub type FoyerService<R> = CrudService<Foyer, R>;

/// Course has no reads beyond plain CRUD
pub type CourseService<R> = CrudService<Course, R>;
