use crate::application::service::{
    BlocService, ChambreService, CourseService, EtudiantService, FoyerService,
    ReservationService, UniversiteService,
};
use crate::domain::repository::{
    BlocRepository, ChambreRepository, CourseRepository, EtudiantRepository, FoyerRepository,
    ReservationRepository, UniversiteRepository,
};
use crate::infrastructure::persistence::sqlite::{
    DbConnection, SqliteBlocRepository, SqliteChambreRepository, SqliteCourseRepository,
    SqliteEtudiantRepository, SqliteFoyerRepository, SqliteReservationRepository,
    SqliteUniversiteRepository,
};

/// Type aliases for dynamic repository types
pub type DynUniversiteRepository = Box<dyn UniversiteRepository>;
pub type DynFoyerRepository = Box<dyn FoyerRepository>;
pub type DynBlocRepository = Box<dyn BlocRepository>;
pub type DynChambreRepository = Box<dyn ChambreRepository>;
pub type DynEtudiantRepository = Box<dyn EtudiantRepository>;
pub type DynReservationRepository = Box<dyn ReservationRepository>;
pub type DynCourseRepository = Box<dyn CourseRepository>;

/// One repository per entity, chosen by the storage backend
pub struct StorageBackend {
    pub universite_repo: DynUniversiteRepository,
    pub foyer_repo: DynFoyerRepository,
    pub bloc_repo: DynBlocRepository,
    pub chambre_repo: DynChambreRepository,
    pub etudiant_repo: DynEtudiantRepository,
    pub reservation_repo: DynReservationRepository,
    pub course_repo: DynCourseRepository,
}

impl StorageBackend {
    pub fn sqlite(db: DbConnection) -> Self {
        Self {
            universite_repo: Box::new(SqliteUniversiteRepository::new(db.clone())),
            foyer_repo: Box::new(SqliteFoyerRepository::new(db.clone())),
            bloc_repo: Box::new(SqliteBlocRepository::new(db.clone())),
            chambre_repo: Box::new(SqliteChambreRepository::new(db.clone())),
            etudiant_repo: Box::new(SqliteEtudiantRepository::new(db.clone())),
            reservation_repo: Box::new(SqliteReservationRepository::new(db.clone())),
            course_repo: Box::new(SqliteCourseRepository::new(db)),
        }
    }
}

pub struct AppState {
    pub universite_service: UniversiteService<DynUniversiteRepository>,
    pub foyer_service: FoyerService<DynFoyerRepository>,
    pub bloc_service: BlocService<DynBlocRepository>,
    pub chambre_service: ChambreService<DynChambreRepository>,
    pub etudiant_service: EtudiantService<DynEtudiantRepository>,
    pub reservation_service: ReservationService<DynReservationRepository>,
    pub course_service: CourseService<DynCourseRepository>,
}

impl AppState {
    pub fn new(storage: StorageBackend) -> Self {
        Self {
            universite_service: UniversiteService::new(storage.universite_repo),
            foyer_service: FoyerService::new(storage.foyer_repo),
            bloc_service: BlocService::new(storage.bloc_repo),
            chambre_service: ChambreService::new(storage.chambre_repo),
            etudiant_service: EtudiantService::new(storage.etudiant_repo),
            reservation_service: ReservationService::new(storage.reservation_repo),
            course_service: CourseService::new(storage.course_repo),
        }
    }
}
