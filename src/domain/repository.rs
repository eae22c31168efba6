use crate::domain::error::DomainError;
use crate::domain::model::{
    Bloc, Chambre, ChambreType, Course, Entity, Etudiant, Foyer, Reservation, Universite,
};
use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, DomainError>;

/// Persistence port shared by every entity.
///
/// `save` is an upsert keyed by the entity id: an entity without an id is
/// inserted and returned with the id the store assigned, an entity with an id
/// overwrites the stored state.
pub trait Repository<E: Entity>: Send + Sync {
    fn find_all(&self) -> Result<Vec<E>>;
    fn find_by_id(&self, id: &E::Id) -> Result<Option<E>>;
    fn exists_by_id(&self, id: &E::Id) -> Result<bool>;
    fn save(&self, entity: &E) -> Result<E>;
    fn delete_by_id(&self, id: &E::Id) -> Result<()>;
}

/// Repository trait for Universite entity
///
/// Cascade contract: `save` upserts the owned foyer before the university and
/// links it, `delete_by_id` deletes the owned foyer together with the
/// university. Both happen atomically.
pub trait UniversiteRepository: Repository<Universite> {
    fn find_by_name(&self, name: &str) -> Result<Vec<Universite>>;
}

/// Repository trait for Foyer entity
///
/// Deleting a foyer detaches its blocs instead of deleting them.
pub trait FoyerRepository: Repository<Foyer> {}

/// Repository trait for Bloc entity
pub trait BlocRepository: Repository<Bloc> {
    fn find_all_by_foyer_is_null(&self) -> Result<Vec<Bloc>>;
    fn find_all_by_name_and_capacity(&self, name: &str, capacity: i64) -> Result<Vec<Bloc>>;
    fn find_all_by_foyer_id(&self, foyer_id: i64) -> Result<Vec<Bloc>>;
}

/// Repository trait for Chambre entity
pub trait ChambreRepository: Repository<Chambre> {
    fn find_all_by_kind(&self, kind: ChambreType) -> Result<Vec<Chambre>>;
    fn find_all_by_bloc_id(&self, bloc_id: i64) -> Result<Vec<Chambre>>;
}

/// Repository trait for Etudiant entity
pub trait EtudiantRepository: Repository<Etudiant> {
    fn find_by_cin(&self, cin: i64) -> Result<Option<Etudiant>>;
    fn find_all_by_course_name(&self, course_name: &str) -> Result<Vec<Etudiant>>;
    /// Both bounds are inclusive.
    fn find_all_by_birth_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Etudiant>>;
}

/// Repository trait for Reservation entity
pub trait ReservationRepository: Repository<Reservation> {
    fn find_all_by_academic_year_before_and_valid(
        &self,
        date: NaiveDate,
        valid: bool,
    ) -> Result<Vec<Reservation>>;
}

/// Repository trait for Course entity
pub trait CourseRepository: Repository<Course> {}

// Forward through Box so services can hold `Box<dyn ...Repository>` for dynamic dispatch
impl<E: Entity, R: Repository<E> + ?Sized> Repository<E> for Box<R> {
    fn find_all(&self) -> Result<Vec<E>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        (**self).find_by_id(id)
    }

    fn exists_by_id(&self, id: &E::Id) -> Result<bool> {
        (**self).exists_by_id(id)
    }

    fn save(&self, entity: &E) -> Result<E> {
        (**self).save(entity)
    }

    fn delete_by_id(&self, id: &E::Id) -> Result<()> {
        (**self).delete_by_id(id)
    }
}

impl<R: UniversiteRepository + ?Sized> UniversiteRepository for Box<R> {
    fn find_by_name(&self, name: &str) -> Result<Vec<Universite>> {
        (**self).find_by_name(name)
    }
}

impl<R: FoyerRepository + ?Sized> FoyerRepository for Box<R> {}

impl<R: BlocRepository + ?Sized> BlocRepository for Box<R> {
    fn find_all_by_foyer_is_null(&self) -> Result<Vec<Bloc>> {
        (**self).find_all_by_foyer_is_null()
    }

    fn find_all_by_name_and_capacity(&self, name: &str, capacity: i64) -> Result<Vec<Bloc>> {
        (**self).find_all_by_name_and_capacity(name, capacity)
    }

    fn find_all_by_foyer_id(&self, foyer_id: i64) -> Result<Vec<Bloc>> {
        (**self).find_all_by_foyer_id(foyer_id)
    }
}

impl<R: ChambreRepository + ?Sized> ChambreRepository for Box<R> {
    fn find_all_by_kind(&self, kind: ChambreType) -> Result<Vec<Chambre>> {
        (**self).find_all_by_kind(kind)
    }

    fn find_all_by_bloc_id(&self, bloc_id: i64) -> Result<Vec<Chambre>> {
        (**self).find_all_by_bloc_id(bloc_id)
    }
}

impl<R: EtudiantRepository + ?Sized> EtudiantRepository for Box<R> {
    fn find_by_cin(&self, cin: i64) -> Result<Option<Etudiant>> {
        (**self).find_by_cin(cin)
    }

    fn find_all_by_course_name(&self, course_name: &str) -> Result<Vec<Etudiant>> {
        (**self).find_all_by_course_name(course_name)
    }

    fn find_all_by_birth_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Etudiant>> {
        (**self).find_all_by_birth_date_between(start, end)
    }
}

impl<R: ReservationRepository + ?Sized> ReservationRepository for Box<R> {
    fn find_all_by_academic_year_before_and_valid(
        &self,
        date: NaiveDate,
        valid: bool,
    ) -> Result<Vec<Reservation>> {
        (**self).find_all_by_academic_year_before_and_valid(date, valid)
    }
}

impl<R: CourseRepository + ?Sized> CourseRepository for Box<R> {}
