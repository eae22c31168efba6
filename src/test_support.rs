//! In-memory repository double that records every port call.

use crate::domain::model::{
    Bloc, Chambre, ChambreType, Course, Entity, Etudiant, Foyer, Reservation, Universite,
};
use crate::domain::repository::{
    BlocRepository, ChambreRepository, CourseRepository, EtudiantRepository, FoyerRepository,
    Repository, ReservationRepository, Result, UniversiteRepository,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

/// Identifier types the double knows how to generate.
pub trait TestId: Sized {
    fn from_seq(seq: u64) -> Self;
}

impl TestId for i64 {
    fn from_seq(seq: u64) -> Self {
        seq as i64
    }
}

impl TestId for String {
    fn from_seq(seq: u64) -> Self {
        format!("res-{}", seq)
    }
}

pub struct InMemoryRepository<E> {
    items: Mutex<Vec<E>>,
    next_seq: Mutex<u64>,
    calls: Mutex<HashMap<&'static str, usize>>,
    course_names: Mutex<HashMap<i64, String>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Seed the store without recording any call.
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Mutex::new(items),
            next_seq: Mutex::new(1000),
            calls: Mutex::new(HashMap::new()),
            course_names: Mutex::new(HashMap::new()),
        }
    }

    /// Register a course name so course joins can resolve it.
    pub fn name_course(&self, course_id: i64, name: &str) {
        self.course_names
            .lock()
            .unwrap()
            .insert(course_id, name.to_string());
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.lock().unwrap().get(op).copied().unwrap_or(0)
    }

    fn record(&self, op: &'static str) {
        *self.calls.lock().unwrap().entry(op).or_insert(0) += 1;
    }

    fn filtered(&self, op: &'static str, keep: impl Fn(&E) -> bool) -> Vec<E> {
        self.record(op);
        self.items
            .lock()
            .unwrap()
            .iter()
            .filter(|e| keep(e))
            .cloned()
            .collect()
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E>
where
    E::Id: TestId,
{
    fn find_all(&self) -> Result<Vec<E>> {
        Ok(self.filtered("find_all", |_| true))
    }

    fn find_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        Ok(self
            .filtered("find_by_id", |e| e.id() == Some(id))
            .into_iter()
            .next())
    }

    fn exists_by_id(&self, id: &E::Id) -> Result<bool> {
        self.record("exists_by_id");
        Ok(self.items.lock().unwrap().iter().any(|e| e.id() == Some(id)))
    }

    fn save(&self, entity: &E) -> Result<E> {
        self.record("save");
        let mut saved = entity.clone();
        if saved.id().is_none() {
            let mut seq = self.next_seq.lock().unwrap();
            *seq += 1;
            saved.set_id(<E::Id as TestId>::from_seq(*seq));
        }

        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|e| e.id() == saved.id()) {
            Some(existing) => *existing = saved.clone(),
            None => items.push(saved.clone()),
        }
        Ok(saved)
    }

    fn delete_by_id(&self, id: &E::Id) -> Result<()> {
        self.record("delete_by_id");
        self.items.lock().unwrap().retain(|e| e.id() != Some(id));
        Ok(())
    }
}

impl UniversiteRepository for InMemoryRepository<Universite> {
    fn find_by_name(&self, name: &str) -> Result<Vec<Universite>> {
        Ok(self.filtered("find_by_name", |u| u.name == name))
    }
}

impl FoyerRepository for InMemoryRepository<Foyer> {}

impl BlocRepository for InMemoryRepository<Bloc> {
    fn find_all_by_foyer_is_null(&self) -> Result<Vec<Bloc>> {
        Ok(self.filtered("find_all_by_foyer_is_null", |b| b.foyer_id.is_none()))
    }

    fn find_all_by_name_and_capacity(&self, name: &str, capacity: i64) -> Result<Vec<Bloc>> {
        Ok(self.filtered("find_all_by_name_and_capacity", |b| {
            b.name == name && b.capacity == capacity
        }))
    }

    fn find_all_by_foyer_id(&self, foyer_id: i64) -> Result<Vec<Bloc>> {
        Ok(self.filtered("find_all_by_foyer_id", |b| b.foyer_id == Some(foyer_id)))
    }
}

impl ChambreRepository for InMemoryRepository<Chambre> {
    fn find_all_by_kind(&self, kind: ChambreType) -> Result<Vec<Chambre>> {
        Ok(self.filtered("find_all_by_kind", |c| c.kind == kind))
    }

    fn find_all_by_bloc_id(&self, bloc_id: i64) -> Result<Vec<Chambre>> {
        Ok(self.filtered("find_all_by_bloc_id", |c| c.bloc_id == Some(bloc_id)))
    }
}

impl EtudiantRepository for InMemoryRepository<Etudiant> {
    fn find_by_cin(&self, cin: i64) -> Result<Option<Etudiant>> {
        Ok(self.filtered("find_by_cin", |e| e.cin == cin).into_iter().next())
    }

    fn find_all_by_course_name(&self, course_name: &str) -> Result<Vec<Etudiant>> {
        let names = self.course_names.lock().unwrap().clone();
        Ok(self.filtered("find_all_by_course_name", |e| {
            e.course_ids
                .iter()
                .any(|id| names.get(id).map(String::as_str) == Some(course_name))
        }))
    }

    fn find_all_by_birth_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Etudiant>> {
        Ok(self.filtered("find_all_by_birth_date_between", |e| {
            e.birth_date >= start && e.birth_date <= end
        }))
    }
}

impl ReservationRepository for InMemoryRepository<Reservation> {
    fn find_all_by_academic_year_before_and_valid(
        &self,
        date: NaiveDate,
        valid: bool,
    ) -> Result<Vec<Reservation>> {
        Ok(self.filtered("find_all_by_academic_year_before_and_valid", |r| {
            r.academic_year < date && r.valid == valid
        }))
    }
}

impl CourseRepository for InMemoryRepository<Course> {}
