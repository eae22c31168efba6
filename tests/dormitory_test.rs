use chrono::NaiveDate;
use foyer_lib::adapter::error::ApiError;
use foyer_lib::adapter::state::{AppState, StorageBackend};
use foyer_lib::domain::error::ErrorKind;
use foyer_lib::domain::model::{
    Bloc, Chambre, ChambreType, Course, Etudiant, Foyer, Reservation, Universite,
};
use foyer_lib::infrastructure::config::SqliteConfig;
use foyer_lib::infrastructure::persistence::sqlite::{init_database, open_in_memory};

fn state() -> AppState {
    AppState::new(StorageBackend::sqlite(open_in_memory().unwrap()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_empty_store_lists_nothing() {
    let state = state();

    assert!(state.universite_service.retrieve_all().unwrap().is_empty());
    assert!(state.foyer_service.retrieve_all().unwrap().is_empty());
    assert!(state.bloc_service.retrieve_all().unwrap().is_empty());
    assert!(state.chambre_service.retrieve_all().unwrap().is_empty());
    assert!(state.etudiant_service.retrieve_all().unwrap().is_empty());
    assert!(state.reservation_service.retrieve_all().unwrap().is_empty());
    assert!(state.course_service.retrieve_all().unwrap().is_empty());
}

#[test]
fn test_absent_input_is_rejected_for_every_entity() {
    let state = state();

    let errors = [
        state.universite_service.add(None).unwrap_err(),
        state.foyer_service.add(None).unwrap_err(),
        state.bloc_service.add(None).unwrap_err(),
        state.chambre_service.add(None).unwrap_err(),
        state.etudiant_service.add(None).unwrap_err(),
        state.reservation_service.add(None).unwrap_err(),
        state.course_service.add(None).unwrap_err(),
        state.course_service.modify(Some(Course::new("Algebra"))).unwrap_err(),
        state.reservation_service.remove(None).unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_course_assignment_is_visible_from_both_sides() {
    let state = state();

    let course = state
        .course_service
        .add(Some(Course::new("Mathematics")))
        .unwrap();
    let etudiant = state
        .etudiant_service
        .add(Some(Etudiant::new("Trabelsi", "Amine", 12345678, date(2002, 5, 17))))
        .unwrap();
    let etudiant_id = etudiant.id.unwrap();
    let course_id = course.id.unwrap();

    state
        .etudiant_service
        .assign_course(etudiant_id, course_id)
        .unwrap();

    let fetched = state.etudiant_service.retrieve(&etudiant_id).unwrap();
    assert!(fetched.course_ids.contains(&course_id));

    let enrolled = state
        .etudiant_service
        .find_etudiants_by_course("Mathematics")
        .unwrap();
    assert_eq!(enrolled.len(), 1);
    assert_eq!(enrolled[0].id, Some(etudiant_id));

    let course = state.course_service.retrieve(&course_id).unwrap();
    assert!(course.etudiant_ids.contains(&etudiant_id));
}

#[test]
fn test_reservation_is_visible_from_student() {
    let state = state();
    let etudiant_id = state
        .etudiant_service
        .add(Some(Etudiant::new("Trabelsi", "Amine", 12345678, date(2002, 5, 17))))
        .unwrap()
        .id
        .unwrap();

    let mut reservation = Reservation::new(date(2024, 9, 1), true);
    reservation.etudiant_ids.insert(etudiant_id);
    let reservation_id = state
        .reservation_service
        .add(Some(reservation))
        .unwrap()
        .id
        .unwrap();

    let fetched = state.etudiant_service.retrieve(&etudiant_id).unwrap();
    assert!(fetched.reservation_ids.contains(&reservation_id));

    state.reservation_service.remove(Some(&reservation_id)).unwrap();
    let fetched = state.etudiant_service.retrieve(&etudiant_id).unwrap();
    assert!(fetched.reservation_ids.is_empty());
}

#[test]
fn test_assigning_unknown_course_fails_in_store() {
    let state = state();
    let etudiant = state
        .etudiant_service
        .add(Some(Etudiant::new("Trabelsi", "Amine", 12345678, date(2002, 5, 17))))
        .unwrap();

    let err = state
        .etudiant_service
        .assign_course(etudiant.id.unwrap(), 404)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Database);
}

#[test]
fn test_universite_lifecycle_cascades_to_foyer() {
    let state = state();

    let universite = state
        .universite_service
        .add(Some(
            Universite::new("ESPRIT", "Ariana").with_foyer(Foyer::new("Foyer ESPRIT", 500)),
        ))
        .unwrap();
    let foyer_id = universite.foyer.as_ref().and_then(|f| f.id).unwrap();

    let bloc = state
        .bloc_service
        .add(Some(Bloc::new("Bloc A", 100).in_foyer(foyer_id)))
        .unwrap();
    state
        .chambre_service
        .add(Some(Chambre::new(1, ChambreType::Simple).in_bloc(bloc.id.unwrap())))
        .unwrap();
    assert_eq!(state.bloc_service.find_blocs_by_foyer(foyer_id).unwrap().len(), 1);

    let universite_id = universite.id.unwrap();
    state
        .universite_service
        .remove(Some(&universite_id))
        .unwrap();

    let err = state.foyer_service.retrieve(&foyer_id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let orphans = state.bloc_service.find_blocs_without_foyer().unwrap();
    assert_eq!(orphans.len(), 1);
    assert_eq!(
        state
            .chambre_service
            .find_chambres_by_bloc(bloc.id.unwrap())
            .unwrap()
            .len(),
        1
    );

    let err = state
        .universite_service
        .remove(Some(&universite_id))
        .unwrap_err();
    assert_eq!(ApiError::from(err).code, "NOT_FOUND");
}

#[test]
fn test_reservation_modify_and_remove() {
    let state = state();

    let mut reservation = state
        .reservation_service
        .add(Some(Reservation::new(date(2023, 9, 1), true)))
        .unwrap();
    let id = reservation.id.clone().unwrap();

    reservation.valid = false;
    state.reservation_service.modify(Some(reservation)).unwrap();
    assert!(state
        .reservation_service
        .find_reservations_by_date_and_status(date(2024, 1, 1), true)
        .unwrap()
        .is_empty());

    let missing = Reservation {
        id: Some("missing".to_string()),
        ..Reservation::new(date(2023, 9, 1), true)
    };
    let err = state.reservation_service.modify(Some(missing)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    state.reservation_service.remove(Some(&id)).unwrap();
    let err = state.reservation_service.remove(Some(&id)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = SqliteConfig {
        path: dir.path().join("foyer.db").to_string_lossy().into_owned(),
    };

    let saved = {
        let state = AppState::new(StorageBackend::sqlite(init_database(&config).unwrap()));
        state
            .bloc_service
            .add(Some(Bloc::new("Bloc A", 100)))
            .unwrap()
    };

    let state = AppState::new(StorageBackend::sqlite(init_database(&config).unwrap()));
    assert_eq!(state.bloc_service.retrieve(&saved.id.unwrap()).unwrap(), saved);
    assert_eq!(
        state
            .bloc_service
            .retrieve_blocs_by_min_capacity(75)
            .unwrap(),
        vec![saved]
    );
}
