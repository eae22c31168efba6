mod bloc_repo;
mod chambre_repo;
mod course_repo;
mod etudiant_repo;
mod foyer_repo;
mod reservation_repo;
mod universite_repo;

pub use bloc_repo::SqliteBlocRepository;
pub use chambre_repo::SqliteChambreRepository;
pub use course_repo::SqliteCourseRepository;
pub use etudiant_repo::SqliteEtudiantRepository;
pub use foyer_repo::SqliteFoyerRepository;
pub use reservation_repo::SqliteReservationRepository;
pub use universite_repo::SqliteUniversiteRepository;

use crate::infrastructure::config::SqliteConfig;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub type DbConnection = Arc<Mutex<Connection>>;

const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS foyers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        capacity INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS universites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        description TEXT,
        contact_number TEXT,
        foyer_id INTEGER UNIQUE REFERENCES foyers(id) ON DELETE SET NULL
    );

    CREATE TABLE IF NOT EXISTS blocs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        foyer_id INTEGER REFERENCES foyers(id) ON DELETE SET NULL
    );

    CREATE TABLE IF NOT EXISTS chambres (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        number INTEGER NOT NULL,
        kind TEXT NOT NULL,
        bloc_id INTEGER REFERENCES blocs(id) ON DELETE SET NULL
    );

    CREATE TABLE IF NOT EXISTS etudiants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        surname TEXT NOT NULL,
        cin INTEGER NOT NULL,
        birth_date TEXT NOT NULL,
        email TEXT,
        phone_number TEXT
    );

    CREATE TABLE IF NOT EXISTS courses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT
    );

    CREATE TABLE IF NOT EXISTS etudiant_courses (
        etudiant_id INTEGER NOT NULL REFERENCES etudiants(id) ON DELETE CASCADE,
        course_id INTEGER NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
        PRIMARY KEY (etudiant_id, course_id)
    );

    CREATE TABLE IF NOT EXISTS reservations (
        id TEXT PRIMARY KEY,
        academic_year TEXT NOT NULL,
        valid INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS reservation_etudiants (
        reservation_id TEXT NOT NULL REFERENCES reservations(id) ON DELETE CASCADE,
        etudiant_id INTEGER NOT NULL REFERENCES etudiants(id) ON DELETE CASCADE,
        PRIMARY KEY (reservation_id, etudiant_id)
    );
";

/// Initialize the SQLite database described by `config`
pub fn init_database(config: &SqliteConfig) -> anyhow::Result<DbConnection> {
    if config.is_in_memory() {
        tracing::info!("Initializing in-memory database");
        return open_in_memory();
    }

    let db_path = config.effective_path();

    // Ensure directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!("Initializing database at {:?}", db_path);

    let conn = Connection::open(&db_path)?;
    create_schema(&conn)?;

    tracing::info!("Database initialized successfully");

    Ok(Arc::new(Mutex::new(conn)))
}

/// Open a private in-memory database with the schema applied
pub fn open_in_memory() -> anyhow::Result<DbConnection> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}
