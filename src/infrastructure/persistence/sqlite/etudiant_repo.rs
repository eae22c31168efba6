use crate::domain::error::DomainError;
use crate::domain::model::Etudiant;
use crate::domain::repository::{EtudiantRepository, Repository, Result};
use super::DbConnection;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row, ToSql};
use std::collections::BTreeSet;

const SELECT_ETUDIANTS: &str =
    "SELECT DISTINCT e.id, e.name, e.surname, e.cin, e.birth_date, e.email, e.phone_number
     FROM etudiants e";

pub struct SqliteEtudiantRepository {
    conn: DbConnection,
}

impl SqliteEtudiantRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }

    fn query(&self, clause: &str, params: &[&dyn ToSql]) -> Result<Vec<Etudiant>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare(&format!("{} {} ORDER BY e.id ASC", SELECT_ETUDIANTS, clause))?;
        let rows = stmt.query_map(params, map_row)?;

        let mut etudiants = Vec::new();
        for etudiant in rows {
            etudiants.push(etudiant?);
        }

        for etudiant in &mut etudiants {
            if let Some(id) = etudiant.id {
                etudiant.course_ids = load_course_ids(&conn, id)?;
                etudiant.reservation_ids = load_reservation_ids(&conn, id)?;
            }
        }

        Ok(etudiants)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Etudiant> {
    Ok(Etudiant {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
        cin: row.get(3)?,
        birth_date: row.get(4)?,
        email: row.get(5)?,
        phone_number: row.get(6)?,
        course_ids: BTreeSet::new(),
        reservation_ids: BTreeSet::new(),
    })
}

fn load_course_ids(conn: &Connection, etudiant_id: i64) -> rusqlite::Result<BTreeSet<i64>> {
    let mut stmt = conn.prepare("SELECT course_id FROM etudiant_courses WHERE etudiant_id = ?1")?;
    let rows = stmt.query_map(params![etudiant_id], |row| row.get(0))?;

    let mut course_ids = BTreeSet::new();
    for course_id in rows {
        course_ids.insert(course_id?);
    }

    Ok(course_ids)
}

fn load_reservation_ids(conn: &Connection, etudiant_id: i64) -> rusqlite::Result<BTreeSet<String>> {
    let mut stmt =
        conn.prepare("SELECT reservation_id FROM reservation_etudiants WHERE etudiant_id = ?1")?;
    let rows = stmt.query_map(params![etudiant_id], |row| row.get(0))?;

    let mut reservation_ids = BTreeSet::new();
    for reservation_id in rows {
        reservation_ids.insert(reservation_id?);
    }

    Ok(reservation_ids)
}

impl Repository<Etudiant> for SqliteEtudiantRepository {
    fn find_all(&self) -> Result<Vec<Etudiant>> {
        self.query("", &[])
    }

    fn find_by_id(&self, id: &i64) -> Result<Option<Etudiant>> {
        Ok(self.query("WHERE e.id = ?1", params![id])?.into_iter().next())
    }

    fn exists_by_id(&self, id: &i64) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM etudiants WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    /// Writes the student row and rewrites its course links in one transaction.
    /// Reservation links belong to the reservation and are reloaded, not written.
    fn save(&self, etudiant: &Etudiant) -> Result<Etudiant> {
        let mut conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn.transaction()?;

        let id = match etudiant.id {
            Some(id) => {
                tx.execute(
                    "INSERT INTO etudiants (id, name, surname, cin, birth_date, email, phone_number)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        surname = excluded.surname,
                        cin = excluded.cin,
                        birth_date = excluded.birth_date,
                        email = excluded.email,
                        phone_number = excluded.phone_number",
                    params![
                        id,
                        etudiant.name,
                        etudiant.surname,
                        etudiant.cin,
                        etudiant.birth_date,
                        etudiant.email,
                        etudiant.phone_number,
                    ],
                )?;
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO etudiants (name, surname, cin, birth_date, email, phone_number)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        etudiant.name,
                        etudiant.surname,
                        etudiant.cin,
                        etudiant.birth_date,
                        etudiant.email,
                        etudiant.phone_number,
                    ],
                )?;
                tx.last_insert_rowid()
            }
        };

        tx.execute("DELETE FROM etudiant_courses WHERE etudiant_id = ?1", params![id])?;
        for course_id in &etudiant.course_ids {
            tx.execute(
                "INSERT INTO etudiant_courses (etudiant_id, course_id) VALUES (?1, ?2)",
                params![id, course_id],
            )?;
        }

        let reservation_ids = load_reservation_ids(&tx, id)?;
        tx.commit()?;

        Ok(Etudiant {
            id: Some(id),
            reservation_ids,
            ..etudiant.clone()
        })
    }

    fn delete_by_id(&self, id: &i64) -> Result<()> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        conn.execute("DELETE FROM etudiants WHERE id = ?1", params![id])?;

        Ok(())
    }
}

impl EtudiantRepository for SqliteEtudiantRepository {
    fn find_by_cin(&self, cin: i64) -> Result<Option<Etudiant>> {
        Ok(self.query("WHERE e.cin = ?1", params![cin])?.into_iter().next())
    }

    fn find_all_by_course_name(&self, course_name: &str) -> Result<Vec<Etudiant>> {
        self.query(
            "JOIN etudiant_courses ec ON ec.etudiant_id = e.id
             JOIN courses c ON c.id = ec.course_id
             WHERE c.name = ?1",
            params![course_name],
        )
    }

    fn find_all_by_birth_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Etudiant>> {
        self.query("WHERE e.birth_date BETWEEN ?1 AND ?2", params![start, end])
    }
}
