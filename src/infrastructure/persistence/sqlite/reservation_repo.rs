use crate::domain::error::DomainError;
use crate::domain::model::Reservation;
use crate::domain::repository::{Repository, ReservationRepository, Result};
use super::DbConnection;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row, ToSql};
use std::collections::BTreeSet;
use ulid::Ulid;

pub struct SqliteReservationRepository {
    conn: DbConnection,
}

impl SqliteReservationRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }

    fn query(&self, filter: &str, params: &[&dyn ToSql]) -> Result<Vec<Reservation>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare(&format!(
            "SELECT id, academic_year, valid FROM reservations {} ORDER BY academic_year ASC, id ASC",
            filter
        ))?;
        let rows = stmt.query_map(params, map_row)?;

        let mut reservations = Vec::new();
        for reservation in rows {
            reservations.push(reservation?);
        }

        for reservation in &mut reservations {
            if let Some(id) = &reservation.id {
                reservation.etudiant_ids = load_etudiant_ids(&conn, id)?;
            }
        }

        Ok(reservations)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    Ok(Reservation {
        id: row.get(0)?,
        academic_year: row.get(1)?,
        valid: row.get(2)?,
        etudiant_ids: BTreeSet::new(),
    })
}

fn load_etudiant_ids(conn: &Connection, reservation_id: &str) -> rusqlite::Result<BTreeSet<i64>> {
    let mut stmt =
        conn.prepare("SELECT etudiant_id FROM reservation_etudiants WHERE reservation_id = ?1")?;
    let rows = stmt.query_map(params![reservation_id], |row| row.get(0))?;

    let mut etudiant_ids = BTreeSet::new();
    for etudiant_id in rows {
        etudiant_ids.insert(etudiant_id?);
    }

    Ok(etudiant_ids)
}

impl Repository<Reservation> for SqliteReservationRepository {
    fn find_all(&self) -> Result<Vec<Reservation>> {
        self.query("", &[])
    }

    fn find_by_id(&self, id: &String) -> Result<Option<Reservation>> {
        Ok(self.query("WHERE id = ?1", params![id])?.into_iter().next())
    }

    fn exists_by_id(&self, id: &String) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM reservations WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    /// Generates a ULID for new reservations and rewrites the student links.
    fn save(&self, reservation: &Reservation) -> Result<Reservation> {
        let mut conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn.transaction()?;

        let id = reservation
            .id
            .clone()
            .unwrap_or_else(|| Ulid::new().to_string());

        tx.execute(
            "INSERT INTO reservations (id, academic_year, valid) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET academic_year = excluded.academic_year, valid = excluded.valid",
            params![id, reservation.academic_year, reservation.valid],
        )?;

        tx.execute(
            "DELETE FROM reservation_etudiants WHERE reservation_id = ?1",
            params![id],
        )?;
        for etudiant_id in &reservation.etudiant_ids {
            tx.execute(
                "INSERT INTO reservation_etudiants (reservation_id, etudiant_id) VALUES (?1, ?2)",
                params![id, etudiant_id],
            )?;
        }

        tx.commit()?;

        Ok(Reservation {
            id: Some(id),
            ..reservation.clone()
        })
    }

    fn delete_by_id(&self, id: &String) -> Result<()> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        conn.execute("DELETE FROM reservations WHERE id = ?1", params![id])?;

        Ok(())
    }
}

impl ReservationRepository for SqliteReservationRepository {
    fn find_all_by_academic_year_before_and_valid(
        &self,
        date: NaiveDate,
        valid: bool,
    ) -> Result<Vec<Reservation>> {
        self.query("WHERE academic_year < ?1 AND valid = ?2", params![date, valid])
    }
}
