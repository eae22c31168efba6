use crate::domain::error::DomainError;
use crate::domain::model::Foyer;
use crate::domain::repository::{FoyerRepository, Repository, Result};
use super::DbConnection;
use rusqlite::{params, Connection, Row};

pub struct SqliteFoyerRepository {
    conn: DbConnection,
}

impl SqliteFoyerRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Foyer> {
    Ok(Foyer {
        id: row.get(0)?,
        name: row.get(1)?,
        capacity: row.get(2)?,
    })
}

/// Insert or update a foyer on `conn`, returning it with its id set.
///
/// Shared with the university repository, which saves its owned foyer in
/// the same transaction.
pub(super) fn upsert_foyer(conn: &Connection, foyer: &Foyer) -> rusqlite::Result<Foyer> {
    let id = match foyer.id {
        Some(id) => {
            conn.execute(
                "INSERT INTO foyers (id, name, capacity) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET name = excluded.name, capacity = excluded.capacity",
                params![id, foyer.name, foyer.capacity],
            )?;
            id
        }
        None => {
            conn.execute(
                "INSERT INTO foyers (name, capacity) VALUES (?1, ?2)",
                params![foyer.name, foyer.capacity],
            )?;
            conn.last_insert_rowid()
        }
    };

    Ok(Foyer {
        id: Some(id),
        ..foyer.clone()
    })
}

impl Repository<Foyer> for SqliteFoyerRepository {
    fn find_all(&self) -> Result<Vec<Foyer>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare("SELECT id, name, capacity FROM foyers ORDER BY id ASC")?;
        let rows = stmt.query_map([], map_row)?;

        let mut foyers = Vec::new();
        for foyer in rows {
            foyers.push(foyer?);
        }

        Ok(foyers)
    }

    fn find_by_id(&self, id: &i64) -> Result<Option<Foyer>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare("SELECT id, name, capacity FROM foyers WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(map_row(row)?))
        } else {
            Ok(None)
        }
    }

    fn exists_by_id(&self, id: &i64) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM foyers WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    fn save(&self, foyer: &Foyer) -> Result<Foyer> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(upsert_foyer(&conn, foyer)?)
    }

    fn delete_by_id(&self, id: &i64) -> Result<()> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        conn.execute("DELETE FROM foyers WHERE id = ?1", params![id])?;

        Ok(())
    }
}

impl FoyerRepository for SqliteFoyerRepository {}
