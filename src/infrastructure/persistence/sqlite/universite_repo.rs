use crate::domain::error::DomainError;
use crate::domain::model::{Foyer, Universite};
use crate::domain::repository::{Repository, Result, UniversiteRepository};
use super::foyer_repo::upsert_foyer;
use super::DbConnection;
use rusqlite::{params, OptionalExtension, Row};

const SELECT_UNIVERSITES: &str =
    "SELECT u.id, u.name, u.address, u.description, u.contact_number, f.id, f.name, f.capacity
     FROM universites u LEFT JOIN foyers f ON f.id = u.foyer_id";

pub struct SqliteUniversiteRepository {
    conn: DbConnection,
}

impl SqliteUniversiteRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }

    fn query(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Universite>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, map_row)?;

        let mut universites = Vec::new();
        for universite in rows {
            universites.push(universite?);
        }

        Ok(universites)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Universite> {
    let foyer_id: Option<i64> = row.get(5)?;
    let foyer = match foyer_id {
        Some(id) => Some(Foyer {
            id: Some(id),
            name: row.get(6)?,
            capacity: row.get(7)?,
        }),
        None => None,
    };

    Ok(Universite {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        description: row.get(3)?,
        contact_number: row.get(4)?,
        foyer,
    })
}

impl Repository<Universite> for SqliteUniversiteRepository {
    fn find_all(&self) -> Result<Vec<Universite>> {
        self.query(&format!("{} ORDER BY u.id ASC", SELECT_UNIVERSITES), &[])
    }

    fn find_by_id(&self, id: &i64) -> Result<Option<Universite>> {
        let universites = self.query(&format!("{} WHERE u.id = ?1", SELECT_UNIVERSITES), params![id])?;
        Ok(universites.into_iter().next())
    }

    fn exists_by_id(&self, id: &i64) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM universites WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    /// Saves the owned foyer first, then the university row, in one transaction.
    fn save(&self, universite: &Universite) -> Result<Universite> {
        let mut conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn.transaction()?;

        let foyer = match &universite.foyer {
            Some(foyer) => Some(upsert_foyer(&tx, foyer)?),
            None => None,
        };
        let foyer_id = foyer.as_ref().and_then(|f| f.id);

        let id = match universite.id {
            Some(id) => {
                tx.execute(
                    "INSERT INTO universites (id, name, address, description, contact_number, foyer_id)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        address = excluded.address,
                        description = excluded.description,
                        contact_number = excluded.contact_number,
                        foyer_id = excluded.foyer_id",
                    params![
                        id,
                        universite.name,
                        universite.address,
                        universite.description,
                        universite.contact_number,
                        foyer_id,
                    ],
                )?;
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO universites (name, address, description, contact_number, foyer_id)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        universite.name,
                        universite.address,
                        universite.description,
                        universite.contact_number,
                        foyer_id,
                    ],
                )?;
                tx.last_insert_rowid()
            }
        };

        tx.commit()?;

        Ok(Universite {
            id: Some(id),
            foyer,
            ..universite.clone()
        })
    }

    /// Deletes the university and its owned foyer in one transaction.
    fn delete_by_id(&self, id: &i64) -> Result<()> {
        let mut conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn.transaction()?;

        let foyer_id: Option<i64> = tx
            .query_row(
                "SELECT foyer_id FROM universites WHERE id = ?1",
                params![id],
                |row| row.get::<_, Option<i64>>(0),
            )
            .optional()?
            .flatten();

        tx.execute("DELETE FROM universites WHERE id = ?1", params![id])?;
        if let Some(foyer_id) = foyer_id {
            tx.execute("DELETE FROM foyers WHERE id = ?1", params![foyer_id])?;
            tracing::debug!("Cascaded delete of Foyer {} from Universite {}", foyer_id, id);
        }

        tx.commit()?;

        Ok(())
    }
}

impl UniversiteRepository for SqliteUniversiteRepository {
    fn find_by_name(&self, name: &str) -> Result<Vec<Universite>> {
        self.query(
            &format!("{} WHERE u.name = ?1 ORDER BY u.id ASC", SELECT_UNIVERSITES),
            params![name],
        )
    }
}
