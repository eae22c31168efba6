use crate::domain::error::DomainError;
use crate::domain::model::Bloc;
use crate::domain::repository::{BlocRepository, Repository, Result};
use super::DbConnection;
use rusqlite::{params, Row, ToSql};

pub struct SqliteBlocRepository {
    conn: DbConnection,
}

impl SqliteBlocRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }

    fn query(&self, filter: &str, params: &[&dyn ToSql]) -> Result<Vec<Bloc>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare(&format!(
            "SELECT id, name, capacity, foyer_id FROM blocs {} ORDER BY id ASC",
            filter
        ))?;
        let rows = stmt.query_map(params, map_row)?;

        let mut blocs = Vec::new();
        for bloc in rows {
            blocs.push(bloc?);
        }

        Ok(blocs)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Bloc> {
    Ok(Bloc {
        id: row.get(0)?,
        name: row.get(1)?,
        capacity: row.get(2)?,
        foyer_id: row.get(3)?,
    })
}

impl Repository<Bloc> for SqliteBlocRepository {
    fn find_all(&self) -> Result<Vec<Bloc>> {
        self.query("", &[])
    }

    fn find_by_id(&self, id: &i64) -> Result<Option<Bloc>> {
        Ok(self.query("WHERE id = ?1", params![id])?.into_iter().next())
    }

    fn exists_by_id(&self, id: &i64) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM blocs WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    fn save(&self, bloc: &Bloc) -> Result<Bloc> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let id = match bloc.id {
            Some(id) => {
                conn.execute(
                    "INSERT INTO blocs (id, name, capacity, foyer_id) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        capacity = excluded.capacity,
                        foyer_id = excluded.foyer_id",
                    params![id, bloc.name, bloc.capacity, bloc.foyer_id],
                )?;
                id
            }
            None => {
                conn.execute(
                    "INSERT INTO blocs (name, capacity, foyer_id) VALUES (?1, ?2, ?3)",
                    params![bloc.name, bloc.capacity, bloc.foyer_id],
                )?;
                conn.last_insert_rowid()
            }
        };

        Ok(Bloc {
            id: Some(id),
            ..bloc.clone()
        })
    }

    fn delete_by_id(&self, id: &i64) -> Result<()> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        conn.execute("DELETE FROM blocs WHERE id = ?1", params![id])?;

        Ok(())
    }
}

impl BlocRepository for SqliteBlocRepository {
    fn find_all_by_foyer_is_null(&self) -> Result<Vec<Bloc>> {
        self.query("WHERE foyer_id IS NULL", &[])
    }

    fn find_all_by_name_and_capacity(&self, name: &str, capacity: i64) -> Result<Vec<Bloc>> {
        self.query("WHERE name = ?1 AND capacity = ?2", params![name, capacity])
    }

    fn find_all_by_foyer_id(&self, foyer_id: i64) -> Result<Vec<Bloc>> {
        self.query("WHERE foyer_id = ?1", params![foyer_id])
    }
}
