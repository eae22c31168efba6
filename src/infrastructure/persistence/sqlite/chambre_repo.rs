use crate::domain::error::DomainError;
use crate::domain::model::{Chambre, ChambreType};
use crate::domain::repository::{ChambreRepository, Repository, Result};
use super::DbConnection;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Row, ToSql};

impl ToSql for ChambreType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ChambreType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

pub struct SqliteChambreRepository {
    conn: DbConnection,
}

impl SqliteChambreRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }

    fn query(&self, filter: &str, params: &[&dyn ToSql]) -> Result<Vec<Chambre>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare(&format!(
            "SELECT id, number, kind, bloc_id FROM chambres {} ORDER BY number ASC, id ASC",
            filter
        ))?;
        let rows = stmt.query_map(params, map_row)?;

        let mut chambres = Vec::new();
        for chambre in rows {
            chambres.push(chambre?);
        }

        Ok(chambres)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Chambre> {
    Ok(Chambre {
        id: row.get(0)?,
        number: row.get(1)?,
        kind: row.get(2)?,
        bloc_id: row.get(3)?,
    })
}

impl Repository<Chambre> for SqliteChambreRepository {
    fn find_all(&self) -> Result<Vec<Chambre>> {
        self.query("", &[])
    }

    fn find_by_id(&self, id: &i64) -> Result<Option<Chambre>> {
        Ok(self.query("WHERE id = ?1", params![id])?.into_iter().next())
    }

    fn exists_by_id(&self, id: &i64) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM chambres WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    fn save(&self, chambre: &Chambre) -> Result<Chambre> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let id = match chambre.id {
            Some(id) => {
                conn.execute(
                    "INSERT INTO chambres (id, number, kind, bloc_id) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                        number = excluded.number,
                        kind = excluded.kind,
                        bloc_id = excluded.bloc_id",
                    params![id, chambre.number, chambre.kind, chambre.bloc_id],
                )?;
                id
            }
            None => {
                conn.execute(
                    "INSERT INTO chambres (number, kind, bloc_id) VALUES (?1, ?2, ?3)",
                    params![chambre.number, chambre.kind, chambre.bloc_id],
                )?;
                conn.last_insert_rowid()
            }
        };

        Ok(Chambre {
            id: Some(id),
            ..chambre.clone()
        })
    }

    fn delete_by_id(&self, id: &i64) -> Result<()> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        conn.execute("DELETE FROM chambres WHERE id = ?1", params![id])?;

        Ok(())
    }
}

impl ChambreRepository for SqliteChambreRepository {
    fn find_all_by_kind(&self, kind: ChambreType) -> Result<Vec<Chambre>> {
        self.query("WHERE kind = ?1", params![kind])
    }

    fn find_all_by_bloc_id(&self, bloc_id: i64) -> Result<Vec<Chambre>> {
        self.query("WHERE bloc_id = ?1", params![bloc_id])
    }
}
