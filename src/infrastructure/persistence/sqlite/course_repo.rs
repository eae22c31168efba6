use crate::domain::error::DomainError;
use crate::domain::model::Course;
use crate::domain::repository::{CourseRepository, Repository, Result};
use super::DbConnection;
use rusqlite::{params, Connection, Row};
use std::collections::BTreeSet;

pub struct SqliteCourseRepository {
    conn: DbConnection,
}

impl SqliteCourseRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        etudiant_ids: BTreeSet::new(),
    })
}

fn load_etudiant_ids(conn: &Connection, course_id: i64) -> rusqlite::Result<BTreeSet<i64>> {
    let mut stmt = conn.prepare("SELECT etudiant_id FROM etudiant_courses WHERE course_id = ?1")?;
    let rows = stmt.query_map(params![course_id], |row| row.get(0))?;

    let mut etudiant_ids = BTreeSet::new();
    for etudiant_id in rows {
        etudiant_ids.insert(etudiant_id?);
    }

    Ok(etudiant_ids)
}

impl Repository<Course> for SqliteCourseRepository {
    fn find_all(&self) -> Result<Vec<Course>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare("SELECT id, name, description FROM courses ORDER BY id ASC")?;
        let rows = stmt.query_map([], map_row)?;

        let mut courses = Vec::new();
        for course in rows {
            let mut course = course?;
            if let Some(id) = course.id {
                course.etudiant_ids = load_etudiant_ids(&conn, id)?;
            }
            courses.push(course);
        }

        Ok(courses)
    }

    fn find_by_id(&self, id: &i64) -> Result<Option<Course>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare("SELECT id, name, description FROM courses WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            let mut course = map_row(row)?;
            course.etudiant_ids = load_etudiant_ids(&conn, *id)?;
            Ok(Some(course))
        } else {
            Ok(None)
        }
    }

    fn exists_by_id(&self, id: &i64) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    /// Enrolments are owned by the student side; `etudiant_ids` is reloaded, not written.
    fn save(&self, course: &Course) -> Result<Course> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let id = match course.id {
            Some(id) => {
                conn.execute(
                    "INSERT INTO courses (id, name, description) VALUES (?1, ?2, ?3)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name, description = excluded.description",
                    params![id, course.name, course.description],
                )?;
                id
            }
            None => {
                conn.execute(
                    "INSERT INTO courses (name, description) VALUES (?1, ?2)",
                    params![course.name, course.description],
                )?;
                conn.last_insert_rowid()
            }
        };

        let etudiant_ids = load_etudiant_ids(&conn, id)?;

        Ok(Course {
            id: Some(id),
            etudiant_ids,
            ..course.clone()
        })
    }

    fn delete_by_id(&self, id: &i64) -> Result<()> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        conn.execute("DELETE FROM courses WHERE id = ?1", params![id])?;

        Ok(())
    }
}

impl CourseRepository for SqliteCourseRepository {}
