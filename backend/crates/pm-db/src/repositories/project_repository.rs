use crate::repositories::row::{millis_column, uuid_column};
use crate::Result as DbErrorResult;

use pm_core::Project;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO pm_projects (id, organization_id, name, key, description, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.organization_id)
        .bind(&project.name)
        .bind(&project.key)
        .bind(&project.description)
        .bind(project.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(
            r#"
                SELECT id, organization_id, name, key, description, created_at
                FROM pm_projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| project_from_row(&r, "")).transpose()
    }
}

/// Decode a project from `row`. `prefix` is prepended to every column name,
/// which lets joined queries alias project columns (e.g. `project_name`).
pub(crate) fn project_from_row(row: &SqliteRow, prefix: &str) -> DbErrorResult<Project> {
    let col = |name: &str| format!("{prefix}{name}");

    let id: String = row.try_get(col("id").as_str())?;
    let created_at: i64 = row.try_get(col("created_at").as_str())?;

    Ok(Project {
        id: uuid_column(&id, "project.id")?,
        organization_id: row.try_get(col("organization_id").as_str())?,
        name: row.try_get(col("name").as_str())?,
        key: row.try_get(col("key").as_str())?,
        description: row.try_get(col("description").as_str())?,
        created_at: millis_column(created_at, "project.created_at")?,
    })
}
