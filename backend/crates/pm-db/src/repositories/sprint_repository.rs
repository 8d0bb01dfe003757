use crate::repositories::project_repository::project_from_row;
use crate::repositories::row::{millis_column, uuid_column};
use crate::{DbError, Result as DbErrorResult};

use pm_core::{Sprint, SprintStatus, SprintWithProject};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SprintRepository {
    pool: SqlitePool,
}

impl SprintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, sprint: &Sprint) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO pm_sprints (id, project_id, name, start_date, end_date, status, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sprint.id.to_string())
        .bind(sprint.project_id.to_string())
        .bind(&sprint.name)
        .bind(sprint.start_date.timestamp_millis())
        .bind(sprint.end_date.timestamp_millis())
        .bind(sprint.status.as_str())
        .bind(sprint.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Sprint>> {
        let row = sqlx::query(
            r#"
                SELECT id, project_id, name, start_date, end_date, status, created_at
                FROM pm_sprints
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| sprint_from_row(&r)).transpose()
    }

    /// Load a sprint and its owning project in one query
    pub async fn find_by_id_with_project(
        &self,
        id: Uuid,
    ) -> DbErrorResult<Option<SprintWithProject>> {
        let row = sqlx::query(
            r#"
                SELECT s.id, s.project_id, s.name, s.start_date, s.end_date, s.status, s.created_at,
                       p.organization_id AS project_organization_id,
                       p.name            AS project_name,
                       p.key             AS project_key,
                       p.description     AS project_description,
                       p.created_at      AS project_created_at
                FROM pm_sprints s
                INNER JOIN pm_projects p ON p.id = s.project_id
                WHERE s.id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<SprintWithProject> {
            Ok(SprintWithProject {
                sprint: sprint_from_row(&r)?,
                // `project_id` doubles as the joined project's id (join key)
                project: project_from_row(&r, "project_")?,
            })
        })
        .transpose()
    }

    /// Write a new status and nothing else. Returns the row as stored after
    /// the write, or `None` when no sprint has this id.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: SprintStatus,
    ) -> DbErrorResult<Option<Sprint>> {
        let row = sqlx::query(
            r#"
                UPDATE pm_sprints
                SET status = ?
                WHERE id = ?
                RETURNING id, project_id, name, start_date, end_date, status, created_at
            "#,
        )
        .bind(status.as_str())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| sprint_from_row(&r)).transpose()
    }
}

fn sprint_from_row(row: &SqliteRow) -> DbErrorResult<Sprint> {
    let id: String = row.try_get("id")?;
    let project_id: String = row.try_get("project_id")?;
    let start_date: i64 = row.try_get("start_date")?;
    let end_date: i64 = row.try_get("end_date")?;
    let status: String = row.try_get("status")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Sprint {
        id: uuid_column(&id, "sprint.id")?,
        project_id: uuid_column(&project_id, "sprint.project_id")?,
        name: row.try_get("name")?,
        start_date: millis_column(start_date, "sprint.start_date")?,
        end_date: millis_column(end_date, "sprint.end_date")?,
        status: SprintStatus::from_str(&status).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid SprintStatus in sprint.status: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: millis_column(created_at, "sprint.created_at")?,
    })
}
