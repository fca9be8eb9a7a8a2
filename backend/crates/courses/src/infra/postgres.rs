//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::course::Course;
use crate::domain::repository::CourseRepository;
use crate::error::CoursesResult;
use kernel::id::CourseId;

/// PostgreSQL-backed course repository
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CourseRepository for PgCourseRepository {
    async fn create(&self, course: &Course) -> CoursesResult<()> {
        sqlx::query(
            r#"
            INSERT INTO courses (
                course_id,
                name,
                description,
                tags,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(course.course_id.as_uuid())
        .bind(&course.name)
        .bind(&course.description)
        .bind(&course.tags)
        .bind(course.created_at)
        .bind(course.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, course_id: &CourseId) -> CoursesResult<Option<Course>> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT
                course_id,
                name,
                description,
                tags,
                created_at,
                updated_at
            FROM courses
            WHERE course_id = $1
            "#,
        )
        .bind(course_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CourseRow::into_course))
    }

    async fn find_all(&self) -> CoursesResult<Vec<Course>> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT
                course_id,
                name,
                description,
                tags,
                created_at,
                updated_at
            FROM courses
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }

    async fn update(&self, course: &Course) -> CoursesResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE courses SET
                name = $2,
                description = $3,
                tags = $4,
                updated_at = $5
            WHERE course_id = $1
            "#,
        )
        .bind(course.course_id.as_uuid())
        .bind(&course.name)
        .bind(&course.description)
        .bind(&course.tags)
        .bind(course.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, course_id: &CourseId) -> CoursesResult<bool> {
        let deleted = sqlx::query("DELETE FROM courses WHERE course_id = $1")
            .bind(course_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CourseRow {
    course_id: Uuid,
    name: String,
    description: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CourseRow {
    fn into_course(self) -> Course {
        Course {
            course_id: CourseId::from_uuid(self.course_id),
            name: self.name,
            description: self.description,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
