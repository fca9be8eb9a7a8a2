//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::{UsersError, UsersResult};
use kernel::id::UserId;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> UsersResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> UsersResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> UsersResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> UsersResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_all(&self) -> UsersResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn update(&self, user: &User) -> UsersResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE users SET
                name = $2,
                email = $3,
                updated_at = $4
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, user_id: &UserId) -> UsersResult<bool> {
        let deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
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
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> UsersResult<User> {
        let password = UserPassword::from_phc_string(self.password_hash)
            .map_err(|e| UsersError::Internal(e.to_string()))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            email: Email::from_db(self.email),
            password,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
