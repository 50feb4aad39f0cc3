use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::user::errors::PersistenceError;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserStore;

/// PostgreSQL-backed [`UserStore`].
///
/// The pool is constructed once at process start and shared across
/// request handlers; sqlx handles connection pooling internally.
///
/// Reads absorb storage faults (logged, reported as not found) while
/// writes propagate them. The `users` table carries no unique indexes:
/// uniqueness stays an application-level check-then-insert.
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_by_column(&self, column: &'static str, value: &str) -> Option<User> {
        let query = format!(
            "SELECT id, username, email, password_hash, role, created_at, updated_at \
             FROM users WHERE {} = $1",
            column
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await;

        match row {
            Ok(row) => row.and_then(|r| decode_user(&r)),
            Err(e) => {
                tracing::error!(column, value, error = %e, "Error finding user, treating as not found");
                None
            }
        }
    }

    async fn exists_by_column(&self, column: &'static str, value: &str) -> bool {
        let query = format!("SELECT 1 FROM users WHERE {} = $1 LIMIT 1", column);

        match sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => row.is_some(),
            Err(e) => {
                tracing::error!(column, value, error = %e, "Error checking existence, treating as absent");
                false
            }
        }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_id(&self, id: &UserId) -> Option<User> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, role, created_at, updated_at \
             FROM users WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await;

        match row {
            Ok(row) => row.and_then(|r| decode_user(&r)),
            Err(e) => {
                tracing::error!(user_id = %id, error = %e, "Error finding user by id, treating as not found");
                None
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        self.find_by_column("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.find_by_column("email", email).await
    }

    async fn find_all(&self) -> Vec<User> {
        let rows = sqlx::query(
            "SELECT id, username, email, password_hash, role, created_at, updated_at \
             FROM users ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await;

        match rows {
            Ok(rows) => rows.iter().filter_map(decode_user).collect(),
            Err(e) => {
                tracing::error!(error = %e, "Error listing users, returning empty list");
                Vec::new()
            }
        }
    }

    async fn save(&self, mut user: User) -> Result<User, PersistenceError> {
        match user.id {
            Some(id) => {
                // Whole-record replace, never a partial merge. A vanished
                // row is not a write fault.
                sqlx::query(
                    "UPDATE users \
                     SET username = $2, email = $3, password_hash = $4, role = $5, \
                         created_at = $6, updated_at = $7 \
                     WHERE id = $1",
                )
                .bind(id.0)
                .bind(&user.username)
                .bind(&user.email)
                .bind(&user.password_hash)
                .bind(user.role.as_str())
                .bind(user.created_at)
                .bind(user.updated_at)
                .execute(&self.pool)
                .await
                .map_err(|e| PersistenceError::Database(e.to_string()))?;

                tracing::info!(user_id = %id, username = %user.username, "Updated user");
            }
            None => {
                let row = sqlx::query(
                    "INSERT INTO users (username, email, password_hash, role, created_at, updated_at) \
                     VALUES ($1, $2, $3, $4, $5, $6) \
                     RETURNING id",
                )
                .bind(&user.username)
                .bind(&user.email)
                .bind(&user.password_hash)
                .bind(user.role.as_str())
                .bind(user.created_at)
                .bind(user.updated_at)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| PersistenceError::Database(e.to_string()))?;

                let id: Uuid = row
                    .try_get("id")
                    .map_err(|e| PersistenceError::Database(e.to_string()))?;
                user.id = Some(UserId(id));

                tracing::info!(user_id = %id, username = %user.username, "Created new user");
            }
        }

        Ok(user)
    }

    async fn delete_by_id(&self, id: &UserId) -> bool {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => {
                let deleted = done.rows_affected() > 0;
                if deleted {
                    tracing::info!(user_id = %id, "Deleted user");
                }
                deleted
            }
            Err(e) => {
                tracing::error!(user_id = %id, error = %e, "Error deleting user");
                false
            }
        }
    }

    async fn exists_by_username(&self, username: &str) -> bool {
        self.exists_by_column("username", username).await
    }

    async fn exists_by_email(&self, email: &str) -> bool {
        self.exists_by_column("email", email).await
    }
}

/// Defensive decode of a stored row.
///
/// An unreadable column makes this one record unreadable (logged,
/// skipped), an unknown role coerces to USER, and missing timestamps
/// keep the in-memory defaults.
fn decode_user(row: &PgRow) -> Option<User> {
    let decoded: Result<User, sqlx::Error> = (|| {
        let id: Uuid = row.try_get("id")?;
        let username: String = row.try_get("username")?;
        let email: String = row.try_get("email")?;
        let password_hash: String = row.try_get("password_hash")?;
        let role: Option<String> = row.try_get("role")?;
        let created_at: Option<DateTime<Utc>> = row.try_get("created_at")?;
        let updated_at: Option<DateTime<Utc>> = row.try_get("updated_at")?;

        let role = Role::from_store(role.as_deref(), &username);
        let now = Utc::now();

        Ok(User {
            id: Some(UserId(id)),
            username,
            email,
            password_hash,
            role,
            created_at: created_at.unwrap_or(now),
            updated_at: updated_at.unwrap_or(now),
        })
    })();

    match decoded {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::error!(error = %e, "Error decoding stored user record, skipping");
            None
        }
    }
}
