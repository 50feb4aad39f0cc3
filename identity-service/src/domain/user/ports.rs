use async_trait::async_trait;

use crate::domain::user::errors::PersistenceError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Persistence contract for the user collection.
///
/// The error policy is deliberately asymmetric and must stay that way:
/// every read operation absorbs storage faults (logging them and
/// reporting "not found" / `false` / an empty list), while `save`
/// propagates faults as [`PersistenceError`]. Unifying the two paths
/// would silently change observable behavior.
///
/// Uniqueness of username and email is advisory only: `exists_by_*`
/// support check-then-insert in the flows, and no implementation may add
/// a storage-level unique constraint on its own.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Look up a user by surrogate id. Storage faults read as not found.
    async fn find_by_id(&self, id: &UserId) -> Option<User>;

    /// Look up a user by username. Storage faults read as not found.
    async fn find_by_username(&self, username: &str) -> Option<User>;

    /// Look up a user by email. Storage faults read as not found.
    async fn find_by_email(&self, email: &str) -> Option<User>;

    /// All users, newest first. Best-effort: storage faults yield a
    /// partial or empty list.
    async fn find_all(&self) -> Vec<User>;

    /// Persist a user.
    ///
    /// With `id` unset, inserts a new record and returns the user with
    /// the store-assigned id. With `id` set, fully replaces the record
    /// matching that id (not a partial merge).
    ///
    /// # Errors
    /// * `PersistenceError` - Any storage fault during the write
    async fn save(&self, user: User) -> Result<User, PersistenceError>;

    /// Delete a user by id.
    ///
    /// # Returns
    /// True iff a record existed and was removed; storage faults yield
    /// false.
    async fn delete_by_id(&self, id: &UserId) -> bool;

    /// Advisory uniqueness check. Storage faults yield false.
    async fn exists_by_username(&self, username: &str) -> bool;

    /// Advisory uniqueness check. Storage faults yield false.
    async fn exists_by_email(&self, email: &str) -> bool;
}
