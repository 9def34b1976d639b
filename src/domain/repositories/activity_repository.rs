use async_trait::async_trait;
use indexmap::IndexMap;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::activity::{Activity, ActivityName, Email},
};

/// Store of activities keyed by name. Implementations must apply each
/// participant change atomically with its existence and membership checks.
#[async_trait]
pub trait ActivityRepository {
    /// Snapshot of every activity in store order
    async fn find_all(&self) -> Result<IndexMap<ActivityName, Activity>, RepositoryError>;

    async fn add_participant(&self, name: &ActivityName, email: Email)
    -> Result<(), DomainError>;

    async fn remove_participant(
        &self,
        name: &ActivityName,
        email: &Email,
    ) -> Result<(), DomainError>;
}
