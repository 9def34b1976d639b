use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::activity::{Activity, ActivityName, Email},
    repositories::activity_repository::ActivityRepository,
};

/// Process-local activity store. Clones share the same map.
#[derive(Clone)]
pub struct InMemoryActivityRepository {
    activities: Arc<RwLock<IndexMap<ActivityName, Activity>>>,
}

impl InMemoryActivityRepository {
    pub fn new(activities: IndexMap<ActivityName, Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find_all(&self) -> Result<IndexMap<ActivityName, Activity>, RepositoryError> {
        Ok(self.activities.read().await.clone())
    }

    async fn add_participant(
        &self,
        name: &ActivityName,
        email: Email,
    ) -> Result<(), DomainError> {
        // check and push under one write guard
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(RepositoryError::NotFound)?;
        activity.sign_up(email)?;
        debug!(activity = %name, count = activity.participants().len(), "participant added");
        Ok(())
    }

    async fn remove_participant(
        &self,
        name: &ActivityName,
        email: &Email,
    ) -> Result<(), DomainError> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(RepositoryError::NotFound)?;
        activity.unregister(email)?;
        debug!(activity = %name, count = activity.participants().len(), "participant removed");
        Ok(())
    }
}
