use indexmap::IndexMap;

use crate::domain::{
    error::DomainError,
    models::activity::{Activity, ActivityName},
    repositories::activity_repository::ActivityRepository,
};

pub struct ListActivitiesUsecase<R: ActivityRepository> {
    activity_repository: R,
}

impl<R: ActivityRepository> ListActivitiesUsecase<R> {
    pub fn new(activity_repository: R) -> Self {
        Self {
            activity_repository,
        }
    }

    pub async fn list_activities(&self) -> Result<IndexMap<ActivityName, Activity>, DomainError>
    where
        R: Send + Sync,
    {
        Ok(self.activity_repository.find_all().await?)
    }
}
