use crate::domain::{
    error::DomainError,
    models::activity::{ActivityName, Email},
    repositories::activity_repository::ActivityRepository,
};

#[derive(Debug)]
pub struct UnregisterResult {
    pub message: String,
}

pub struct UnregisterUsecase<R: ActivityRepository> {
    activity_repository: R,
}

impl<R: ActivityRepository> UnregisterUsecase<R> {
    pub fn new(activity_repository: R) -> Self {
        Self {
            activity_repository,
        }
    }

    pub async fn unregister(
        &self,
        activity_name: String,
        email: String,
    ) -> Result<UnregisterResult, DomainError>
    where
        R: Send + Sync,
    {
        let name = ActivityName::new(activity_name);
        let email = Email::new(email);

        self.activity_repository
            .remove_participant(&name, &email)
            .await
            .map_err(DomainError::normalize)?;

        Ok(UnregisterResult {
            message: format!("Unregistered {} from {}", email, name),
        })
    }
}
