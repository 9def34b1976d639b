use crate::domain::{
    error::DomainError,
    models::activity::{ActivityName, Email},
    repositories::activity_repository::ActivityRepository,
};

#[derive(Debug)]
pub struct SignupResult {
    pub message: String,
}

pub struct SignupUsecase<R: ActivityRepository> {
    activity_repository: R,
}

impl<R: ActivityRepository> SignupUsecase<R> {
    pub fn new(activity_repository: R) -> Self {
        Self {
            activity_repository,
        }
    }

    pub async fn sign_up(
        &self,
        activity_name: String,
        email: String,
    ) -> Result<SignupResult, DomainError>
    where
        R: Send + Sync,
    {
        let name = ActivityName::new(activity_name);
        let email = Email::new(email);

        self.activity_repository
            .add_participant(&name, email.clone())
            .await
            .map_err(DomainError::normalize)?;

        Ok(SignupResult {
            message: format!("Signed up {} for {}", email, name),
        })
    }
}
