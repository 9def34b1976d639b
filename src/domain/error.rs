use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,
}

impl DomainError {
    /// Collapse a repository miss into the domain's own not-found error
    pub fn normalize(self) -> Self {
        match self {
            DomainError::Repository(RepositoryError::NotFound) => DomainError::ActivityNotFound,
            other => other,
        }
    }
}
