use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

pub type Description = String;
pub type Schedule = String;

/// Key of an activity in the store, e.g. "Chess Club"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityName(String);
impl ActivityName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Participant identity. Only compared, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);
impl Email {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    description: Description,
    schedule: Schedule,
    max_participants: u32,
    participants: Vec<Email>,
}

impl Activity {
    pub fn new(
        description: Description,
        schedule: Schedule,
        max_participants: u32,
        participants: Vec<Email>,
    ) -> Result<Self, DomainError> {
        for (i, email) in participants.iter().enumerate() {
            if participants[..i].contains(email) {
                return Err(DomainError::AlreadySignedUp);
            }
        }

        Ok(Self {
            description,
            schedule,
            max_participants,
            participants,
        })
    }

    pub fn is_signed_up(&self, email: &Email) -> bool {
        self.participants.contains(email)
    }

    /// Append `email` to the participant list.
    ///
    /// `max_participants` is informational only and is not checked here.
    pub fn sign_up(&mut self, email: Email) -> Result<(), DomainError> {
        if self.is_signed_up(&email) {
            return Err(DomainError::AlreadySignedUp);
        }
        self.participants.push(email);
        Ok(())
    }

    /// Remove `email`, keeping the order of everyone else.
    pub fn unregister(&mut self, email: &Email) -> Result<(), DomainError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DomainError::NotSignedUp)?;
        self.participants.remove(position);
        Ok(())
    }

    // getterのみ提供
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn schedule(&self) -> &str {
        &self.schedule
    }
    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }
    pub fn participants(&self) -> &[Email] {
        &self.participants
    }
}
