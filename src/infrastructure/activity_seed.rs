use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    error::DomainError,
    models::activity::{Activity, ActivityName, Email},
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid activity {name:?}: {source}")]
    InvalidActivity {
        name: String,
        #[source]
        source: DomainError,
    },
}

/// One entry of a seed file; same shape as an entry of `GET /activities`
#[derive(Debug, Deserialize)]
struct SeedActivity {
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

/// Read activities from a JSON object keyed by activity name.
pub fn load_from_file(path: &Path) -> Result<IndexMap<ActivityName, Activity>, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    parse(&raw)
}

pub fn parse(raw: &str) -> Result<IndexMap<ActivityName, Activity>, SeedError> {
    let entries: IndexMap<String, SeedActivity> = serde_json::from_str(raw)?;

    entries
        .into_iter()
        .map(|(name, seed)| {
            let participants = seed.participants.into_iter().map(Email::new).collect();
            let activity = Activity::new(
                seed.description,
                seed.schedule,
                seed.max_participants,
                participants,
            )
            .map_err(|source| SeedError::InvalidActivity {
                name: name.clone(),
                source,
            })?;
            Ok((ActivityName::new(name), activity))
        })
        .collect()
}

/// The activities the school starts every term with.
pub fn default_activities() -> IndexMap<ActivityName, Activity> {
    let seed: [(&str, &str, &str, u32, [&str; 2]); 9] = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            ["liam@mergington.edu", "noah@mergington.edu"],
        ),
        (
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            ["ava@mergington.edu", "mia@mergington.edu"],
        ),
        (
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            ["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        (
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            ["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        (
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            ["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            ["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ];

    seed.into_iter()
        .map(|(name, description, schedule, max, participants)| {
            let activity = Activity::new(
                description.to_string(),
                schedule.to_string(),
                max,
                participants.into_iter().map(Email::new).collect(),
            )
            .expect("built-in seed has unique participants");
            (ActivityName::new(name), activity)
        })
        .collect()
}
