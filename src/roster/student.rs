use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a student within one session
pub type StudentId = Uuid;

/// A single roster entry, immutable once added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Locally-unique generated identifier
    pub id: StudentId,
    /// Display name, trimmed at entry
    pub name: String,
    /// Recorded but not consulted by partitioning
    pub gender: Gender,
    /// Recorded but not consulted by partitioning
    pub level: Level,
    /// Recorded but not consulted by partitioning
    pub leader: bool,
}

impl Student {
    /// Create a student with a fresh id and default attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            gender: Gender::default(),
            level: Level::default(),
            leader: false,
        }
    }
}

/// Self-reported gender, reserved for future weighted grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Unspecified,
    Female,
    Male,
}

/// Rough skill band, reserved for future weighted grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    Low,
    #[default]
    Med,
    High,
}
