use serde::{Deserialize, Serialize};

use crate::roster::Student;

/// One output bucket of a partition.
///
/// The display name can be replaced at any time; membership is fixed once
/// the group is generated. Regenerating a partition replaces the whole set
/// of groups rather than mutating any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    name: String,
    members: Vec<Student>,
}

impl Group {
    /// Create a group with the given name and members
    pub fn new(name: impl Into<String>, members: Vec<Student>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Default display name for the group at `index`: "Group 1", "Group 2", ...
    pub fn default_name(index: usize) -> String {
        format!("Group {}", index + 1)
    }

    /// Current display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the display name. Membership is unaffected.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Members in assignment order
    pub fn members(&self) -> &[Student] {
        &self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
