
use rand::Rng;
use tracing::debug;

use crate::partition::{partition, Group, PartitionError};
use crate::roster::{Roster, StudentId};
use crate::theme::ThemeMode;

/// Explicit state for one class-grouping session.
///
/// Everything the presentation layer shows lives here and is passed down to
/// rendering code; nothing is ambient. The whole session is discarded when
/// the user starts over or quits.
#[derive(Debug, Default)]
pub struct ClassSession {
    roster: Roster,
    group_count: Option<usize>,
    groups: Vec<Group>,
    theme: ThemeMode,
}

impl ClassSession {
    /// Create a blank session with the default (dark) theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a blank session rendering with the given theme
    pub fn with_theme(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Add a student to the roster. Blank names are a no-op.
    pub fn add_student(&mut self, name: &str) -> Option<StudentId> {
        self.roster.add(name)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Record the requested number of groups
    pub fn set_group_count(&mut self, count: usize) {
        self.group_count = Some(count);
    }

    pub fn group_count(&self) -> Option<usize> {
        self.group_count
    }

    /// The guard the entry screen applies before offering generation:
    /// more than one student, and a group count between 1 and the roster size
    pub fn can_generate(&self) -> bool {
        match self.group_count {
            Some(count) => self.roster.len() > 1 && count >= 1 && count <= self.roster.len(),
            None => false,
        }
    }

    /// Generate (or regenerate) the groups, replacing the previous set.
    ///
    /// Every generation re-applies default names, so renames do not survive
    /// a reshuffle.
    pub fn generate<R>(&mut self, rng: &mut R) -> Result<&[Group], PartitionError>
    where
        R: Rng + ?Sized,
    {
        let count = self.group_count.ok_or(PartitionError::ZeroGroups)?;
        let groups = partition(self.roster.students(), count, rng)?;
        debug!(
            groups = groups.len(),
            students = self.roster.len(),
            "partition generated"
        );
        self.groups = groups;
        Ok(&self.groups)
    }

    /// Current groups; empty until `generate` has run
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Rename the group at `index`.
    ///
    /// The name is trimmed. Blank names and out-of-range indexes are silent
    /// no-ops; membership is never affected.
    pub fn rename_group(&mut self, index: usize, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(group) = self.groups.get_mut(index) {
            debug!(index, name, "group renamed");
            group.rename(name);
        }
    }

    /// Drop the generated groups, keeping the roster (leaving the results view)
    pub fn clear_groups(&mut self) {
        self.groups.clear();
    }

    /// Discard everything except the theme choice
    pub fn reset(&mut self) {
        let theme = self.theme;
        *self = Self {
            theme,
            ..Self::default()
        };
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }
}
