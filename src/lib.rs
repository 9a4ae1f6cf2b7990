// Public API exports
pub mod commands;
pub mod partition;
pub mod roster;
pub mod session;
pub mod theme;

// Re-export main types for convenience
pub use roster::{Gender, Level, Roster, Student, StudentId};

pub use partition::{partition, Group, PartitionError};

pub use session::ClassSession;

pub use theme::{Theme, ThemeMode};
