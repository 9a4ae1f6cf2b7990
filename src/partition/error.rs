use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("Cannot partition an empty roster")]
    NoStudents,

    #[error("Group count must be at least 1")]
    ZeroGroups,

    #[error("Requested {requested} groups but only {available} students are available")]
    TooManyGroups { requested: usize, available: usize },
}
