mod error;
mod group;
mod splitter;

#[cfg(test)]
mod tests;

pub use error::PartitionError;
pub use group::Group;
pub use splitter::partition;
