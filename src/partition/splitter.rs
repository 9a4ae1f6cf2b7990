use rand::seq::SliceRandom;
use rand::Rng;

use crate::roster::Student;

use super::{Group, PartitionError};

/// Randomly partition `students` into `num_groups` groups of near-equal size.
///
/// Produces a uniformly random permutation of the input (Fisher-Yates via
/// `SliceRandom::shuffle`), then cuts it into `num_groups` contiguous slices.
/// With `base = N / K` and `remainder = N % K`, the first `remainder` groups
/// receive `base + 1` members and the rest receive `base`, so sizes differ by
/// at most one.
///
/// The input is never mutated. Each call draws fresh randomness from `rng`,
/// so repeated calls return different assignments unless `rng` is seeded.
///
/// Groups come back default-named "Group 1", "Group 2", ... in output order.
pub fn partition<R>(
    students: &[Student],
    num_groups: usize,
    rng: &mut R,
) -> Result<Vec<Group>, PartitionError>
where
    R: Rng + ?Sized,
{
    if students.is_empty() {
        return Err(PartitionError::NoStudents);
    }
    if num_groups == 0 {
        return Err(PartitionError::ZeroGroups);
    }
    if num_groups > students.len() {
        return Err(PartitionError::TooManyGroups {
            requested: num_groups,
            available: students.len(),
        });
    }

    // 1. Uniform random permutation of a copy of the roster
    let mut shuffled = students.to_vec();
    shuffled.shuffle(rng);

    // 2. Cut into contiguous slices, front-loading the remainder
    let base = shuffled.len() / num_groups;
    let remainder = shuffled.len() % num_groups;

    let mut members = shuffled.into_iter();
    let mut groups = Vec::with_capacity(num_groups);

    for index in 0..num_groups {
        let size = if index < remainder { base + 1 } else { base };
        let group_members: Vec<Student> = members.by_ref().take(size).collect();
        groups.push(Group::new(Group::default_name(index), group_members));
    }

    Ok(groups)
}
