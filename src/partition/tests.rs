use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::roster::{Roster, StudentId};

fn roster_of(names: &[&str]) -> Roster {
    let mut roster = Roster::new();
    for name in names {
        roster.add(name);
    }
    roster
}

fn member_names(group: &Group) -> Vec<String> {
    group.members().iter().map(|s| s.name.clone()).collect()
}

/// Membership signature: ids per group, in assignment order
fn signature(groups: &[Group]) -> Vec<Vec<StudentId>> {
    groups
        .iter()
        .map(|g| g.members().iter().map(|s| s.id).collect())
        .collect()
}

#[test]
fn test_five_students_two_groups() {
    let roster = roster_of(&["Alice", "Bob", "Carol", "Dave", "Eve"]);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let groups = partition(roster.students(), 2, &mut rng).unwrap();

    let mut sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![2, 3]);

    let mut all_names: Vec<String> = groups.iter().flat_map(|g| member_names(g)).collect();
    all_names.sort();
    assert_eq!(all_names, vec!["Alice", "Bob", "Carol", "Dave", "Eve"]);
}

#[test]
fn test_even_split() {
    let roster = roster_of(&["A", "B", "C", "D", "E", "F"]);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let groups = partition(roster.students(), 3, &mut rng).unwrap();

    assert_eq!(groups.len(), 3);
    for group in &groups {
        assert_eq!(group.len(), 2);
    }
}

#[test]
fn test_one_group_per_student() {
    let roster = roster_of(&["A", "B", "C", "D"]);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let groups = partition(roster.students(), 4, &mut rng).unwrap();

    assert_eq!(groups.len(), 4);
    for group in &groups {
        assert_eq!(group.len(), 1);
    }
}

#[test]
fn test_size_invariants_hold_for_all_valid_inputs() {
    let names: Vec<String> = (0..12).map(|i| format!("Student {i}")).collect();

    for n in 1..=names.len() {
        let name_refs: Vec<&str> = names[..n].iter().map(|s| s.as_str()).collect();
        let roster = roster_of(&name_refs);

        for k in 1..=n {
            let mut rng = ChaCha8Rng::seed_from_u64((n * 100 + k) as u64);
            let groups = partition(roster.students(), k, &mut rng).unwrap();

            assert_eq!(groups.len(), k);
            assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), n);

            let base = n / k;
            let remainder = n % k;
            let larger = groups.iter().filter(|g| g.len() == base + 1).count();
            assert_eq!(larger, remainder, "N={n} K={k}");
            for group in &groups {
                assert!(
                    group.len() == base || group.len() == base + 1,
                    "N={n} K={k} produced a group of size {}",
                    group.len()
                );
            }
        }
    }
}

#[test]
fn test_union_matches_roster_exactly() {
    let roster = roster_of(&["A", "B", "C", "D", "E", "F", "G"]);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let groups = partition(roster.students(), 3, &mut rng).unwrap();

    let mut grouped_ids: Vec<StudentId> = groups
        .iter()
        .flat_map(|g| g.members().iter().map(|s| s.id))
        .collect();
    grouped_ids.sort();

    let mut roster_ids: Vec<StudentId> = roster.students().iter().map(|s| s.id).collect();
    roster_ids.sort();

    assert_eq!(grouped_ids, roster_ids);
}

#[test]
fn test_default_names_in_output_order() {
    let roster = roster_of(&["A", "B", "C"]);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let groups = partition(roster.students(), 3, &mut rng).unwrap();

    let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
    assert_eq!(names, vec!["Group 1", "Group 2", "Group 3"]);
}

#[test]
fn test_seeded_rng_reproduces_assignment() {
    let roster = roster_of(&["A", "B", "C", "D", "E"]);

    let mut first_rng = ChaCha8Rng::seed_from_u64(99);
    let mut second_rng = ChaCha8Rng::seed_from_u64(99);

    let first = partition(roster.students(), 2, &mut first_rng).unwrap();
    let second = partition(roster.students(), 2, &mut second_rng).unwrap();

    assert_eq!(signature(&first), signature(&second));
}

#[test]
fn test_many_trials_visit_distinct_assignments() {
    let roster = roster_of(&["A", "B", "C", "D", "E", "F"]);

    let mut roster_ids: Vec<StudentId> = roster.students().iter().map(|s| s.id).collect();
    roster_ids.sort();

    let mut seen: HashSet<Vec<Vec<StudentId>>> = HashSet::new();
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let groups = partition(roster.students(), 2, &mut rng).unwrap();

        // Every trial must still be a valid partition
        assert_eq!(groups.len(), 2);
        let mut grouped_ids: Vec<StudentId> = groups
            .iter()
            .flat_map(|g| g.members().iter().map(|s| s.id))
            .collect();
        grouped_ids.sort();
        assert_eq!(grouped_ids, roster_ids);

        seen.insert(signature(&groups));
    }

    assert!(
        seen.len() > 1,
        "20 trials never produced a second distinct assignment"
    );
}

#[test]
fn test_input_is_not_mutated() {
    let roster = roster_of(&["A", "B", "C", "D"]);
    let before: Vec<StudentId> = roster.students().iter().map(|s| s.id).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    partition(roster.students(), 2, &mut rng).unwrap();

    let after: Vec<StudentId> = roster.students().iter().map(|s| s.id).collect();
    assert_eq!(before, after);
}

#[test]
fn test_zero_groups_rejected() {
    let roster = roster_of(&["A", "B"]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let err = partition(roster.students(), 0, &mut rng).unwrap_err();
    assert_eq!(err, PartitionError::ZeroGroups);
}

#[test]
fn test_more_groups_than_students_rejected() {
    let roster = roster_of(&["A", "B", "C"]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let err = partition(roster.students(), 5, &mut rng).unwrap_err();
    assert_eq!(
        err,
        PartitionError::TooManyGroups {
            requested: 5,
            available: 3
        }
    );
}

#[test]
fn test_empty_roster_rejected() {
    let roster = Roster::new();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let err = partition(roster.students(), 1, &mut rng).unwrap_err();
    assert_eq!(err, PartitionError::NoStudents);
}
