use std::collections::HashSet;

use super::*;

#[test]
fn test_add_trims_and_appends() {
    let mut roster = Roster::new();

    let id = roster.add("  Alice  ");

    assert!(id.is_some());
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.students()[0].name, "Alice");
}

#[test]
fn test_blank_name_is_noop() {
    let mut roster = Roster::new();

    assert!(roster.add("").is_none());
    assert!(roster.add("   ").is_none());
    assert!(roster.add("\t\n").is_none());

    assert_eq!(roster.len(), 0);
    assert!(roster.is_empty());
}

#[test]
fn test_insertion_order_preserved() {
    let mut roster = Roster::new();
    roster.add("Alice");
    roster.add("Bob");
    roster.add("Carol");

    let names: Vec<&str> = roster.students().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_ids_are_unique() {
    let mut roster = Roster::new();
    roster.add("Alice");
    roster.add("Bob");
    roster.add("Carol");

    let ids: HashSet<StudentId> = roster.students().iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_duplicate_names_get_separate_entries() {
    let mut roster = Roster::new();
    let first = roster.add("Sam").unwrap();
    let second = roster.add("Sam").unwrap();

    assert_eq!(roster.len(), 2);
    assert_ne!(first, second);
}

#[test]
fn test_new_student_defaults() {
    let student = Student::new("Dana");

    assert_eq!(student.gender, Gender::Unspecified);
    assert_eq!(student.level, Level::Med);
    assert!(!student.leader);
}
