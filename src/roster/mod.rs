mod student;

#[cfg(test)]
mod tests;

pub use student::{Gender, Level, Student, StudentId};

use tracing::debug;

/// Ordered, session-local collection of students for one grouping task.
///
/// Insertion order is preserved for display. Partitioning shuffles its own
/// copy, so the order here never influences group assignment.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Add a student by name.
    ///
    /// The name is trimmed before use. Blank or whitespace-only input is a
    /// silent no-op and returns `None`; otherwise the new student's id is
    /// returned.
    pub fn add(&mut self, name: &str) -> Option<StudentId> {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring blank student name");
            return None;
        }

        let student = Student::new(name);
        let id = student.id;
        debug!(%id, name, "student added");
        self.students.push(student);
        Some(id)
    }

    /// All students in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Number of students on the roster
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
