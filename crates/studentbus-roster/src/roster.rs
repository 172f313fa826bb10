//! Deduplicated student set

use crate::student::Student;
use std::collections::HashSet;

/// Students merged from any number of sources
///
/// Equality ignores the id, so inserting a person that is already present
/// keeps the first record.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: HashSet<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a student. Returns false if an equal student was already present.
    pub fn insert(&mut self, student: Student) -> bool {
        self.students.insert(student)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Snapshot sorted by name, then birth date
    pub fn to_sorted_vec(&self) -> Vec<Student> {
        let mut students: Vec<Student> = self.students.iter().cloned().collect();
        students.sort();
        students
    }
}

impl Extend<Student> for Roster {
    fn extend<T: IntoIterator<Item = Student>>(&mut self, iter: T) {
        for student in iter {
            self.insert(student);
        }
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<T: IntoIterator<Item = Student>>(iter: T) -> Self {
        let mut roster = Roster::new();
        roster.extend(iter);
        roster
    }
}
