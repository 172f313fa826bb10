//! Table rendering for received batches

use crate::student::Student;
use std::fmt::Write;

const RULE_WIDTH: usize = 55;

/// Sort students by name, then birth date
pub fn sort_for_display(students: &mut [Student]) {
    students.sort();
}

/// Render students as a numbered table, in the order given
pub fn render_table(students: &[Student]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "       Sorted Student List (Total: {})", students.len());
    let _ = writeln!(out, "{}", rule);

    for (i, student) in students.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<3}. {:<30} | {:<10} (ID: {})",
            i + 1,
            student.fio,
            student.birth_date_string(),
            student.id
        );
    }

    let _ = writeln!(out, "{}", rule);
    out
}
