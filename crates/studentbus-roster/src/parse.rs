//! Roster line parser
//!
//! Line shape: `<id> <full name without digits> <D.M.YYYY>`, whitespace
//! separated, optional trailing whitespace (CRLF files included).

use crate::error::RecordError;
use crate::student::Student;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\s+([^0-9]+)\s+([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})\s*$")
        .expect("Invalid regex pattern")
});

/// Parse one roster line into a [`Student`]
pub fn parse_line(line: &str) -> Result<Student, RecordError> {
    let caps = LINE_PATTERN.captures(line).ok_or(RecordError::Format)?;

    let id_text = &caps[1];
    let id: u16 = id_text
        .parse()
        .map_err(|_| RecordError::IdOutOfRange(id_text.to_string()))?;

    let fio = caps[2].trim();
    if fio.is_empty() {
        return Err(RecordError::EmptyName);
    }

    let (day, month, year) = (&caps[3], &caps[4], &caps[5]);
    let invalid_date = || RecordError::InvalidDate(format!("{}.{}.{}", day, month, year));
    let birth_date = NaiveDate::from_ymd_opt(
        year.parse().map_err(|_| invalid_date())?,
        month.parse().map_err(|_| invalid_date())?,
        day.parse().map_err(|_| invalid_date())?,
    )
    .ok_or_else(invalid_date)?;

    Ok(Student::new(id, fio, birth_date))
}
