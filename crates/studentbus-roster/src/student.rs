// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Student record
//!
//! A student is identified by full name and birth date. The numeric id is
//! carried along for display but two records that differ only by id are the
//! same person.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Birth date format on the wire and in tables
pub const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

/// One roster entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Numeric id from the roster file (optional on the wire)
    #[serde(default)]
    pub id: u16,

    /// Full name, trimmed
    pub fio: String,

    #[serde(with = "birth_date_format")]
    pub birth_date: NaiveDate,
}

impl Student {
    pub fn new(id: u16, fio: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id,
            fio: fio.into(),
            birth_date,
        }
    }

    /// Birth date as `DD.MM.YYYY`
    pub fn birth_date_string(&self) -> String {
        self.birth_date.format(BIRTH_DATE_FORMAT).to_string()
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.fio == other.fio && self.birth_date == other.birth_date
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fio.hash(state);
        self.birth_date.hash(state);
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fio
            .cmp(&other.fio)
            .then_with(|| self.birth_date.cmp(&other.birth_date))
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse `D.M.YYYY` / `DD.MM.YYYY` into a calendar date
///
/// Day and month take one or two digits, the year exactly four.
pub fn parse_birth_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('.');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |p: &str, min: usize, max: usize| {
        (min..=max).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(day, 1, 2) || !digits(month, 1, 2) || !digits(year, 4, 4) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

mod birth_date_format {
    use super::{parse_birth_date, Datelike, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!(
            "{:02}.{:02}.{:04}",
            date.day(),
            date.month(),
            date.year()
        ))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_birth_date(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid date format in JSON: {}", s)))
    }
}
