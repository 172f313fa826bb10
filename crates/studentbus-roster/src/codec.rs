//! JSON batch codec
//!
//! A batch is one UTF-8 JSON array of
//! `{"id": u16, "fio": string, "birth_date": "DD.MM.YYYY"}` objects.

use crate::error::CodecError;
use crate::student::Student;

/// Encode students as a JSON array
pub fn encode_batch(students: &[Student]) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(students)?)
}

/// Decode a JSON array of students
pub fn decode_batch(data: &[u8]) -> Result<Vec<Student>, CodecError> {
    Ok(serde_json::from_slice(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_encode_shape() {
        let students = vec![Student::new(
            7,
            "Иванов Иван",
            NaiveDate::from_ymd_opt(2000, 2, 1).unwrap(),
        )];
        let json = String::from_utf8(encode_batch(&students).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"[{"id":7,"fio":"Иванов Иван","birth_date":"01.02.2000"}]"#
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_batch(&[]).unwrap(), b"[]");
    }

    #[test]
    fn test_decode_without_id() {
        let students = decode_batch(br#"[{"fio":"Doe Jane","birth_date":"1.2.1999"}]"#).unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, 0);
        assert_eq!(
            students[0].birth_date,
            NaiveDate::from_ymd_opt(1999, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_decode_rejects_bad_date() {
        let err = decode_batch(br#"[{"id":1,"fio":"Doe","birth_date":"31.04.2000"}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("31.04.2000"));
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        assert!(decode_batch(br#"[{"id":1,"birth_date":"01.01.2000"}]"#).is_err());
        assert!(decode_batch(br#"[{"id":1,"fio":"Doe"}]"#).is_err());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode_batch(b"not json").is_err());
        assert!(decode_batch(br#"{"fio":"Doe","birth_date":"01.01.2000"}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_out_of_range_id() {
        assert!(decode_batch(br#"[{"id":70000,"fio":"Doe","birth_date":"01.01.2000"}]"#).is_err());
    }
}
