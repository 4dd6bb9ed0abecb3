//! Column encodings shared by table records.

/// Booleans stored as `yes` / `no`.
///
/// Anything other than `yes` reads as `false`, including blank cells.
pub mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "yes" } else { "no" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw == "yes")
    }
}

/// Ordered chapter names stored in one cell, joined by `||`.
pub mod chapter_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const DELIMITER: &str = "||";

    pub fn join(chapters: &[String]) -> String {
        chapters.join(DELIMITER)
    }

    /// Empty segments are dropped, so `""` is an empty list.
    pub fn split(raw: &str) -> Vec<String> {
        raw.split(DELIMITER)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn serialize<S: Serializer>(value: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&join(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(split(&raw))
    }
}

/// Optional `YYYY-MM-DD` day.
///
/// Blank or unparseable cells read as `None`; a bad cell is logged
/// instead of failing the whole table.
pub mod day {
    use chrono::NaiveDate;
    use log::warn;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(raw, FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                warn!(
                    "event=parse_date module=store status=skipped value={}",
                    crate::logging::one_line(raw, 32)
                );
                None
            }
        }
    }

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::chapter_list::{join, split};
    use super::day;
    use chrono::NaiveDate;

    #[test]
    fn chapter_cells_keep_order() {
        assert_eq!(split("A||B||C"), vec!["A", "B", "C"]);
        let chapters = vec!["Kinematics".to_string(), "Waves".to_string()];
        assert_eq!(split(&join(&chapters)), chapters);
    }

    #[test]
    fn blank_cell_is_empty_list() {
        assert!(split("").is_empty());
        assert_eq!(join(&[]), "");
        assert_eq!(split("A||||B||"), vec!["A", "B"]);
    }

    #[test]
    fn day_cells_tolerate_blank_and_garbage() {
        assert_eq!(day::parse("2024-03-09"), NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(day::parse(""), None);
        assert_eq!(day::parse("9 March"), None);
    }
}
