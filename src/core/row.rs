//! Formatting of entries into table rows.

use crate::core::ordering::sort_entries;
use crate::domain::model::{Entry, Instance, Row};

/// Separator between instances inside one cell.
pub const LINE_BREAK: &str = "<br>";

pub fn hyperlink(text: &str, target: &str) -> String {
    format!("[{}]({})", text, target)
}

impl Instance {
    /// `venue (kind, YYYY-MM-DD)`, with the venue linked when a link is present.
    pub fn format(&self) -> String {
        let details = format!(" ({}, {})", self.kind, self.date.format("%Y-%m-%d"));
        match &self.link {
            None => format!("{}{}", self.venue, details),
            Some(link) => hyperlink(&self.venue, link.as_str()) + &details,
        }
    }
}

impl Entry {
    pub fn to_row(&self) -> Row {
        let title = match &self.link {
            None => self.title.clone(),
            Some(link) => hyperlink(&self.title, link.as_str()),
        };

        let instances = self
            .instances()
            .iter()
            .map(Instance::format)
            .collect::<Vec<_>>()
            .join(LINE_BREAK);

        Row { title, instances }
    }
}

/// Sorts entries newest first and formats one row per entry.
pub fn build_rows(mut entries: Vec<Entry>) -> Vec<Row> {
    sort_entries(&mut entries);
    entries.iter().map(Entry::to_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Link;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn url(s: &str) -> Option<Link> {
        Some(Link::Url(s.to_string()))
    }

    #[test]
    fn test_hyperlink() {
        assert_eq!(
            hyperlink("Foo", "http://example.com"),
            "[Foo](http://example.com)"
        );
    }

    #[test]
    fn test_instance_format_without_link() {
        let instance = Instance::new("Conf X", date(2023, 1, 1), "talk", None);
        let formatted = instance.format();
        assert_eq!(formatted, "Conf X (talk, 2023-01-01)");
        assert!(!formatted.contains('[') && !formatted.contains("]("));
    }

    #[test]
    fn test_instance_format_with_local_path() {
        let link = Link::parse("path", "./slides/x.pdf").unwrap();
        let instance = Instance::new("Meetup", date(2019, 9, 3), "lightning", Some(link));
        assert_eq!(instance.format(), "[Meetup](slides/x.pdf) (lightning, 2019-09-03)");
    }

    #[test]
    fn test_date_is_zero_padded() {
        let instance = Instance::new("Old", NaiveDate::from_ymd_opt(987, 2, 3).unwrap(), "talk", None);
        assert_eq!(instance.format(), "Old (talk, 0987-02-03)");
    }

    #[test]
    fn test_build_rows_end_to_end_example() {
        let a = Entry::new(
            "Paper A",
            None,
            vec![Instance::new("Conf X", date(2023, 1, 1), "talk", None)],
        )
        .unwrap();
        let b = Entry::new(
            "Paper B",
            url("http://b"),
            vec![
                Instance::new("Conf Y", date(2024, 5, 5), "poster", url("http://y")),
                Instance::new("Conf Z", date(2022, 1, 1), "talk", None),
            ],
        )
        .unwrap();

        let rows = build_rows(vec![a, b]);

        assert_eq!(
            rows,
            vec![
                Row {
                    title: "[Paper B](http://b)".to_string(),
                    instances: [
                        "[Conf Y](http://y) (poster, 2024-05-05)",
                        "Conf Z (talk, 2022-01-01)",
                    ]
                    .join(LINE_BREAK),
                },
                Row {
                    title: "Paper A".to_string(),
                    instances: "Conf X (talk, 2023-01-01)".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_row_serializes_with_exactly_two_keys() {
        let entry = Entry::new(
            "Paper",
            url("https://example.org/p"),
            vec![Instance::new("V", date(2020, 1, 1), "talk", None)],
        )
        .unwrap();

        let value = serde_json::to_value(entry.to_row()).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.iter().any(|k| *k == "Title"));
        assert!(keys.iter().any(|k| *k == "Instances"));
    }
}
