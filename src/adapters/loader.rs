//! Loads entries from a YAML data file.
//!
//! ```yaml
//! - title: Paper B
//!   path: http://b
//!   instances:
//!     - venue: Conf Y
//!       date: 2024-05-05
//!       type: poster
//!       path: slides/conf-y.pdf
//! ```

use crate::domain::model::{Entry, Instance, Link};
use crate::utils::error::{Result, TableError};
use crate::utils::validation::validate_non_empty_string;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceRecord {
    pub venue: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryRecord {
    pub title: String,
    #[serde(default)]
    pub path: Option<String>,
    pub instances: Vec<InstanceRecord>,
}

fn parse_link(field_name: &str, value: Option<&str>) -> Result<Option<Link>> {
    value.map(|v| Link::parse(field_name, v)).transpose()
}

fn require_text(index: usize, field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value).map_err(|e| TableError::InvalidRecordError {
        index,
        message: e.to_string(),
    })
}

impl EntryRecord {
    /// Converts a raw record into an [`Entry`]; `index` is its position in the data file.
    pub fn into_entry(self, index: usize) -> Result<Entry> {
        require_text(index, "title", &self.title)?;
        let link = parse_link(&format!("entries[{}].path", index), self.path.as_deref())?;

        let instances = self
            .instances
            .into_iter()
            .enumerate()
            .map(|(i, record)| -> Result<Instance> {
                require_text(index, &format!("instances[{}].venue", i), &record.venue)?;
                let field = format!("entries[{}].instances[{}].path", index, i);
                let link = parse_link(&field, record.path.as_deref())?;
                Ok(Instance::new(record.venue, record.date, record.kind, link))
            })
            .collect::<Result<Vec<_>>>()?;

        Entry::new(self.title, link, instances)
    }
}

/// Parses the data file contents, keeping the order of the file.
pub fn parse_entries(content: &str) -> Result<Vec<Entry>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Option<Vec<EntryRecord>> = serde_yaml::from_str(content)?;
    let entries = records
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_entry(index))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Parsed {} entries from data file", entries.len());
    Ok(entries)
}
