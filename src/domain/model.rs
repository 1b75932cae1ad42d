use crate::core::ordering;
use crate::utils::error::{Result, TableError};
use crate::utils::validation::{validate_http_url, validate_relative_path};
use chrono::NaiveDate;
use serde::Serialize;

/// Where a title or venue points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// An http(s) URL, kept as written apart from surrounding whitespace.
    Url(String),
    /// A relative POSIX path, normalized.
    LocalPath(String),
}

impl Link {
    /// Parses a raw link value. `field_name` is only used in error messages.
    ///
    /// Surrounding whitespace is not part of the link.
    pub fn parse(field_name: &str, value: &str) -> Result<Self> {
        let value = value.trim();
        if validate_http_url(field_name, value)? {
            return Ok(Link::Url(value.to_string()));
        }

        validate_relative_path(field_name, value)?;
        Ok(Link::LocalPath(normalize_posix_path(value)))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Link::Url(url) => url,
            Link::LocalPath(path) => path,
        }
    }
}

// "./docs//a.pdf/" prints as "docs/a.pdf"; ".." is kept as-is
fn normalize_posix_path(path: &str) -> String {
    let parts: Vec<&str> = path
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// One dated occurrence of an entry at a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub venue: String,
    pub date: NaiveDate,
    pub kind: String,
    pub link: Option<Link>,
}

impl Instance {
    pub fn new(
        venue: impl Into<String>,
        date: NaiveDate,
        kind: impl Into<String>,
        link: Option<Link>,
    ) -> Self {
        Self {
            venue: venue.into(),
            date,
            kind: kind.into(),
            link,
        }
    }
}

/// A titled item with its instances, newest first.
///
/// The instance list is never empty and stays sorted descending by date;
/// instances with equal dates keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub link: Option<Link>,
    instances: Vec<Instance>,
}

impl Entry {
    pub fn new(
        title: impl Into<String>,
        link: Option<Link>,
        instances: Vec<Instance>,
    ) -> Result<Self> {
        let title = title.into();
        if instances.is_empty() {
            return Err(TableError::EmptyInstancesError { title });
        }

        let mut entry = Self {
            title,
            link,
            instances: Vec::with_capacity(instances.len()),
        };
        for instance in instances {
            entry.insert(instance);
        }

        Ok(entry)
    }

    /// Adds an instance at its date position, after any instances with the same date.
    pub fn insert(&mut self, instance: Instance) {
        ordering::insert_sorted(&mut self.instances, instance);
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// The most recent instance.
    pub fn latest(&self) -> &Instance {
        // non-empty since construction
        &self.instances[0]
    }
}

/// One formatted table row. Serializes with exactly the keys `Title` and `Instances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Instances")]
    pub instances: String,
}

impl Row {
    pub const COLUMNS: [&'static str; 2] = ["Title", "Instances"];

    /// Cell values in `COLUMNS` order.
    pub fn cells(&self) -> [&str; 2] {
        [self.title.as_str(), self.instances.as_str()]
    }
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub rows: Vec<Row>,
    pub table: String,
    pub entry_count: usize,
}
