use crate::utils::error::{Result, TableError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn malformed_link(field_name: &str, value: &str, reason: impl Into<String>) -> TableError {
    TableError::MalformedLinkError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Schemes that always mean a URL, even without `//` after the colon.
const URL_SCHEMES: &[&str] = &[
    "data", "file", "ftp", "ftps", "git", "gopher", "irc", "javascript", "mailto", "news",
    "sftp", "ssh", "tel", "ws", "wss",
];

/// Checks whether `value` is an absolute URL.
///
/// Returns `Ok(true)` for http(s) URLs, `Ok(false)` when `value` is not an
/// absolute URL at all, and an error for absolute URLs with another scheme.
/// A `name:rest` value with an unknown scheme and no `://`, such as
/// `notes:2024.pdf`, is not a URL.
pub fn validate_http_url(field_name: &str, value: &str) -> Result<bool> {
    match Url::parse(value) {
        Ok(url) => match url.scheme() {
            "http" | "https" => {
                if url.host_str().map_or(true, str::is_empty) {
                    return Err(malformed_link(field_name, value, "URL has no host"));
                }
                Ok(true)
            }
            scheme if !value.contains("://") && !URL_SCHEMES.contains(&scheme) => Ok(false),
            scheme => Err(malformed_link(
                field_name,
                value,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(false),
        Err(e) => Err(malformed_link(
            field_name,
            value,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_relative_path(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(malformed_link(field_name, value, "Path cannot be empty"));
    }

    if value.contains('\0') {
        return Err(malformed_link(field_name, value, "Path contains null bytes"));
    }

    if value.starts_with('/') {
        return Err(malformed_link(field_name, value, "Path must be relative"));
    }

    // looks like a URL but the parser did not accept a scheme, e.g. "1http://x"
    if value.contains("://") {
        return Err(malformed_link(field_name, value, "Not a valid http(s) URL"));
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(TableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(TableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("path", "https://example.com").unwrap());
        assert!(validate_http_url("path", "http://b").unwrap());
        assert!(!validate_http_url("path", "slides/talk.pdf").unwrap());
        assert!(validate_http_url("path", "ftp://example.com").is_err());
        assert!(validate_http_url("path", "mailto:me@example.com").is_err());
        assert!(validate_http_url("path", "javascript:alert(1)").is_err());
        assert!(validate_http_url("path", "custom://host/x").is_err());
    }

    #[test]
    fn test_colon_in_relative_path_is_not_a_scheme() {
        for value in ["notes:2024.pdf", "v2:slides.pdf", "talks/2024:final.pdf"] {
            assert!(!validate_http_url("path", value).unwrap(), "{value}");
            assert!(validate_relative_path("path", value).is_ok(), "{value}");
        }
    }

    #[test]
    fn test_validate_relative_path() {
        assert!(validate_relative_path("path", "docs/paper.pdf").is_ok());
        assert!(validate_relative_path("path", "./paper.pdf").is_ok());
        assert!(validate_relative_path("path", "").is_err());
        assert!(validate_relative_path("path", "   ").is_err());
        assert!(validate_relative_path("path", "/etc/passwd").is_err());
        assert!(validate_relative_path("path", "a\0b").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("data", "data.yml", &["yml", "yaml"]).is_ok());
        assert!(validate_file_extension("data", "data.json", &["yml", "yaml"]).is_err());
        assert!(validate_file_extension("data", "data", &["yml", "yaml"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("title", "Paper").is_ok());
        assert!(validate_non_empty_string("title", " \t").is_err());
    }
}
