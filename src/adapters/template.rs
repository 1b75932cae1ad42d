use crate::domain::ports::TemplateRenderer;
use crate::utils::error::{Result, TableError};
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// Replaces `{{ name }}` placeholders with values from the context, verbatim.
#[derive(Debug, Clone)]
pub struct PlaceholderTemplate {
    placeholder: Regex,
}

impl PlaceholderTemplate {
    pub fn new() -> Result<Self> {
        let placeholder = Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").map_err(|e| {
            TableError::TemplateError {
                message: format!("invalid placeholder pattern: {}", e),
            }
        })?;
        Ok(Self { placeholder })
    }
}

impl TemplateRenderer for PlaceholderTemplate {
    fn render(&self, template: &str, context: &BTreeMap<String, String>) -> Result<String> {
        if let Some(missing) = self
            .placeholder
            .captures_iter(template)
            .map(|caps| caps[1].to_string())
            .find(|name| !context.contains_key(name))
        {
            return Err(TableError::TemplateError {
                message: format!("undefined placeholder '{{{{ {} }}}}'", missing),
            });
        }

        let rendered = self.placeholder.replace_all(template, |caps: &Captures| {
            context.get(&caps[1]).cloned().unwrap_or_default()
        });

        Ok(rendered.into_owned())
    }
}
