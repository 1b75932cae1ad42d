use crate::adapters::loader::parse_entries;
use crate::adapters::table::MarkdownTable;
use crate::adapters::template::PlaceholderTemplate;
use crate::core::row::build_rows;
use crate::core::{ConfigProvider, Pipeline, Storage, TableFormatter, TemplateRenderer};
use crate::domain::model::{Entry, RenderResult};
use crate::utils::error::{Result, TableError};
use std::collections::BTreeMap;

/// Data file in, sorted table rendered into the template out.
pub struct ReadmePipeline<S, C, T = MarkdownTable, R = PlaceholderTemplate>
where
    S: Storage,
    C: ConfigProvider,
    T: TableFormatter,
    R: TemplateRenderer,
{
    storage: S,
    config: C,
    table: T,
    renderer: R,
}

impl<S: Storage, C: ConfigProvider> ReadmePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self::with_formatters(
            storage,
            config,
            MarkdownTable,
            PlaceholderTemplate::new()?,
        ))
    }
}

impl<S, C, T, R> ReadmePipeline<S, C, T, R>
where
    S: Storage,
    C: ConfigProvider,
    T: TableFormatter,
    R: TemplateRenderer,
{
    pub fn with_formatters(storage: S, config: C, table: T, renderer: R) -> Self {
        Self {
            storage,
            config,
            table,
            renderer,
        }
    }

    async fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.storage.read_file(path).await?;
        String::from_utf8(bytes).map_err(|e| {
            TableError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("{} is not valid UTF-8: {}", path, e),
            ))
        })
    }
}

#[async_trait::async_trait]
impl<S, C, T, R> Pipeline for ReadmePipeline<S, C, T, R>
where
    S: Storage,
    C: ConfigProvider,
    T: TableFormatter,
    R: TemplateRenderer,
{
    async fn extract(&self) -> Result<Vec<Entry>> {
        tracing::debug!("Reading data file: {}", self.config.data_path());
        let content = self.read_text(self.config.data_path()).await?;
        parse_entries(&content)
    }

    async fn transform(&self, entries: Vec<Entry>) -> Result<RenderResult> {
        let entry_count = entries.len();
        let rows = build_rows(entries);
        let table = self.table.format(&rows);

        tracing::debug!("Formatted table ({} bytes)", table.len());
        Ok(RenderResult {
            rows,
            table,
            entry_count,
        })
    }

    async fn render(&self, result: &RenderResult) -> Result<String> {
        tracing::debug!("Reading template: {}", self.config.template_path());
        let template = self.read_text(self.config.template_path()).await?;

        let context = BTreeMap::from([
            ("table".to_string(), result.table.clone()),
            ("entry_count".to_string(), result.entry_count.to_string()),
        ]);
        self.renderer.render(&template, &context)
    }

    async fn load(&self, document: String) -> Result<String> {
        let output_path = self.config.output_path();
        self.storage
            .write_file(output_path, document.as_bytes())
            .await?;
        Ok(output_path.to_string())
    }
}
