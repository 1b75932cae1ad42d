use crate::domain::model::{Entry, RenderResult, Row};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Replaces the whole file; a failed write leaves the previous content in place.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_path(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// Turns rows into a block of table text.
pub trait TableFormatter: Send + Sync {
    fn format(&self, rows: &[Row]) -> String;
}

/// Fills a template with named values.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &BTreeMap<String, String>) -> Result<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Entry>>;
    async fn transform(&self, entries: Vec<Entry>) -> Result<RenderResult>;
    async fn render(&self, result: &RenderResult) -> Result<String>;
    async fn load(&self, document: String) -> Result<String>;
}
