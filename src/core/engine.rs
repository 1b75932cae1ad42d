use crate::core::Pipeline;
use crate::domain::model::RenderResult;
use crate::utils::error::Result;

pub struct RenderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RenderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs every stage and writes the document. Returns the output path.
    pub async fn run(&self) -> Result<String> {
        let (_, document) = self.preview().await?;

        tracing::info!("Writing document ({} bytes)", document.len());
        let output_path = self.pipeline.load(document).await?;
        tracing::info!("Document saved to: {}", output_path);

        Ok(output_path)
    }

    /// Runs every stage except writing; returns the rows and the rendered document.
    pub async fn preview(&self) -> Result<(RenderResult, String)> {
        tracing::info!("Loading entries...");
        let entries = self.pipeline.extract().await?;
        tracing::info!("Loaded {} entries", entries.len());

        let result = self.pipeline.transform(entries).await?;
        tracing::info!("Built {} rows", result.rows.len());

        let document = self.pipeline.render(&result).await?;
        Ok((result, document))
    }
}
