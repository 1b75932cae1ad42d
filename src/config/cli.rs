use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "venue-table")]
#[command(about = "Render dated entries as a sorted table inside a document template")]
pub struct CliConfig {
    /// YAML data file with the entries [default: data.yml]
    #[arg(long)]
    pub data: Option<String>,

    /// Template containing a {{ table }} placeholder [default: templates/README.md.tmpl]
    #[arg(long)]
    pub template: Option<String>,

    /// Document to write [default: README.md]
    #[arg(long)]
    pub output: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print the rendered document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = self
            .config
            .as_deref()
            .map(TomlConfig::from_file)
            .transpose()?;

        Ok(RunConfig::layered(
            file.as_ref(),
            self.data.clone(),
            self.template.clone(),
            self.output.clone(),
        ))
    }
}
