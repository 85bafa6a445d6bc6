//! `rt entry` command implementation.

use clap::Args;
use rt_renderer::render;

use super::{CommonArgs, delivery_client};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the entry command.
#[derive(Args)]
pub(crate) struct EntryArgs {
    /// Entry ID.
    entry_id: String,

    /// Rich-text field to render.
    #[arg(short, long, default_value = "body")]
    field: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl EntryArgs {
    /// Execute the entry command.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be fetched or its field rendered.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;
        let client = delivery_client(&config, &output)?;

        let entry = client.get_entry(&self.entry_id)?;
        if let Some(title) = entry.text_field("title") {
            output.info(&format!("Title: {title}"));
        }

        let nodes = entry.rich_text_with_limit(&self.field, config.render.max_depth)?;
        let html = render(&nodes, &config.render.to_options())?;
        output.print(&html)?;
        Ok(())
    }
}
