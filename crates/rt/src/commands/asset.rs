//! `rt asset` command implementation.

use clap::Args;

use super::{CommonArgs, delivery_client};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the asset command.
#[derive(Args)]
pub(crate) struct AssetArgs {
    /// Asset ID.
    asset_id: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl AssetArgs {
    /// Execute the asset command.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset cannot be fetched or has no file yet.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;
        let client = delivery_client(&config, &output)?;

        let asset = client.get_asset(&self.asset_id)?;
        if let Some(title) = &asset.fields.title {
            output.info(&format!("Title: {title}"));
        }

        let file = asset.fields.file.ok_or_else(|| {
            CliError::Validation(format!("asset {} has no file", self.asset_id))
        })?;
        if let Some(content_type) = &file.content_type {
            output.info(&format!("Type: {content_type}"));
        }
        output.print(&file.absolute_url())?;
        Ok(())
    }
}
