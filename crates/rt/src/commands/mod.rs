//! CLI command implementations.

pub(crate) mod asset;
pub(crate) mod entries;
pub(crate) mod entry;
pub(crate) mod render;

pub(crate) use asset::AssetArgs;
pub(crate) use entries::EntriesArgs;
pub(crate) use entry::EntryArgs;
pub(crate) use render::RenderArgs;

use std::path::PathBuf;

use clap::Args;
use rt_config::{CliSettings, Config};
use rt_delivery::DeliveryClient;
use rt_renderer::UnknownNodePolicy;

use crate::error::CliError;
use crate::output::Output;

/// Options shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover rt.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Locale to request from the delivery API (overrides config).
    #[arg(long)]
    locale: Option<String>,

    /// Handling of unrecognized node types: passthrough, skip or reject (overrides config).
    #[arg(long, value_name = "POLICY")]
    unknown_nodes: Option<UnknownNodePolicy>,

    /// Maximum nesting depth of rendered trees (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load config with these arguments applied on top.
    pub(crate) fn load_config(&self, content_type: Option<String>) -> Result<Config, CliError> {
        let cli_settings = self.cli_settings(content_type);
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    fn cli_settings(&self, content_type: Option<String>) -> CliSettings {
        CliSettings {
            locale: self.locale.clone(),
            content_type,
            unknown_nodes: self.unknown_nodes,
            max_depth: self.max_depth,
        }
    }
}

/// Create a delivery client, explaining the missing section if needed.
pub(crate) fn delivery_client(config: &Config, output: &Output) -> Result<DeliveryClient, CliError> {
    if config.delivery.is_none() {
        output.error("Error: delivery configuration required in rt.toml");
        output.info("\nAdd the following to your rt.toml:");
        output.info("\n[delivery]");
        output.info(r#"space_id = "your-space-id""#);
        output.info(r#"access_token = "${RT_ACCESS_TOKEN}""#);
        return Err(CliError::Validation(
            "delivery configuration required".to_owned(),
        ));
    }
    let delivery = config.require_delivery()?;
    Ok(DeliveryClient::from_config(delivery).with_max_depth(config.render.max_depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_settings_mapping() {
        let args = CommonArgs {
            locale: Some("de-DE".to_owned()),
            unknown_nodes: Some(UnknownNodePolicy::Reject),
            max_depth: Some(10),
            ..Default::default()
        };
        let settings = args.cli_settings(Some("article".to_owned()));
        assert_eq!(settings.locale.as_deref(), Some("de-DE"));
        assert_eq!(settings.content_type.as_deref(), Some("article"));
        assert_eq!(settings.unknown_nodes, Some(UnknownNodePolicy::Reject));
        assert_eq!(settings.max_depth, Some(10));
    }

    #[test]
    fn test_delivery_client_requires_section() {
        let err = delivery_client(&Config::default(), &Output::new())
            .err()
            .unwrap();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.toml");
        std::fs::write(&path, "[render]\nmax_depth = 12\n").unwrap();

        let args = CommonArgs {
            config: Some(path),
            unknown_nodes: Some(UnknownNodePolicy::Skip),
            ..Default::default()
        };
        let config = args.load_config(None).unwrap();
        assert_eq!(config.render.max_depth, 12);
        assert_eq!(config.render.unknown_nodes, UnknownNodePolicy::Skip);
    }
}
