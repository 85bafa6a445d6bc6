//! `rt render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use rt_renderer::render_json;
use tracing::info;

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Rich-text JSON file: an array of nodes or a document object (default: stdin).
    file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or rendered.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;

        let source = read_input(self.file.as_deref())?;
        info!("Rendering {} bytes of rich text", source.len());

        let html = render_json(&source, &config.render.to_options())?;
        output.print(&html)?;
        Ok(())
    }
}

/// Read from `path`, or from stdin when it is absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, r#"[{"nodeType": "hr"}]"#).unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), r#"[{"nodeType": "hr"}]"#);
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/doc.json"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
