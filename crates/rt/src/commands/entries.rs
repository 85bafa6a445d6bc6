//! `rt entries` command implementation.

use clap::Args;
use rt_delivery::Entry;

use super::{CommonArgs, delivery_client};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the entries command.
#[derive(Args)]
pub(crate) struct EntriesArgs {
    /// Only list entries of this content type (overrides config).
    #[arg(short = 't', long)]
    content_type: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl EntriesArgs {
    /// Execute the entries command.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing request fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(self.content_type)?;
        let client = delivery_client(&config, &output)?;

        let content_type = config
            .delivery
            .as_ref()
            .and_then(|delivery| delivery.content_type.as_deref());
        let entries = client.get_entries(content_type)?;

        for entry in &entries.items {
            output.print(&format_entry(entry))?;
        }

        let shown = entries.items.len();
        if u64::try_from(shown).is_ok_and(|shown| shown < entries.total) {
            output.warning(&format!(
                "Showing first {shown} of {} entries",
                entries.total
            ));
        }
        Ok(())
    }
}

/// One listing line: id, content type, title.
fn format_entry(entry: &Entry) -> String {
    format!(
        "{}\t{}\t{}",
        entry.sys.id,
        entry.content_type_id().unwrap_or("-"),
        entry.text_field("title").unwrap_or("")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry() {
        let entry: Entry = serde_json::from_str(
            r#"{
                "sys": {"id": "e1", "type": "Entry",
                        "contentType": {"sys": {"type": "Link", "id": "article"}}},
                "fields": {"title": "Hello"}
            }"#,
        )
        .unwrap();
        assert_eq!(format_entry(&entry), "e1\tarticle\tHello");
    }

    #[test]
    fn test_format_entry_without_metadata() {
        let entry: Entry =
            serde_json::from_str(r#"{"sys": {"id": "e2", "type": "Entry"}}"#).unwrap();
        assert_eq!(format_entry(&entry), "e2\t-\t");
    }
}
