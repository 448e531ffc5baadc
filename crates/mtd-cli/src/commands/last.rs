use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LastArgs;
use crate::commands::shared::input::write_output;
use crate::output::output;
use crate::slot::SlotStore;

/// Handle `metodist last`.
pub fn handle(args: &LastArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let slot = SlotStore::default_location()?.load()?;
    let document = slot
        .last()
        .context("nothing generated yet; run 'metodist generate' first")?;

    if args.preview {
        println!("{}", document.preview);
        return Ok(());
    }

    let path = write_output(args.out.as_deref(), &document.file_name, &document.bytes)?;
    output(
        &json!({
            "file": path,
            "bytes": document.bytes.len(),
            "kind": document.kind,
            "created_at": document.created_at,
        }),
        flags.format,
    )
}
