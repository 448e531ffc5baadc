use mtd_config::MetodistConfig;
use mtd_core::GeneratedDocument;
use mtd_render::{normalize, render, render_to_docx};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenderArgs;
use crate::commands::shared::document::build_meta;
use crate::commands::shared::input::{read_text, write_output};
use crate::output::output;

/// Handle `metodist render`.
pub fn handle(args: &RenderArgs, config: &MetodistConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let meta = build_meta(&args.document, config)?;
    let raw = read_text(args.input.as_deref())?;

    if args.blocks {
        let document = render(&normalize(&raw, &config.rules), &meta, &config.rules);
        return output(&document, flags.format);
    }

    let bytes = render_to_docx(&raw, &meta, &config.rules, &config.document.typography)?;

    let document = GeneratedDocument::new(&meta.subject, &args.document.topic, meta.kind, raw, bytes);
    let path = write_output(args.document.out.as_deref(), &document.file_name, &document.bytes)?;

    output(
        &json!({
            "file": path,
            "bytes": document.bytes.len(),
            "kind": meta.kind,
            "title": meta.title,
        }),
        flags.format,
    )
}
