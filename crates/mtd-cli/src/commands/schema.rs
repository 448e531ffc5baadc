use anyhow::bail;
use mtd_core::GenerationRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `metodist schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match args.type_name.as_str() {
        "request" | "generation_request" => {
            output(&schemars::schema_for!(GenerationRequest), flags.format)
        }
        other => bail!("unknown schema type '{other}' (expected: request)"),
    }
}
