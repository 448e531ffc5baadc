use mtd_config::MetodistConfig;
use mtd_render::normalize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NormalizeArgs;
use crate::commands::shared::input::read_text;
use crate::output::output;

/// Handle `metodist normalize`.
pub fn handle(
    args: &NormalizeArgs,
    config: &MetodistConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let raw = read_text(args.input.as_deref())?;
    let lines = normalize(&raw, &config.rules);
    output(&lines, flags.format)
}
