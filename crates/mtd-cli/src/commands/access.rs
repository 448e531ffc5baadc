use mtd_access::{checker_for, normalize_phone};
use mtd_config::MetodistConfig;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AccessArgs;
use crate::output::output;

/// Handle `metodist access`.
pub async fn handle(
    args: &AccessArgs,
    config: &MetodistConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let allowed = checker_for(&config.access).is_allowed(&args.phone).await;
    output(
        &json!({
            "phone": args.phone,
            "normalized": normalize_phone(&args.phone),
            "enabled": config.access.enabled,
            "allowed": allowed,
        }),
        flags.format,
    )
}
