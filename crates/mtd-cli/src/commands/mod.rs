pub mod access;
pub mod generate;
pub mod last;
pub mod normalize;
pub mod render;
pub mod schema;
pub mod shared;

use mtd_config::MetodistConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &MetodistConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => generate::handle(&args, config, flags).await,
        Commands::Render(args) => render::handle(&args, config, flags),
        Commands::Normalize(args) => normalize::handle(&args, config, flags),
        Commands::Last(args) => last::handle(&args, flags),
        Commands::Access(args) => access::handle(&args, config, flags).await,
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
