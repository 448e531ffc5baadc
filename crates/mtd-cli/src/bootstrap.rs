use mtd_config::MetodistConfig;

/// Load `.env`, then the layered config.
pub fn load_config() -> anyhow::Result<MetodistConfig> {
    let config = MetodistConfig::load_with_dotenv()?;
    if !config.genai.is_configured() {
        tracing::debug!("genai.api_key is not set; only offline commands will work");
    }
    Ok(config)
}
