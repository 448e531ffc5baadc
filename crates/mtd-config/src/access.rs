//! Allow-list configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccessConfig {
    /// When false every phone number is allowed.
    #[serde(default)]
    pub enabled: bool,

    /// CSV export URL of the spreadsheet holding allowed numbers.
    #[serde(default)]
    pub sheet_csv_url: String,

    /// Inline allow-list, used when no sheet URL is set.
    #[serde(default)]
    pub allowed_phones: Vec<String>,
}

impl AccessConfig {
    /// Enabled with at least one source of allowed numbers.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && (self.has_sheet() || !self.allowed_phones.is_empty())
    }

    #[must_use]
    pub fn has_sheet(&self) -> bool {
        !self.sheet_csv_url.is_empty()
    }
}
