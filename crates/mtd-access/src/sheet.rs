//! Allow-list read from a spreadsheet's CSV export.
//!
//! Every cell of the sheet is scanned; any cell that canonicalizes to a
//! phone number counts. The sheet is fetched on each check so edits take
//! effect without a restart.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::AccessError;
use crate::static_list::StaticAllowList;
use crate::AccessChecker;

/// Allow-list backed by a CSV export URL.
pub struct SheetAllowList {
    http: reqwest::Client,
    url: String,
}

impl SheetAllowList {
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("metodist/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            url: url.into(),
        }
    }

    /// Download the sheet and collect every phone-like cell.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] on transport failure or a non-success status.
    pub async fn fetch(&self) -> Result<StaticAllowList, AccessError> {
        let resp = self.http.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(AccessError::Status {
                status: resp.status().as_u16(),
            });
        }
        let body = resp.text().await?;
        let list = StaticAllowList::new(cells(&body));
        tracing::debug!(phones = list.len(), "fetched allow-list sheet");
        Ok(list)
    }
}

#[async_trait]
impl AccessChecker for SheetAllowList {
    async fn is_allowed(&self, phone: &str) -> bool {
        match self.fetch().await {
            Ok(list) => list.contains(phone),
            Err(e) => {
                tracing::warn!(error = %e, "allow-list sheet unavailable, denying access");
                false
            }
        }
    }
}

/// Split CSV text into cells, dropping surrounding quotes.
fn cells(csv: &str) -> impl Iterator<Item = &str> {
    csv.lines()
        .flat_map(|line| line.split(','))
        .map(|cell| cell.trim().trim_matches('"').trim())
        .filter(|cell| !cell.is_empty())
}
