//! # mtd-access
//!
//! Decides whether a phone number may use the generator.
//!
//! Numbers are compared in canonical `7XXXXXXXXXX` form (see
//! [`normalize_phone`]). Lookup failures deny access; they never error.

mod error;
mod phone;
mod sheet;
mod static_list;

pub use error::AccessError;
pub use phone::normalize_phone;
pub use sheet::SheetAllowList;
pub use static_list::StaticAllowList;

use async_trait::async_trait;
use mtd_config::AccessConfig;

/// Membership check for one phone number.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    async fn is_allowed(&self, phone: &str) -> bool;
}

/// Used when access control is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

#[async_trait]
impl AccessChecker for AllowAll {
    async fn is_allowed(&self, _phone: &str) -> bool {
        true
    }
}

/// Pick the checker for the `[access]` section.
///
/// Disabled → [`AllowAll`]; a sheet URL wins over the inline list.
#[must_use]
pub fn checker_for(config: &AccessConfig) -> Box<dyn AccessChecker> {
    if !config.enabled {
        return Box::new(AllowAll);
    }
    if config.has_sheet() {
        return Box::new(SheetAllowList::new(config.sheet_csv_url.clone()));
    }
    let list = StaticAllowList::new(&config.allowed_phones);
    if list.is_empty() {
        tracing::warn!("access control enabled with no allowed phones; every number is denied");
    }
    Box::new(list)
}
