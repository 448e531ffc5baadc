//! Allow-list held in memory.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::AccessChecker;
use crate::phone::normalize_phone;

/// Fixed set of canonical numbers, typically from `[access] allowed_phones`.
#[derive(Debug, Clone, Default)]
pub struct StaticAllowList {
    phones: HashSet<String>,
}

impl StaticAllowList {
    /// Build from raw entries; entries that are not phone numbers are skipped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phones = HashSet::new();
        for entry in entries {
            match normalize_phone(entry.as_ref()) {
                Some(phone) => {
                    phones.insert(phone);
                }
                None => tracing::debug!(entry = entry.as_ref(), "skipping non-phone allow-list entry"),
            }
        }
        Self { phones }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Synchronous membership check used by both list kinds.
    #[must_use]
    pub fn contains(&self, phone: &str) -> bool {
        normalize_phone(phone).is_some_and(|p| self.phones.contains(&p))
    }
}

#[async_trait]
impl AccessChecker for StaticAllowList {
    async fn is_allowed(&self, phone: &str) -> bool {
        self.contains(phone)
    }
}
