// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static API key lookup.

use std::collections::HashMap;

use roadwatch_core::{ApiKeyRecord, Caller};

/// Read-only mapping from API key to caller identity.
///
/// Built once from configuration. A miss is not an error here; the
/// authentication middleware decides what a miss means.
#[derive(Clone, Default)]
pub struct CredentialStore {
    callers: HashMap<String, Caller>,
    /// Keys in seed order, for diagnostics.
    keys: Vec<String>,
}

impl CredentialStore {
    /// Build the store from seed records. A repeated key keeps its first entry.
    pub fn new(records: impl IntoIterator<Item = ApiKeyRecord>) -> Self {
        let mut store = Self::default();
        for record in records {
            if store.callers.contains_key(&record.key) {
                tracing::warn!("ignoring duplicate API key entry");
                continue;
            }
            store.callers.insert(record.key.clone(), record.caller());
            store.keys.push(record.key);
        }
        store
    }

    /// Look up the caller identity for `api_key`.
    pub fn resolve(&self, api_key: &str) -> Option<&Caller> {
        self.callers.get(api_key)
    }

    /// All known keys in seed order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("keys", &format_args!("[{} redacted]", self.keys.len()))
            .field("callers", &self.callers.values().collect::<Vec<_>>())
            .finish()
    }
}
