//! Installed GitHub SSH keys
//!
//! Shows which GitHub account's keys are installed and removes them. Fetching
//! new keys needs network access, so an empty row only reports its state.

use crate::params::SharedParams;
use tracing::{debug, info};

/// Username the installed keys belong to
pub const GITHUB_USERNAME_KEY: &str = "GithubUsername";
/// Authorized keys text
pub const GITHUB_SSH_KEYS_KEY: &str = "GithubSshKeys";

/// Live SSH key row
pub struct SshKeys {
    params: SharedParams,
    username: Option<String>,
}

impl SshKeys {
    /// Build the row from the stored keys
    pub fn new(params: SharedParams) -> Self {
        let mut row = Self {
            params,
            username: None,
        };
        row.render();
        row
    }

    /// Username of the installed keys, `None` when no keys are stored
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Remove the installed keys; returns `false` when there were none
    pub fn remove(&mut self) -> bool {
        if self.username.is_none() {
            debug!("No SSH keys installed");
            return false;
        }
        self.params.remove(GITHUB_USERNAME_KEY);
        self.params.remove(GITHUB_SSH_KEYS_KEY);
        info!("Removed GitHub SSH keys");
        self.render();
        true
    }

    /// Re-read the keys from the store
    pub fn render(&mut self) {
        self.username = if self.params.get(GITHUB_SSH_KEYS_KEY).is_empty() {
            None
        } else {
            Some(self.params.get(GITHUB_USERNAME_KEY).trim().to_string())
        };
    }
}

impl std::fmt::Debug for SshKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SshKeys")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MemoryParamStore, ParamStore};
    use std::sync::Arc;

    #[test]
    fn installed_keys_show_username_and_remove() {
        let store = Arc::new(MemoryParamStore::with_values([
            (GITHUB_USERNAME_KEY, "octocat"),
            (GITHUB_SSH_KEYS_KEY, "ssh-ed25519 AAAA"),
        ]));
        let mut row = SshKeys::new(store.clone());
        assert_eq!(row.username(), Some("octocat"));

        assert!(row.remove());
        assert_eq!(row.username(), None);
        assert!(!store.contains(GITHUB_USERNAME_KEY));
        assert!(!store.contains(GITHUB_SSH_KEYS_KEY));
    }

    #[test]
    fn username_without_keys_counts_as_empty() {
        let store = Arc::new(MemoryParamStore::with_values([(GITHUB_USERNAME_KEY, "octocat")]));
        let mut row = SshKeys::new(store.clone());
        assert_eq!(row.username(), None);

        let writes = store.write_count();
        assert!(!row.remove());
        assert_eq!(store.write_count(), writes);
        assert!(store.contains(GITHUB_USERNAME_KEY));
    }
}
