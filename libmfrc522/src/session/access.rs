// mfrc522-rs/libmfrc522/src/session/access.rs

use std::collections::HashSet;

/// Allow-list consulted with the UID hex string read from a card.
pub trait AccessList {
    /// Whether `token` (lowercase UID hex) is allowed.
    fn has_user(&self, token: &str) -> bool;
}

/// In-memory allow-list. Tokens are compared case-insensitively, the way
/// UIDs are printed (lowercase hex).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryAccessList {
    users: HashSet<String>,
}

impl MemoryAccessList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the token was already present.
    pub fn insert(&mut self, token: impl AsRef<str>) -> bool {
        self.users.insert(token.as_ref().to_ascii_lowercase())
    }

    /// Returns false when the token was not present.
    pub fn remove(&mut self, token: &str) -> bool {
        self.users.remove(&token.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl AccessList for MemoryAccessList {
    /// Whether `token` (lowercase UID hex) is allowed.
    fn has_user(&self, token: &str) -> bool {
        self.users.contains(&token.to_ascii_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for MemoryAccessList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for token in iter {
            list.insert(token);
        }
        list
    }
}
