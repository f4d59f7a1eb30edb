// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Team roster model.

use std::collections::HashSet;

/// A named team: the set of athlete IDs whose activities count for it.
///
/// Rosters are static configuration, read-only for the lifetime of the
/// process. Two teams are configured today; nothing assumes the count.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Team display name, used verbatim in totals output
    pub name: String,
    members: HashSet<String>,
}

impl Roster {
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().collect(),
        }
    }

    /// Build a roster from a comma-separated athlete ID list ("123, 456").
    pub fn from_csv(name: impl Into<String>, ids: &str) -> Self {
        Self::new(
            name,
            ids.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(String::from),
        )
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.members.contains(user_id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_trims_and_drops_empty_entries() {
        let roster = Roster::from_csv("Team Captain America", " 101, 202 ,,303,");
        assert_eq!(roster.len(), 3);
        assert!(roster.contains("101"));
        assert!(roster.contains("202"));
        assert!(roster.contains("303"));
        assert!(!roster.contains("404"));
    }

    #[test]
    fn test_blank_csv_yields_empty_roster() {
        let roster = Roster::from_csv("Team Iron Man", "  ,  ");
        assert!(roster.is_empty());
    }
}
