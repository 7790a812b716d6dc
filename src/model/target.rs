// Navigation targets - the fixed list of destinations shown in the sidebar
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::fragment::is_fragment_char;

/// Identifier shared by a navigation target, its content region and the
/// location fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for TargetId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TargetId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationTarget {
    pub id: TargetId,
    pub label: String,
}

impl NavigationTarget {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: TargetId::new(id),
            label: label.to_string(),
        }
    }
}

/// Ordered, non-empty list of targets with unique ids. The first target is
/// the default active screen.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetList {
    targets: Vec<NavigationTarget>,
}

impl TargetList {
    pub fn new(targets: Vec<NavigationTarget>) -> Result<Self, ConfigError> {
        if targets.is_empty() {
            return Err(ConfigError::EmptyTargets);
        }

        let mut seen = HashSet::new();
        for target in &targets {
            let id = target.id.as_str();
            if id.is_empty() || !id.chars().all(is_fragment_char) {
                return Err(ConfigError::InvalidTargetId(id.to_string()));
            }
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateTarget(id.to_string()));
            }
        }

        Ok(Self { targets })
    }

    pub fn first(&self) -> &NavigationTarget {
        // Non-empty by construction
        &self.targets[0]
    }

    pub fn get(&self, id: &str) -> Option<&NavigationTarget> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn nth(&self, index: usize) -> Option<&NavigationTarget> {
        self.targets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavigationTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }
}

impl Default for TargetList {
    fn default() -> Self {
        Self {
            targets: default_targets(),
        }
    }
}

pub fn default_targets() -> Vec<NavigationTarget> {
    vec![
        NavigationTarget::new("screen-1", "HOME"),
        NavigationTarget::new("screen-2", "RESUME"),
        NavigationTarget::new("screen-3", "PROJECTS"),
        NavigationTarget::new("screen-4", "ABOUT ME"),
        NavigationTarget::new("screen-5", "CONTACT"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let targets = TargetList::default();
        assert_eq!(targets.len(), 5);
        assert_eq!(targets.first().id, "screen-1");
        assert_eq!(targets.get("screen-5").map(|t| t.label.as_str()), Some("CONTACT"));
        assert!(!targets.contains("screen-6"));
    }

    #[test]
    fn test_rejects_empty_list() {
        assert!(matches!(TargetList::new(Vec::new()), Err(ConfigError::EmptyTargets)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = TargetList::new(vec![
            NavigationTarget::new("home", "HOME"),
            NavigationTarget::new("home", "AGAIN"),
        ]);
        assert!(matches!(result, Err(ConfigError::DuplicateTarget(id)) if id == "home"));
    }

    #[test]
    fn test_rejects_ids_that_cannot_be_fragments() {
        let result = TargetList::new(vec![NavigationTarget::new("about me", "ABOUT")]);
        assert!(matches!(result, Err(ConfigError::InvalidTargetId(_))));
    }
}
