//! Active filter tokens, one set per category.

use std::collections::BTreeSet;
use std::fmt;

/// A filter category. Categories combine with AND, tokens within a
/// category with OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Role,
    Skill,
    JobType,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Role => write!(f, "role"),
            Category::Skill => write!(f, "skill"),
            Category::JobType => write!(f, "job type"),
        }
    }
}

/// Three independent token sets. No duplicates; order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub roles: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub job_types: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Role => &self.roles,
            Category::Skill => &self.skills,
            Category::JobType => &self.job_types,
        }
    }

    fn tokens_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Role => &mut self.roles,
            Category::Skill => &mut self.skills,
            Category::JobType => &mut self.job_types,
        }
    }

    /// Add `token` if absent, remove it if present.
    ///
    /// Returns true when the token was added.
    pub fn toggle(&mut self, category: Category, token: &str) -> bool {
        let set = self.tokens_mut(category);
        if set.remove(token) {
            false
        } else {
            set.insert(token.to_string());
            true
        }
    }

    pub fn contains(&self, category: Category, token: &str) -> bool {
        self.tokens(category).contains(token)
    }

    /// Clear all three categories
    pub fn reset(&mut self) {
        self.roles.clear();
        self.skills.clear();
        self.job_types.clear();
    }

    /// True when no category has an active token
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty() && self.skills.is_empty() && self.job_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = FilterState::new();
        assert!(state.toggle(Category::Skill, "React"));
        assert!(state.contains(Category::Skill, "React"));
        assert!(!state.toggle(Category::Skill, "React"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_categories_are_independent() {
        let mut state = FilterState::new();
        state.toggle(Category::Role, "Data");
        assert!(!state.contains(Category::Skill, "Data"));
        assert!(!state.contains(Category::JobType, "Data"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = FilterState::new();
        state.toggle(Category::Role, "Senior");
        state.toggle(Category::Skill, "SQL");
        state.toggle(Category::JobType, "Remote");
        state.reset();
        assert_eq!(state, FilterState::default());
    }
}
