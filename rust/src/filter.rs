//! Working-set selection.
//!
//! Dependencies that point outside the selected set become invisible to the
//! graph components, which treat them as satisfied.

use crate::models::{Status, WorkItem};

/// Criteria for selecting a working set. Empty criteria match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub statuses: Vec<Status>,
    pub types: Vec<String>,
    pub milestone: Option<String>,
}

impl ItemFilter {
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_milestone(mut self, milestone: impl Into<String>) -> Self {
        self.milestone = Some(milestone.into());
        self
    }

    pub fn matches(&self, item: &WorkItem) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&item.status) {
            return false;
        }
        if !self.types.is_empty() && !self.types.iter().any(|t| *t == item.item_type) {
            return false;
        }
        match &self.milestone {
            Some(milestone) => item.milestone.as_ref() == Some(milestone),
            None => true,
        }
    }

    /// Matching items, cloned, in input order.
    pub fn apply(&self, items: &[WorkItem]) -> Vec<WorkItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}
