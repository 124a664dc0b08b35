//! Row selection set
//!
//! Membership checks go through a hash set; a parallel vector keeps the
//! order in which rows were selected so "currently selected" listings are
//! stable.

use std::collections::HashSet;
use std::hash::Hash;

/// State of a select-all checkbox relative to a set of visible ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    Partial,
    All,
}

impl SelectAllState {
    pub fn checkbox(self) -> &'static str {
        match self {
            Self::None => "[ ]",
            Self::Partial => "[-]",
            Self::All => "[x]",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionSet<K> {
    order: Vec<K>,
    members: HashSet<K>,
}

impl<K: Clone + Eq + Hash> SelectionSet<K> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }

    pub fn contains(&self, id: &K) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selected ids in the order they were selected
    pub fn as_slice(&self) -> &[K] {
        &self.order
    }

    /// Add `id` if absent, remove it if present.
    /// Returns true when the id is selected afterwards.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.members.remove(&id) {
            self.order.retain(|existing| existing != &id);
            false
        } else {
            self.members.insert(id.clone());
            self.order.push(id);
            true
        }
    }

    /// Replace the whole selection, dropping duplicate ids
    pub fn replace(&mut self, ids: &[K]) {
        self.clear();
        for id in ids {
            if self.members.insert(id.clone()) {
                self.order.push(id.clone());
            }
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Select-all checkbox state for the given visible ids
    pub fn state_for(&self, ids: &[K]) -> SelectAllState {
        let selected = ids.iter().filter(|id| self.contains(id)).count();
        if selected == 0 {
            SelectAllState::None
        } else if selected == ids.len() {
            SelectAllState::All
        } else {
            SelectAllState::Partial
        }
    }
}

impl<K: Clone + Eq + Hash> Default for SelectionSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> PartialEq for SelectionSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_previous_state() {
        let mut set = SelectionSet::new();
        set.toggle(1);
        set.toggle(3);
        let before = set.clone();

        assert!(set.toggle(2));
        assert!(!set.toggle(2));
        assert_eq!(set, before);
    }

    #[test]
    fn removal_keeps_remaining_order() {
        let mut set = SelectionSet::new();
        for id in [5, 1, 4, 2] {
            set.toggle(id);
        }
        set.toggle(1);
        assert_eq!(set.as_slice(), &[5, 4, 2]);
        set.toggle(1);
        assert_eq!(set.as_slice(), &[5, 4, 2, 1]);
    }

    #[test]
    fn replace_drops_duplicates() {
        let mut set = SelectionSet::new();
        set.replace(&["a", "b", "a"]);
        assert_eq!(set.as_slice(), &["a", "b"]);
        assert!(set.contains(&"b"));
    }

    #[test]
    fn checkbox_state_tracks_visible_ids() {
        let mut set = SelectionSet::new();
        let visible = [1, 2, 3];
        assert_eq!(set.state_for(&visible), SelectAllState::None);
        set.toggle(2);
        assert_eq!(set.state_for(&visible), SelectAllState::Partial);
        set.replace(&visible);
        assert_eq!(set.state_for(&visible), SelectAllState::All);
        assert_eq!(set.state_for(&[]), SelectAllState::None);
    }
}
