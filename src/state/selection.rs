//! Toggleable augmentation selection bound to the catalog.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

use crate::net::types::AugmentationDefinition;

/// Set of chosen augmentation ids.
///
/// Ids are emitted in catalog order, not toggle order, matching how the
/// checkbox list is read top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    /// Flip `id` and return whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        }
    }

    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.ids.insert(id.to_owned());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop ids that are not offered by `catalog`.
    pub fn retain_known(&mut self, catalog: &[AugmentationDefinition]) {
        self.ids.retain(|id| catalog.iter().any(|def| &def.id == id));
    }

    /// Selected ids in catalog order.
    pub fn ordered(&self, catalog: &[AugmentationDefinition]) -> Vec<String> {
        catalog
            .iter()
            .filter(|def| self.ids.contains(&def.id))
            .map(|def| def.id.clone())
            .collect()
    }
}
