//! Augmentation checkbox list.

use super::{Action, CatalogItemView, CatalogView};
use crate::net::types::AugmentationDefinition;
use crate::state::selection::SelectionSet;

/// Render `catalog` with checked state from `selection`.
///
/// `toggle` builds the action for an item, so the same catalog can back the
/// primary list and the re-augment dialog.
pub fn render_catalog(
    catalog: &[AugmentationDefinition],
    selection: &SelectionSet,
    toggle: impl Fn(String) -> Action,
) -> CatalogView {
    let items = catalog
        .iter()
        .map(|def| CatalogItemView {
            id: def.id.clone(),
            name: def.name.clone(),
            description: def.description.clone(),
            selected: selection.contains(&def.id),
            toggle: toggle(def.id.clone()),
        })
        .collect();
    CatalogView { items }
}
