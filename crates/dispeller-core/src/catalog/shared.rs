use crate::catalog::{ItemRow, StaticCatalog};
use crate::model::ModelDescriptor;

/// Every catalog item with the same equip slot row and an equivalent model,
/// including the target itself. Sorted by item id.
pub fn find_shared_model_items(catalog: &StaticCatalog, item_id: u32) -> Vec<&ItemRow> {
    let Some(target) = catalog.get(item_id) else {
        return Vec::new();
    };
    let target_model = ModelDescriptor::decode(target.model_main);

    let mut shared: Vec<&ItemRow> = catalog
        .rows()
        .filter(|row| row.equip_slot == target.equip_slot)
        .filter(|row| ModelDescriptor::decode(row.model_main).equivalent(&target_model))
        .collect();
    shared.sort_by_key(|row| row.id);
    shared
}
