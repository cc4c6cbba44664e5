use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::catalog::ItemMetadataLookup;
use crate::error::{Error, Result};
use crate::grouping::{EnrichedItem, GroupKey, SharedModelGroup};
use crate::snapshot::RawWardrobeEntry;
use crate::slot::SlotCategory;

/// Wardrobe entry after classification
#[derive(Debug, Clone)]
struct Classified {
    entry: RawWardrobeEntry,
    key: GroupKey,
    model_id: String,
}

/// Groups wardrobe entries by shared model.
///
/// Holds nothing but the catalog handle; every call works only on its input.
pub struct GroupingEngine<L> {
    lookup: L,
}

impl<L: ItemMetadataLookup> GroupingEngine<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Build the ordered shared-model groups for a snapshot.
    ///
    /// Any catalog failure aborts the whole call; there are no partial results.
    pub fn group(&self, entries: &[RawWardrobeEntry]) -> Result<Vec<SharedModelGroup>> {
        let unique = dedup_entries(entries);

        let mut classified = Vec::with_capacity(unique.len());
        for entry in unique {
            let slot = self.field(entry.item_id, "slot category", |l, id| {
                l.slot_category(id)
            })?;
            if !slot.is_known() {
                continue;
            }

            let model = self.field(entry.item_id, "model", |l, id| l.model(id))?;
            let key = GroupKey::new(slot, model);
            classified.push(Classified {
                entry,
                key,
                model_id: key.model.id_string(),
            });
        }

        let shared = retain_shared(classified);
        debug!("{} items share a model with another item", shared.len());

        let mut by_slot: HashMap<SlotCategory, Vec<Classified>> = HashMap::new();
        for item in shared {
            by_slot.entry(item.key.slot).or_default().push(item);
        }

        let mut groups = Vec::with_capacity(by_slot.len());
        for (slot_category, mut members) in by_slot {
            // Stable: equal model ids keep wardrobe order
            members.sort_by(|a, b| a.model_id.cmp(&b.model_id));

            let items = members
                .into_iter()
                .map(|member| self.enrich(member))
                .collect::<Result<Vec<_>>>()?;

            groups.push(SharedModelGroup {
                slot_category,
                items,
            });
        }

        groups.sort_by_key(|group| group.slot_category.order());
        Ok(groups)
    }

    fn enrich(&self, member: Classified) -> Result<EnrichedItem> {
        let Classified {
            entry, model_id, ..
        } = member;
        let item_id = entry.item_id;

        let name = self.field(item_id, "name", |l, id| l.name(id))?;
        let icon_id = if entry.icon_id != 0 {
            entry.icon_id
        } else {
            self.field(item_id, "icon", |l, id| l.icon(id))?
        };
        let dye_count = self.field(item_id, "dye count", |l, id| l.dye_count(id))?;
        let can_go_in_armoire = self.field(item_id, "armoire eligibility", |l, id| {
            l.is_armoire_eligible(id)
        })?;

        Ok(EnrichedItem {
            item_id,
            name,
            icon_id,
            slot: entry.slot,
            model_id,
            dye_count,
            can_go_in_armoire,
        })
    }

    /// Run one catalog query, reporting failures as `MetadataLookup`
    fn field<T>(
        &self,
        item_id: u32,
        field: &'static str,
        query: impl FnOnce(&L, u32) -> Result<T>,
    ) -> Result<T> {
        query(&self.lookup, item_id).map_err(|e| match e {
            Error::MetadataLookup { .. } => e,
            other => Error::lookup(item_id, field, other.to_string()),
        })
    }
}

/// Drop repeated `(slot, item_id)` pairs, keeping the first occurrence
pub fn dedup_entries(entries: &[RawWardrobeEntry]) -> Vec<RawWardrobeEntry> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .filter(|entry| seen.insert(entry.key()))
        .copied()
        .collect()
}

/// Keep only items whose (slot, model) bucket has at least two members,
/// preserving input order
fn retain_shared(classified: Vec<Classified>) -> Vec<Classified> {
    let mut counts: HashMap<GroupKey, usize> = HashMap::new();
    for item in &classified {
        *counts.entry(item.key).or_default() += 1;
    }

    classified
        .into_iter()
        .filter(|item| counts.get(&item.key).copied().unwrap_or(0) >= 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ItemRow, StaticCatalog};
    use crate::slot::CategoryFlags;

    fn row(id: u32, slot: SlotCategory, model_main: u64) -> ItemRow {
        ItemRow {
            id,
            name: format!("Item {}", id),
            icon: 1000 + id,
            model_main,
            dye_count: (id % 3) as u8,
            equip_slot: Some(CategoryFlags::only(slot)),
        }
    }

    fn entry(slot: u32, item_id: u32) -> RawWardrobeEntry {
        RawWardrobeEntry::new(slot, item_id)
    }

    fn ids(group: &SharedModelGroup) -> Vec<u32> {
        group.items.iter().map(|item| item.item_id).collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut first = entry(1, 5);
        first.icon_id = 11;
        let mut dup = entry(1, 5);
        dup.icon_id = 22;

        let unique = dedup_entries(&[first, dup, entry(2, 5)]);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].icon_id, 11);
        assert_eq!(unique[1].key(), (2, 5));
    }

    #[test]
    fn test_singletons_are_excluded() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(row(1, SlotCategory::Body, 10));
        catalog.insert(row(2, SlotCategory::Body, 10));
        catalog.insert(row(3, SlotCategory::Body, 20));

        let engine = GroupingEngine::new(&catalog);
        let groups = engine
            .group(&[entry(0, 1), entry(1, 2), entry(2, 3)])
            .unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].slot_category, SlotCategory::Body);
        assert_eq!(ids(&groups[0]), vec![1, 2]);
        assert!(groups[0].items.iter().all(|i| i.model_id == "10-0-0-0"));
    }

    #[test]
    fn test_same_model_different_slot_is_not_shared() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(row(1, SlotCategory::Head, 10));
        catalog.insert(row(2, SlotCategory::Body, 10));

        let engine = GroupingEngine::new(&catalog);
        assert!(engine.group(&[entry(0, 1), entry(1, 2)]).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_entries_do_not_form_a_group() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(row(1, SlotCategory::Head, 10));

        let engine = GroupingEngine::new(&catalog);
        assert!(engine.group(&[entry(0, 1), entry(0, 1)]).unwrap().is_empty());
    }

    #[test]
    fn test_same_item_in_two_slots_is_shared() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(row(1, SlotCategory::Head, 10));

        let engine = GroupingEngine::new(&catalog);
        let groups = engine.group(&[entry(0, 1), entry(4, 1)]).unwrap();
        assert_eq!(ids(&groups[0]), vec![1, 1]);
        assert_eq!(groups[0].items[1].slot, 4);
    }

    #[test]
    fn test_unknown_slots_are_dropped() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(ItemRow {
            id: 1,
            name: "Gil".to_string(),
            model_main: 10,
            ..Default::default()
        });
        catalog.insert(ItemRow {
            id: 2,
            name: "Potion".to_string(),
            model_main: 10,
            ..Default::default()
        });

        let engine = GroupingEngine::new(&catalog);
        let groups = engine
            .group(&[entry(0, 1), entry(1, 2), entry(2, 0), entry(3, 0), entry(4, 77)])
            .unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_weapons_split_by_variant() {
        let weapon = |variant: u64| 201 | 13 << 16 | variant << 32;
        let mut catalog = StaticCatalog::new();
        catalog.insert(row(1, SlotCategory::MainHand, weapon(1)));
        catalog.insert(row(2, SlotCategory::MainHand, weapon(2)));
        catalog.insert(row(3, SlotCategory::MainHand, weapon(1)));

        let engine = GroupingEngine::new(&catalog);
        let groups = engine
            .group(&[entry(0, 1), entry(1, 2), entry(2, 3)])
            .unwrap();
        assert_eq!(ids(&groups[0]), vec![1, 3]);
        assert_eq!(groups[0].items[0].model_id, "201-13-1-0");
    }

    #[test]
    fn test_items_sorted_by_model_within_slot() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(row(1, SlotCategory::Feet, 30));
        catalog.insert(row(2, SlotCategory::Feet, 12));
        catalog.insert(row(3, SlotCategory::Feet, 30));
        catalog.insert(row(4, SlotCategory::Feet, 12));
        catalog.insert(row(5, SlotCategory::Feet, 30));

        let engine = GroupingEngine::new(&catalog);
        let groups = engine
            .group(&[entry(0, 5), entry(1, 1), entry(2, 2), entry(3, 3), entry(4, 4)])
            .unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec![2, 4, 5, 1, 3]);
        let sizes: Vec<usize> = groups[0].clusters().map(<[EnrichedItem]>::len).collect();
        assert_eq!(sizes, vec![2, 3]);
    }

    #[test]
    fn test_groups_sorted_by_slot_order() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(row(1, SlotCategory::Legs, 1));
        catalog.insert(row(2, SlotCategory::Legs, 1));
        catalog.insert(row(3, SlotCategory::Ring, 2));
        catalog.insert(row(4, SlotCategory::Ring, 2));
        catalog.insert(row(5, SlotCategory::MainHand, 3 | 1 << 32));
        catalog.insert(row(6, SlotCategory::MainHand, 3 | 1 << 32));

        let engine = GroupingEngine::new(&catalog);
        let entries: Vec<_> = (1..=6).map(|id| entry(id, id)).collect();
        let slots: Vec<SlotCategory> = engine
            .group(&entries)
            .unwrap()
            .iter()
            .map(|g| g.slot_category)
            .collect();
        assert_eq!(
            slots,
            vec![SlotCategory::MainHand, SlotCategory::Legs, SlotCategory::Ring]
        );
    }

    #[test]
    fn test_enrichment_uses_catalog() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(row(1, SlotCategory::Head, 10));
        catalog.insert(row(2, SlotCategory::Head, 10));
        catalog.mark_armoire(2);

        let mut cached_icon = entry(0, 1);
        cached_icon.icon_id = 555;

        let engine = GroupingEngine::new(&catalog);
        let groups = engine.group(&[cached_icon, entry(1, 2)]).unwrap();
        let items = &groups[0].items;

        assert_eq!(items[0].name, "Item 1");
        assert_eq!(items[0].icon_id, 555);
        assert_eq!(items[1].icon_id, 1002);
        assert_eq!(items[0].dye_count, 1);
        assert_eq!(items[1].dye_count, 2);
        assert!(!items[0].can_go_in_armoire);
        assert!(items[1].can_go_in_armoire);
    }

    #[test]
    fn test_empty_input() {
        let catalog = StaticCatalog::new();
        let engine = GroupingEngine::new(&catalog);
        assert!(engine.group(&[]).unwrap().is_empty());
    }

    /// Catalog that cannot resolve names for one item
    struct BrokenNames {
        inner: StaticCatalog,
        broken: u32,
    }

    impl ItemMetadataLookup for BrokenNames {
        fn model_main(&self, item_id: u32) -> Result<u64> {
            self.inner.model_main(item_id)
        }

        fn name(&self, item_id: u32) -> Result<String> {
            if item_id == self.broken {
                return Err(Error::Io(std::io::Error::other("sheet unloaded")));
            }
            self.inner.name(item_id)
        }

        fn icon(&self, item_id: u32) -> Result<u32> {
            self.inner.icon(item_id)
        }

        fn dye_count(&self, item_id: u32) -> Result<u8> {
            self.inner.dye_count(item_id)
        }

        fn slot_category_flags(&self, item_id: u32) -> Result<Option<CategoryFlags>> {
            self.inner.slot_category_flags(item_id)
        }

        fn is_armoire_eligible(&self, item_id: u32) -> Result<bool> {
            self.inner.is_armoire_eligible(item_id)
        }
    }

    #[test]
    fn test_lookup_failure_aborts_scan() {
        let mut inner = StaticCatalog::new();
        for id in 1..=4 {
            inner.insert(row(id, SlotCategory::Gloves, 40));
        }
        let engine = GroupingEngine::new(BrokenNames { inner, broken: 3 });

        let entries: Vec<_> = (1..=4).map(|id| entry(id, id)).collect();
        let err = engine.group(&entries).unwrap_err();
        match err {
            Error::MetadataLookup { item_id, field, .. } => {
                assert_eq!(item_id, 3);
                assert_eq!(field, "name");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_failure_on_filtered_item_is_not_reached() {
        let mut inner = StaticCatalog::new();
        inner.insert(row(1, SlotCategory::Gloves, 40));
        inner.insert(row(2, SlotCategory::Gloves, 40));
        inner.insert(row(3, SlotCategory::Gloves, 41));
        let engine = GroupingEngine::new(BrokenNames { inner, broken: 3 });

        let groups = engine
            .group(&[entry(1, 1), entry(2, 2), entry(3, 3)])
            .unwrap();
        assert_eq!(ids(&groups[0]), vec![1, 2]);
    }
}
