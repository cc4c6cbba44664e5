use crate::error::Result;
use crate::model::ModelDescriptor;
use crate::slot::{CategoryFlags, SlotCategory};

/// Name shown for ids with no catalog row
pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";

/// Read-only queries against the static item catalog.
///
/// A missing row is not an error: implementations return the neutral value
/// (`0`, `false`, `None`, [`UNKNOWN_ITEM_NAME`]). `Err` means the catalog could
/// not be queried at all.
pub trait ItemMetadataLookup {
    fn model_main(&self, item_id: u32) -> Result<u64>;

    fn name(&self, item_id: u32) -> Result<String>;

    fn icon(&self, item_id: u32) -> Result<u32>;

    fn dye_count(&self, item_id: u32) -> Result<u8>;

    fn slot_category_flags(&self, item_id: u32) -> Result<Option<CategoryFlags>>;

    fn is_armoire_eligible(&self, item_id: u32) -> Result<bool>;

    /// Slot for an item id; id 0 is always Unknown
    fn slot_category(&self, item_id: u32) -> Result<SlotCategory> {
        if item_id == 0 {
            return Ok(SlotCategory::Unknown);
        }
        Ok(crate::slot::classify(
            self.slot_category_flags(item_id)?.as_ref(),
        ))
    }

    fn model(&self, item_id: u32) -> Result<ModelDescriptor> {
        Ok(ModelDescriptor::decode(self.model_main(item_id)?))
    }
}

impl<T: ItemMetadataLookup + ?Sized> ItemMetadataLookup for &T {
    fn model_main(&self, item_id: u32) -> Result<u64> {
        (**self).model_main(item_id)
    }

    fn name(&self, item_id: u32) -> Result<String> {
        (**self).name(item_id)
    }

    fn icon(&self, item_id: u32) -> Result<u32> {
        (**self).icon(item_id)
    }

    fn dye_count(&self, item_id: u32) -> Result<u8> {
        (**self).dye_count(item_id)
    }

    fn slot_category_flags(&self, item_id: u32) -> Result<Option<CategoryFlags>> {
        (**self).slot_category_flags(item_id)
    }

    fn is_armoire_eligible(&self, item_id: u32) -> Result<bool> {
        (**self).is_armoire_eligible(item_id)
    }
}
