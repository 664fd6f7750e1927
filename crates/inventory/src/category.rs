use serde::{Deserialize, Serialize};

/// Name of the cheese that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the legendary item that never ages.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the concert tickets whose value peaks right before the show.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Aging rule an item follows.
///
/// Resolved once from the item name. Any name that is not one of the special
/// names above ages as [`ItemCategory::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Generic,
    AgedBrie,
    Sulfuras,
    BackstagePass,
}

impl ItemCategory {
    /// Match a name exactly against the special names.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => ItemCategory::AgedBrie,
            SULFURAS => ItemCategory::Sulfuras,
            BACKSTAGE_PASSES => ItemCategory::BackstagePass,
            _ => ItemCategory::Generic,
        }
    }

    /// Canonical item name for the special categories.
    pub fn name(self) -> Option<&'static str> {
        match self {
            ItemCategory::Generic => None,
            ItemCategory::AgedBrie => Some(AGED_BRIE),
            ItemCategory::Sulfuras => Some(SULFURAS),
            ItemCategory::BackstagePass => Some(BACKSTAGE_PASSES),
        }
    }

    /// Quality change for one day, decided from the `sell_in` seen on that day.
    ///
    /// Generic items and brie change by a single unit; the doubling after
    /// expiry comes from applying the step twice. Backstage passes step by
    /// 1/2/3 as the concert approaches. Sulfuras never changes.
    pub fn daily_step(self, sell_in: i32) -> i32 {
        match self {
            ItemCategory::Generic => -1,
            ItemCategory::AgedBrie => 1,
            ItemCategory::Sulfuras => 0,
            ItemCategory::BackstagePass => match sell_in {
                11.. => 1,
                6..=10 => 2,
                _ => 3,
            },
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            ItemCategory::Generic => "generic",
            ItemCategory::AgedBrie => "aged_brie",
            ItemCategory::Sulfuras => "sulfuras",
            ItemCategory::BackstagePass => "backstage_pass",
        };
        f.write_str(label)
    }
}
