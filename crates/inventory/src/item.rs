use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::ItemCategory;

/// Lowest quality a non-legendary item can hold after an update.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can hold after an update.
pub const MAX_QUALITY: i32 = 50;

/// A stocked item.
///
/// The category is resolved from the name at construction and cached, so the
/// name is only readable. `sell_in` and `quality` are mutated in place by the
/// daily update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: ItemCategory,
    /// Days left before the item expires. Goes negative once expired.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::from_name(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Apply one day of aging to this item.
    ///
    /// The quality step is taken from `sell_in` before it is decremented. If
    /// the item is past its date after the decrement, expiry kicks in: generic
    /// items and brie take the step a second time, backstage passes become
    /// worthless. The result is clamped once at the end. Sulfuras is left
    /// untouched, clamp included.
    pub fn age_one_day(&mut self) {
        let category = self.category;
        match category {
            ItemCategory::Sulfuras => {}
            ItemCategory::Generic | ItemCategory::AgedBrie => {
                let mut delta = category.daily_step(self.sell_in);
                self.sell_in = self.sell_in.saturating_sub(1);
                if self.sell_in < 0 {
                    delta += category.daily_step(self.sell_in);
                }
                self.quality = clamp_quality(self.quality.saturating_add(delta));
            }
            ItemCategory::BackstagePass => {
                let delta = category.daily_step(self.sell_in);
                self.sell_in = self.sell_in.saturating_sub(1);
                self.quality = if self.sell_in < 0 {
                    MIN_QUALITY
                } else {
                    clamp_quality(self.quality.saturating_add(delta))
                };
            }
        }
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Listing line: `name, sell_in, quality`.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parses a listing line. The name may itself contain commas; only the last
/// two fields are numeric. Surrounding whitespace on each field is ignored.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let mut fields = s.rsplitn(3, ',');
        let quality = fields.next().map(str::trim);
        let sell_in = fields.next().map(str::trim);
        let name = fields.next().map(str::trim);

        let (Some(name), Some(sell_in), Some(quality)) = (name, sell_in, quality) else {
            return Err(DomainError::validation(
                "expected `name, sell_in, quality`",
            ));
        };
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let sell_in = sell_in
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_integer("sell_in", e))?;
        let quality = quality
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_integer("quality", e))?;

        Ok(Item::new(name, sell_in, quality))
    }
}

/// Wire shape of an item; the category is derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}
