//! Inventory aging rules.
//!
//! This crate contains the once-per-day update of `sell_in` and `quality` for
//! the inn's inventory, implemented purely as deterministic domain logic (no
//! IO, no scheduling, no storage).

pub mod category;
pub mod item;
pub mod updater;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, ItemCategory, SULFURAS};
pub use item::{Item, MAX_QUALITY, MIN_QUALITY};
pub use updater::update_quality;
