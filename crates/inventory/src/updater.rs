//! Daily update pass over the inventory.

use crate::item::Item;

/// Age every item by one day, in place.
///
/// Items do not interact, so the result does not depend on their order. This
/// never fails: unknown names age as generic items and out-of-band qualities
/// are pulled back into range by the clamp.
pub fn update_quality(items: &mut [Item]) {
    let span = tracing::debug_span!("update_quality", items = items.len());
    let _enter = span.enter();

    for item in items.iter_mut() {
        item.age_one_day();
        tracing::trace!(
            name = item.name(),
            category = %item.category(),
            sell_in = item.sell_in,
            quality = item.quality,
            "item aged"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE, BACKSTAGE_PASSES, ItemCategory, SULFURAS};
    use crate::item::{MAX_QUALITY, MIN_QUALITY};
    use proptest::prelude::*;

    fn sample_inventory() -> Vec<Item> {
        vec![
            Item::new("+5 Dexterity Vest", 10, 20),
            Item::new(AGED_BRIE, 2, 0),
            Item::new("Elixir of the Mongoose", 5, 7),
            Item::new(SULFURAS, 0, 80),
            Item::new(SULFURAS, -1, 80),
            Item::new(BACKSTAGE_PASSES, 15, 20),
            Item::new(BACKSTAGE_PASSES, 10, 49),
            Item::new(BACKSTAGE_PASSES, 5, 49),
            Item::new("Conjured Mana Cake", 3, 6),
        ]
    }

    fn listing(items: &[Item]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn first_day_of_sample_inventory() {
        let mut items = sample_inventory();
        update_quality(&mut items);

        assert_eq!(
            listing(&items),
            vec![
                "+5 Dexterity Vest, 9, 19",
                "Aged Brie, 1, 1",
                "Elixir of the Mongoose, 4, 6",
                "Sulfuras, Hand of Ragnaros, 0, 80",
                "Sulfuras, Hand of Ragnaros, -1, 80",
                "Backstage passes to a TAFKAL80ETC concert, 14, 21",
                "Backstage passes to a TAFKAL80ETC concert, 9, 50",
                "Backstage passes to a TAFKAL80ETC concert, 4, 50",
                "Conjured Mana Cake, 2, 5",
            ]
        );
    }

    #[test]
    fn repeated_days_reach_expiry_behaviour() {
        let mut items = sample_inventory();
        for _ in 0..11 {
            update_quality(&mut items);
        }

        assert_eq!(
            listing(&items),
            vec![
                "+5 Dexterity Vest, -1, 8",
                "Aged Brie, -9, 20",
                "Elixir of the Mongoose, -6, 0",
                "Sulfuras, Hand of Ragnaros, 0, 80",
                "Sulfuras, Hand of Ragnaros, -1, 80",
                "Backstage passes to a TAFKAL80ETC concert, 4, 38",
                "Backstage passes to a TAFKAL80ETC concert, -1, 0",
                "Backstage passes to a TAFKAL80ETC concert, -6, 0",
                "Conjured Mana Cake, -8, 0",
            ]
        );
    }

    #[test]
    fn empty_inventory_is_a_no_op() {
        let mut items: Vec<Item> = Vec::new();
        update_quality(&mut items);
        assert!(items.is_empty());
    }

    fn any_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(AGED_BRIE.to_string()),
            Just(SULFURAS.to_string()),
            Just(BACKSTAGE_PASSES.to_string()),
            "[A-Za-z +]{1,24}",
        ]
    }

    fn any_item() -> impl Strategy<Value = Item> {
        (any_name(), -1_000i32..1_000, -100i32..200)
            .prop_map(|(name, sell_in, quality)| Item::new(name, sell_in, quality))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after one pass every non-legendary item is within the
        /// quality band and one day closer to (or further past) its date.
        #[test]
        fn non_legendary_items_stay_in_band(
            mut items in prop::collection::vec(any_item(), 0..20)
        ) {
            let before = items.clone();
            update_quality(&mut items);

            for (old, new) in before.iter().zip(&items) {
                if old.category() == ItemCategory::Sulfuras {
                    prop_assert_eq!(old, new);
                } else {
                    prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&new.quality));
                    prop_assert_eq!(new.sell_in, old.sell_in - 1);
                }
            }
        }

        /// Property: updating the whole collection is the same as aging each
        /// item on its own, in any order.
        #[test]
        fn items_are_updated_independently(
            mut items in prop::collection::vec(any_item(), 0..20)
        ) {
            let mut one_by_one = items.clone();
            one_by_one.reverse();
            for item in &mut one_by_one {
                item.age_one_day();
            }
            one_by_one.reverse();

            update_quality(&mut items);
            prop_assert_eq!(items, one_by_one);
        }

        /// Property: the listing line parses back to the same item.
        #[test]
        fn listing_line_parses_back(item in any_item()) {
            // Names are trimmed on parse.
            let item = Item::new(item.name().trim(), item.sell_in, item.quality);
            prop_assume!(!item.name().is_empty());

            let parsed: Item = item.to_string().parse().unwrap();
            prop_assert_eq!(parsed, item);
        }
    }
}
