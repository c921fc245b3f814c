//! Property tests for the cart ledger and the catalog filter.

use paint_commerce::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Event {
    Add(u64),
    Remove(u64),
    Update(u64, i64),
}

fn event() -> impl Strategy<Value = Event> {
    // Ids 1..=14 include two that are not in the paint catalog.
    prop_oneof![
        (1u64..=14).prop_map(Event::Add),
        (1u64..=14).prop_map(Event::Remove),
        ((1u64..=14), -5i64..=5).prop_map(|(id, d)| Event::Update(id, d)),
        ((1u64..=14), any::<i64>()).prop_map(|(id, d)| Event::Update(id, d)),
    ]
}

fn apply(store: &mut Storefront, event: &Event) {
    match *event {
        Event::Add(id) => {
            store.add_to_cart_by_id(ProductId::new(id));
        }
        Event::Remove(id) => store.remove_from_cart(ProductId::new(id)),
        Event::Update(id, delta) => {
            store.update_quantity(ProductId::new(id), delta);
        }
    }
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    let category = prop_oneof![
        Just("All".to_string()),
        Just("Rock Master".to_string()),
        Just("Emulsion".to_string()),
        Just("Varnish".to_string()),
    ];
    let query = prop_oneof![
        Just(String::new()),
        Just("stone".to_string()),
        Just("CLASSIC".to_string()),
        "[a-zA-Z ]{0,4}",
    ];
    (category, query).prop_map(|(c, q)| FilterState::new().with_category(c).with_query(q))
}

proptest! {
    #[test]
    fn test_quantities_stay_positive(events in prop::collection::vec(event(), 0..64)) {
        let mut store = Storefront::paints();
        for e in &events {
            apply(&mut store, e);
            prop_assert!(store.line_items().iter().all(|i| i.quantity >= 1));
        }
    }

    #[test]
    fn test_one_line_per_product(events in prop::collection::vec(event(), 0..64)) {
        let mut store = Storefront::paints();
        for e in &events {
            apply(&mut store, e);
        }
        let mut ids: Vec<ProductId> = store.line_items().iter().map(|i| i.product_id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_item_count_matches_quantities(events in prop::collection::vec(event(), 0..64)) {
        let mut store = Storefront::paints();
        for e in &events {
            apply(&mut store, e);
            let sum = store
                .line_items()
                .iter()
                .fold(0i64, |acc, i| acc.saturating_add(i.quantity));
            prop_assert_eq!(store.item_count(), sum);
        }
    }

    #[test]
    fn test_add_remove_round_trip(
        events in prop::collection::vec(event(), 0..32),
        id in 1u64..=12,
    ) {
        let mut store = Storefront::paints();
        for e in &events {
            apply(&mut store, e);
        }
        let id = ProductId::new(id);
        prop_assume!(store.cart().get_item(id).is_none());

        let before = store.line_items().to_vec();
        store.add_to_cart_by_id(id);
        store.remove_from_cart(id);
        prop_assert_eq!(store.line_items(), before.as_slice());
    }

    #[test]
    fn test_visible_is_ordered_subset(filter in filter_state()) {
        let catalog = Catalog::paints();
        let visible = visible_products(&catalog, &filter);

        let positions: Vec<usize> = visible
            .iter()
            .map(|v| catalog.iter().position(|p| p == *v).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for p in &visible {
            prop_assert!(filter.matches(p));
        }
    }

    #[test]
    fn test_filter_is_idempotent(filter in filter_state()) {
        let catalog = Catalog::paints();
        let first = visible_products(&catalog, &filter);
        let second = visible_products(&catalog, &filter);
        prop_assert_eq!(first, second);
    }
}
