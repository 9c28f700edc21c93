//! View model: the filtered subset of the inventory plus its summary.
//!
//! This is a pure function of `(items, query)`; rendering it is somebody
//! else's job.

use crate::item::{Category, Item, Price};

/// Search text plus optional category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    search: String,
    category: Option<Category>,
}

impl ViewQuery {
    pub fn new(search: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// No search text and no category: every item is shown.
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty() && self.category.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        matches_needle(&self.needle(), self.category, item)
    }
}

fn matches_needle(needle: &str, category: Option<Category>, item: &Item) -> bool {
    let text_ok = needle.is_empty()
        || item.name.to_lowercase().contains(needle)
        || item.category.label().to_lowercase().contains(needle);
    let category_ok = category.is_none_or(|c| item.category == c);
    text_ok && category_ok
}

/// Aggregates over exactly the displayed items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_quantity: u64,
    pub total_value: Price,
}

impl Summary {
    pub fn of<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        items.into_iter().fold(Summary::default(), |acc, item| Summary {
            total_quantity: acc.total_quantity.saturating_add(item.quantity),
            total_value: acc.total_value + item.value(),
        })
    }
}

/// Filtered items (store order preserved) and their summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel<'a> {
    pub items: Vec<&'a Item>,
    pub summary: Summary,
}

impl ViewModel<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn compute_view_model<'a>(items: &'a [Item], query: &ViewQuery) -> ViewModel<'a> {
    let visible: Vec<&Item> = if query.is_unfiltered() {
        items.iter().collect()
    } else {
        let needle = query.needle();
        items
            .iter()
            .filter(|item| matches_needle(&needle, query.category, item))
            .collect()
    };

    let summary = Summary::of(visible.iter().copied());
    ViewModel {
        items: visible,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_items;
    use chrono::NaiveDate;
    use stockroom_core::ItemId;

    fn ids(view: &ViewModel<'_>) -> Vec<u64> {
        view.items.iter().map(|i| i.id.get()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_store_order() {
        let items = seed_items();
        let view = compute_view_model(&items, &ViewQuery::all());
        assert_eq!(ids(&view), (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let items = seed_items();
        let view = compute_view_model(&items, &ViewQuery::new("  BLUETOOTH ", None));
        assert_eq!(ids(&view), vec![1]);
    }

    #[test]
    fn search_matches_category_label() {
        let items = seed_items();
        let view = compute_view_model(&items, &ViewQuery::new("hogar", None));
        assert_eq!(ids(&view), vec![6, 10, 13]);
    }

    #[test]
    fn category_selector_is_exact() {
        let items = seed_items();
        let view = compute_view_model(&items, &ViewQuery::new("", Some(Category::Electronics)));
        assert_eq!(ids(&view), vec![1, 3, 4, 8, 15]);
    }

    #[test]
    fn combined_filters_intersect() {
        let items = seed_items();
        let view = compute_view_model(&items, &ViewQuery::new("USB", Some(Category::Electronics)));
        assert_eq!(ids(&view), vec![8]);

        let none = compute_view_model(&items, &ViewQuery::new("USB", Some(Category::Home)));
        assert!(none.is_empty());
        assert_eq!(none.summary, Summary::default());
    }

    #[test]
    fn summary_covers_only_filtered_items() {
        let items = seed_items();
        let view = compute_view_model(&items, &ViewQuery::new("", Some(Category::Office)));
        // 5 + 40 + 60
        assert_eq!(view.summary.total_quantity, 105);
        // 5×1899.99 + 40×59.50 + 60×89.00
        assert_eq!(view.summary.total_value.cents(), 949995 + 238000 + 534000);
    }

    #[test]
    fn summary_of_two_items() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let make = |id, quantity, cents| Item {
            id: ItemId::new(id),
            name: format!("item {id}"),
            category: Category::Electronics,
            quantity,
            price: Price::from_cents(cents),
            supplier_email: String::new(),
            date_in: date,
        };
        let items = vec![make(1, 12, 49900), make(2, 20, 28950)];

        let summary = Summary::of(&items);
        assert_eq!(summary.total_quantity, 32);
        assert_eq!(summary.total_value, Price::from_cents(1_177_800));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_category() -> impl Strategy<Value = Category> {
            prop::sample::select(Category::ALL.to_vec())
        }

        fn arb_items() -> impl Strategy<Value = Vec<Item>> {
            prop::collection::vec(
                ("[A-Za-z ]{1,12}", arb_category(), 0u64..500, 0u64..1_000_000),
                0..30,
            )
            .prop_map(|rows| {
                let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
                rows.into_iter()
                    .zip(1u64..)
                    .map(|((name, category, quantity, cents), id)| Item {
                        id: ItemId::new(id),
                        name,
                        category,
                        quantity,
                        price: Price::from_cents(cents),
                        supplier_email: String::new(),
                        date_in: date,
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: the view is exactly the items the predicate accepts, in order.
            #[test]
            fn view_is_ordered_predicate_subset(
                items in arb_items(),
                search in "[A-Za-z]{0,3}",
                category in prop::option::of(arb_category()),
            ) {
                let query = ViewQuery::new(search, category);
                let view = compute_view_model(&items, &query);

                let expected: Vec<&Item> = items.iter().filter(|i| query.matches(i)).collect();
                prop_assert_eq!(view.items, expected);
            }

            /// Property: summary equals a direct sum over the visible items.
            #[test]
            fn summary_matches_direct_sum(
                items in arb_items(),
                category in prop::option::of(arb_category()),
            ) {
                let view = compute_view_model(&items, &ViewQuery::new("", category));
                let quantity: u64 = view.items.iter().map(|i| i.quantity).sum();
                let cents: u64 = view.items.iter().map(|i| i.quantity * i.price.cents()).sum();
                prop_assert_eq!(view.summary.total_quantity, quantity);
                prop_assert_eq!(view.summary.total_value.cents(), cents);
            }
        }
    }
}
