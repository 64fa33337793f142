//! Property-based tests for the expert directory query engine.

use std::collections::BTreeSet;

use common::directory_query::{evaluate, ExpertQuery, PriceRange, QueryFilter, SortKey};
use common::expert::{Availability, Expert};
use common::sample_data::CATEGORIES;
use proptest::prelude::*;

const SKILLS: [&str; 8] = [
    "Digital Marketing",
    "Interaction Design",
    "Risk Management",
    "Leadership Development",
    "Product Strategy",
    "Sales Operations",
    "Cloud Technology",
    "Brand Strategy",
];

const STATUSES: [&str; 4] = ["Available this week", "Available next week", "Limited availability", "Ask me"];

/// Ratings and rates on coarse grids so ties are common.
fn expert_strategy() -> impl Strategy<Value = Expert> {
    (
        "[a-z]{3,8}",
        "[A-Za-z ]{0,12}",
        0u32..=10,
        0u32..=40,
        prop::collection::vec(prop::sample::select(SKILLS.to_vec()), 1..4),
        prop::sample::select(STATUSES.to_vec()),
    )
        .prop_map(|(name, title, rating_steps, rate_steps, expertise, availability)| Expert {
            id: String::new(),
            name,
            title,
            image_url: String::new(),
            rating: rating_steps as f64 * 0.5,
            review_count: rate_steps,
            hourly_rate: rate_steps as f64 * 5.0,
            expertise: expertise.into_iter().map(|s| s.to_string()).collect(),
            availability: availability.to_string(),
        })
}

fn experts_strategy() -> impl Strategy<Value = Vec<Expert>> {
    prop::collection::vec(expert_strategy(), 0..20).prop_map(|mut experts| {
        for (i, expert) in experts.iter_mut().enumerate() {
            expert.id = i.to_string();
        }
        experts
    })
}

fn sort_key_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Recommended),
        Just(SortKey::Rating),
        Just(SortKey::PriceLow),
        Just(SortKey::PriceHigh),
    ]
}

fn query_strategy() -> impl Strategy<Value = ExpertQuery> {
    (
        prop_oneof![Just(String::new()), "[a-z]{1,4}", Just("strategy".to_string())],
        prop::collection::btree_set(prop::sample::select(CATEGORIES.to_vec()), 0..3),
        0u32..=40,
        0u32..=40,
        sort_key_strategy(),
        prop::collection::btree_set(prop::sample::select(Availability::FILTERABLE.to_vec()), 0..2),
    )
        .prop_map(|(search_text, categories, a, b, sort_key, availability)| ExpertQuery {
            search_text,
            selected_categories: categories.into_iter().map(|c| c.to_string()).collect::<BTreeSet<_>>(),
            price_range: PriceRange::new(a.min(b) as f64 * 5.0, a.max(b) as f64 * 5.0),
            sort_key,
            availability,
        })
}

fn position(experts: &[Expert], id: &str) -> usize {
    experts.iter().position(|e| e.id == id).unwrap()
}

proptest! {
    #[test]
    fn prop_evaluate_is_idempotent(experts in experts_strategy(), query in query_strategy()) {
        prop_assert_eq!(evaluate(&experts, &query), evaluate(&experts, &query));
    }

    #[test]
    fn prop_results_satisfy_every_filter(experts in experts_strategy(), query in query_strategy()) {
        let filter = QueryFilter::new(&query);
        let results = evaluate(&experts, &query);
        prop_assert!(results.len() <= experts.len());
        for expert in &results {
            prop_assert!(filter.matches(expert));
            prop_assert!(query.price_range.contains(expert.hourly_rate));
        }
        let expected = experts.iter().filter(|e| filter.matches(e)).count();
        prop_assert_eq!(results.len(), expected);
    }

    #[test]
    fn prop_adding_a_category_never_grows_the_result(
        experts in experts_strategy(),
        query in query_strategy(),
        category in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let mut unfiltered = query.clone();
        unfiltered.selected_categories.clear();
        let mut filtered = unfiltered.clone();
        filtered.selected_categories.insert(category.to_string());
        prop_assert!(evaluate(&experts, &filtered).len() <= evaluate(&experts, &unfiltered).len());
    }

    #[test]
    fn prop_adding_search_text_never_grows_the_result(
        experts in experts_strategy(),
        query in query_strategy(),
        text in "[a-z]{1,4}",
    ) {
        let mut unfiltered = query.clone();
        unfiltered.search_text.clear();
        let filtered = ExpertQuery { search_text: text, ..unfiltered.clone() };
        prop_assert!(evaluate(&experts, &filtered).len() <= evaluate(&experts, &unfiltered).len());
    }

    #[test]
    fn prop_price_bounds_are_inclusive(experts in experts_strategy()) {
        for expert in &experts {
            let rate = expert.hourly_rate;
            let at_min = ExpertQuery { price_range: PriceRange::new(rate, rate + 50.0), ..Default::default() };
            let at_max = ExpertQuery { price_range: PriceRange::new(0.0, rate), ..Default::default() };
            prop_assert!(evaluate(&experts, &at_min).iter().any(|e| e.id == expert.id));
            prop_assert!(evaluate(&experts, &at_max).iter().any(|e| e.id == expert.id));
        }
    }

    #[test]
    fn prop_sort_order_is_respected_and_stable(experts in experts_strategy(), sort_key in sort_key_strategy()) {
        let query = ExpertQuery { sort_key, ..Default::default() };
        let results = evaluate(&experts, &query);
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let tied = match sort_key {
                SortKey::Recommended => true,
                SortKey::Rating => {
                    prop_assert!(a.rating >= b.rating);
                    a.rating == b.rating
                }
                SortKey::PriceLow => {
                    prop_assert!(a.hourly_rate <= b.hourly_rate);
                    a.hourly_rate == b.hourly_rate
                }
                SortKey::PriceHigh => {
                    prop_assert!(a.hourly_rate >= b.hourly_rate);
                    a.hourly_rate == b.hourly_rate
                }
            };
            if tied {
                prop_assert!(position(&experts, &a.id) < position(&experts, &b.id));
            }
        }
    }

    #[test]
    fn prop_empty_input_gives_empty_output(query in query_strategy()) {
        prop_assert!(evaluate(&[], &query).is_empty());
    }

    #[test]
    fn prop_reset_reproduces_the_full_set(experts in experts_strategy(), mut query in query_strategy()) {
        query.reset();
        let results = evaluate(&experts, &query);
        // default price range is [0, 200] and generated rates stay within it
        prop_assert_eq!(results, experts);
    }
}
