//! Expert directory query model and the filter/sort engine behind the directory page.
//!
//! [`evaluate`] is a pure function of its inputs: it never mutates the query or the
//! records, and an empty result is a normal outcome.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::directory_const::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
use crate::expert::{Availability, Expert};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    Recommended,
    Rating,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Recommended, SortKey::Rating, SortKey::PriceLow, SortKey::PriceHigh];

    /// Unknown keys fall back to [`SortKey::Recommended`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "rating" => SortKey::Rating,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            _ => SortKey::Recommended,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::Rating => "rating",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recommended => "Recommended",
            SortKey::Rating => "Highest Rated",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::from_key(&value)
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.as_key().to_string()
    }
}

/// Inclusive hourly-rate bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: DEFAULT_PRICE_MIN, max: DEFAULT_PRICE_MAX }
    }
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Swaps reversed bounds.
    pub fn normalized(self) -> Self {
        if self.min > self.max {
            Self { min: self.max, max: self.min }
        } else {
            self
        }
    }

    pub fn contains(&self, rate: f64) -> bool {
        let PriceRange { min, max } = self.normalized();
        min <= rate && rate <= max
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExpertQuery {
    pub search_text: String,
    pub selected_categories: BTreeSet<String>,
    pub price_range: PriceRange,
    pub sort_key: SortKey,
    pub availability: BTreeSet<Availability>,
}

impl ExpertQuery {
    pub fn from_search_text(search_text: String) -> Self {
        Self { search_text, ..Default::default() }
    }

    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
    }

    pub fn toggle_availability(&mut self, availability: Availability) {
        if !self.availability.remove(&availability) {
            self.availability.insert(availability);
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}


/// Filter predicates of one query, with the lower-cased needles computed once.
pub struct QueryFilter {
    search_text: Option<String>,
    categories: Vec<String>,
    price_range: PriceRange,
    availability: BTreeSet<Availability>,
}

impl QueryFilter {
    pub fn new(query: &ExpertQuery) -> Self {
        let search_text = query.search_text.trim();
        Self {
            search_text: (!search_text.is_empty()).then(|| search_text.to_lowercase()),
            categories: query.selected_categories.iter().map(|c| c.to_lowercase()).collect(),
            price_range: query.price_range.normalized(),
            availability: query.availability.clone(),
        }
    }

    pub fn matches(&self, expert: &Expert) -> bool {
        self.matches_search_text(expert)
            && self.matches_categories(expert)
            && self.price_range.contains(expert.hourly_rate)
            && self.matches_availability(expert)
    }

    fn matches_search_text(&self, expert: &Expert) -> bool {
        let Some(needle) = &self.search_text else { return true };
        expert.name.to_lowercase().contains(needle.as_str())
            || expert.title.to_lowercase().contains(needle.as_str())
            || expert.expertise.iter().any(|skill| skill.to_lowercase().contains(needle.as_str()))
    }

    fn matches_categories(&self, expert: &Expert) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        expert.expertise.iter().any(|skill| {
            let skill = skill.to_lowercase();
            self.categories.iter().any(|category| skill.contains(category.as_str()))
        })
    }

    fn matches_availability(&self, expert: &Expert) -> bool {
        self.availability.is_empty() || self.availability.contains(&expert.availability_window())
    }
}

/// Total order that treats `-0.0` and `0.0` as the same value.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    // adding 0.0 turns -0.0 into 0.0
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Stable sort: experts with equal keys keep their relative order.
pub fn sort_experts(experts: &mut [Expert], sort_key: SortKey) {
    match sort_key {
        SortKey::Recommended => {}
        SortKey::Rating => experts.sort_by(|a, b| cmp_f64(b.rating, a.rating)),
        SortKey::PriceLow => experts.sort_by(|a, b| cmp_f64(a.hourly_rate, b.hourly_rate)),
        SortKey::PriceHigh => experts.sort_by(|a, b| cmp_f64(b.hourly_rate, a.hourly_rate)),
    }
}

/// Returns the experts matching every active filter of `query`, ordered by its sort key.
pub fn evaluate(records: &[Expert], query: &ExpertQuery) -> Vec<Expert> {
    let filter = QueryFilter::new(query);
    let mut results = records.iter().filter(|expert| filter.matches(expert)).cloned().collect::<Vec<_>>();
    sort_experts(&mut results, query.sort_key);
    results
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::sample_experts;

    fn ids(experts: &[Expert]) -> Vec<&str> {
        experts.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn default_query_returns_everything_in_input_order() {
        let experts = sample_experts();
        let result = evaluate(&experts, &ExpertQuery::default());
        assert_eq!(result, experts);
    }

    #[test]
    fn search_text_matches_name_title_or_expertise() {
        let experts = sample_experts();

        let by_title = evaluate(&experts, &ExpertQuery::from_search_text("marketing".to_string()));
        assert_eq!(ids(&by_title), vec!["1"]);

        let by_name = evaluate(&experts, &ExpertQuery::from_search_text("CHEN".to_string()));
        assert_eq!(ids(&by_name), vec!["2"]);

        let by_skill = evaluate(&experts, &ExpertQuery::from_search_text("prototyping".to_string()));
        assert_eq!(ids(&by_skill), vec!["3"]);
    }

    #[test]
    fn whitespace_only_search_is_inactive() {
        let experts = sample_experts();
        let result = evaluate(&experts, &ExpertQuery::from_search_text("   ".to_string()));
        assert_eq!(result.len(), experts.len());
    }

    #[test]
    fn search_text_is_trimmed() {
        let experts = sample_experts();
        let result = evaluate(&experts, &ExpertQuery::from_search_text("  coach ".to_string()));
        assert_eq!(ids(&result), vec!["5"]);
    }

    #[test]
    fn category_matches_expertise_substring() {
        let experts = sample_experts();
        let mut query = ExpertQuery::default();
        query.toggle_category("Design");
        assert_eq!(ids(&evaluate(&experts, &query)), vec!["3"]);

        // categories are OR-ed together
        query.toggle_category("Leadership");
        assert_eq!(ids(&evaluate(&experts, &query)), vec!["3", "5"]);
    }

    #[test]
    fn category_without_matching_tag_yields_nothing() {
        let experts = sample_experts();
        let mut query = ExpertQuery::default();
        query.toggle_category("Finance");
        assert!(evaluate(&experts, &query).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let experts = sample_experts();
        let query = ExpertQuery { price_range: PriceRange::new(100.0, 130.0), ..Default::default() };
        assert_eq!(ids(&evaluate(&experts, &query)), vec!["1", "6"]);

        let query = ExpertQuery { price_range: PriceRange::new(95.0, 120.0), ..Default::default() };
        assert_eq!(ids(&evaluate(&experts, &query)), vec!["1", "3", "6"]);
    }

    #[test]
    fn reversed_price_bounds_are_swapped() {
        let experts = sample_experts();
        let reversed = ExpertQuery { price_range: PriceRange::new(130.0, 100.0), ..Default::default() };
        let ordered = ExpertQuery { price_range: PriceRange::new(100.0, 130.0), ..Default::default() };
        assert_eq!(evaluate(&experts, &reversed), evaluate(&experts, &ordered));
    }

    #[test]
    fn sorts_by_rating_descending_with_stable_ties() {
        let experts = sample_experts();
        let query = ExpertQuery { sort_key: SortKey::Rating, ..Default::default() };
        // 4.9: 1, 4 / 4.8: 2, 5 / 4.7: 3 / 4.6: 6
        assert_eq!(ids(&evaluate(&experts, &query)), vec!["1", "4", "2", "5", "3", "6"]);
    }

    #[test]
    fn sorts_by_price_both_directions() {
        let experts = sample_experts();
        let low = ExpertQuery { sort_key: SortKey::PriceLow, ..Default::default() };
        assert_eq!(ids(&evaluate(&experts, &low)), vec!["3", "6", "1", "5", "2", "4"]);

        let high = ExpertQuery { sort_key: SortKey::PriceHigh, ..Default::default() };
        assert_eq!(ids(&evaluate(&experts, &high)), vec!["4", "2", "5", "1", "6", "3"]);
    }

    #[test]
    fn signed_zero_rates_tie_and_keep_input_order() {
        let mut experts = sample_experts()[..2].to_vec();
        experts[0].hourly_rate = 0.0;
        experts[1].hourly_rate = -0.0;
        for sort_key in [SortKey::PriceLow, SortKey::PriceHigh] {
            let query = ExpertQuery { sort_key, ..Default::default() };
            assert_eq!(ids(&evaluate(&experts, &query)), vec!["1", "2"]);
        }
    }

    #[test]
    fn unknown_sort_key_falls_back_to_recommended() {
        assert_eq!(SortKey::from_key("alphabetical"), SortKey::Recommended);
        assert_eq!(SortKey::from(String::new()), SortKey::Recommended);
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_key(key.as_key()), key);
        }
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let experts = sample_experts();
        let result = evaluate(&experts, &ExpertQuery::from_search_text("zzz-no-match".to_string()));
        assert!(result.is_empty());
        assert!(evaluate(&[], &ExpertQuery::default()).is_empty());
    }

    #[test]
    fn availability_filter_uses_status_window() {
        let experts = sample_experts();
        let mut query = ExpertQuery::default();
        query.toggle_availability(Availability::ThisWeek);
        assert_eq!(ids(&evaluate(&experts, &query)), vec!["2", "5"]);

        query.toggle_availability(Availability::NextWeek);
        assert_eq!(ids(&evaluate(&experts, &query)), vec!["1", "2", "4", "5"]);

        query.toggle_availability(Availability::ThisWeek);
        query.toggle_availability(Availability::NextWeek);
        assert!(query.availability.is_empty());
    }

    #[test]
    fn reset_restores_full_set() {
        let experts = sample_experts();
        let mut query = ExpertQuery::from_search_text("design".to_string());
        query.toggle_category("Marketing");
        query.price_range = PriceRange::new(150.0, 160.0);
        query.sort_key = SortKey::PriceHigh;
        assert!(!query.is_default());

        query.reset();
        assert!(query.is_default());
        assert_eq!(evaluate(&experts, &query), experts);
    }

    #[test]
    fn evaluate_leaves_inputs_untouched() {
        let experts = sample_experts();
        let query = ExpertQuery { sort_key: SortKey::PriceLow, ..Default::default() };
        let query_before = query.clone();
        let _ = evaluate(&experts, &query);
        assert_eq!(query, query_before);
        assert_eq!(experts, sample_experts());
    }
}
