use crate::domain::{PublishedCity, SortKey};
use std::cmp::Ordering;

/// Cities whose name or country contains `query`, ignoring case. Dataset
/// order is preserved; an empty query keeps everything.
pub fn filter_cities<'a>(cities: &'a [PublishedCity], query: &str) -> Vec<&'a PublishedCity> {
    let needle = query.to_lowercase();
    cities.iter().filter(|city| city.matches(&needle)).collect()
}

/// Stable sort: cities with equal keys keep their current relative order.
pub fn sort_cities(cities: &mut [&PublishedCity], key: SortKey) {
    cities.sort_by(|a, b| compare(a, b, key));
}

fn compare(a: &PublishedCity, b: &PublishedCity, key: SortKey) -> Ordering {
    match key {
        SortKey::Total => b.total_score.total_cmp(&a.total_score),
        SortKey::Rent => a.rent_price_1br.cmp(&b.rent_price_1br),
        SortKey::Safety => b.safety_index.total_cmp(&a.safety_index),
        SortKey::Expat => b.expat_index.total_cmp(&a.expat_index),
    }
}

pub fn filter_and_sort<'a>(
    cities: &'a [PublishedCity],
    query: &str,
    key: SortKey,
) -> Vec<&'a PublishedCity> {
    let mut result = filter_cities(cities, query);
    sort_cities(&mut result, key);
    result
}

/// The two user inputs that drive the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    sort: SortKey,
}

impl ViewState {
    pub fn new(query: impl Into<String>, sort: SortKey) -> Self {
        Self {
            query: query.into(),
            sort,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Recovery action offered by the empty listing.
    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    /// Recomputed from scratch on every call; nothing is cached between inputs.
    pub fn apply<'a>(&self, dataset: &'a [PublishedCity]) -> CityListing<'a> {
        CityListing {
            query: self.query.clone(),
            sort: self.sort,
            cities: filter_and_sort(dataset, &self.query, self.sort),
        }
    }
}

/// An ordered, filtered view over the published dataset.
#[derive(Debug, Clone)]
pub struct CityListing<'a> {
    query: String,
    sort: SortKey,
    cities: Vec<&'a PublishedCity>,
}

impl<'a> CityListing<'a> {
    pub fn cities(&self) -> &[&'a PublishedCity] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn count_label(&self) -> String {
        format!("{} Cities Found", self.cities.len())
    }

    pub fn sort_label(&self) -> String {
        format!("Sorted by {}", self.sort.label())
    }

    pub fn search_label(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(format!("Search: {}", self.query))
        }
    }
}
