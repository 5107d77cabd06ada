//! Frequency tables over category values

use crate::category::{Categorical, CategoryValue};
use std::collections::HashMap;

/// Occurrence counts per category
///
/// Iteration follows first-seen order of the counted input. That order is an
/// implementation detail for display purposes: use [`FrequencyTable::sorted_by_key`]
/// or [`FrequencyTable::sorted_by_count`] when presentation order matters.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(CategoryValue, usize)>,
    /// Position of each category in `entries`
    index: HashMap<CategoryValue, usize>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count values as-is, without bucketing
    pub fn from_values<V: Categorical>(values: &[V]) -> Self {
        values.iter().map(Categorical::to_category).collect()
    }

    /// Record one occurrence of `category`
    pub fn increment(&mut self, category: CategoryValue) {
        self.add(category, 1);
    }

    /// Record `n` occurrences of `category`
    ///
    /// Adding zero still registers the category, which keeps zero-count
    /// categories representable for callers that pre-seed a table.
    pub fn add(&mut self, category: CategoryValue, n: usize) {
        match self.index.get(&category) {
            Some(&pos) => self.entries[pos].1 += n,
            None => {
                self.index.insert(category.clone(), self.entries.len());
                self.entries.push((category, n));
            }
        }
    }

    /// Count for `category`, zero when it was never seen
    pub fn get(&self, category: &CategoryValue) -> usize {
        self.index
            .get(category)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Count for anything convertible to a category
    pub fn count_of<V: Categorical + ?Sized>(&self, value: &V) -> usize {
        self.get(&value.to_category())
    }

    /// Number of registered categories (including zero-count ones)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no categories
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of observations
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Number of categories observed at least once
    pub fn observed_categories(&self) -> usize {
        self.entries.iter().filter(|(_, n)| *n > 0).count()
    }

    /// Iterate `(category, count)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryValue, usize)> + '_ {
        self.entries.iter().map(|(c, n)| (c, *n))
    }

    /// Counts in first-seen order
    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, n)| *n).collect()
    }

    /// Categories in first-seen order
    pub fn categories(&self) -> impl Iterator<Item = &CategoryValue> + '_ {
        self.entries.iter().map(|(c, _)| c)
    }

    /// Entries sorted by ascending category
    pub fn sorted_by_key(&self) -> Vec<(CategoryValue, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        sorted
    }

    /// Entries sorted by descending count, ties broken by ascending category
    pub fn sorted_by_count(&self) -> Vec<(CategoryValue, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted
    }
}

// Tables are equal when they hold the same counts, regardless of order.
impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(c, n)| other.index.contains_key(c) && other.get(c) == n)
    }
}

impl Eq for FrequencyTable {}

impl FromIterator<CategoryValue> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = CategoryValue>>(iter: I) -> Self {
        let mut table = Self::new();
        for category in iter {
            table.increment(category);
        }
        table
    }
}

impl FromIterator<(CategoryValue, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (CategoryValue, usize)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (category, n) in iter {
            table.add(category, n);
        }
        table
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (CategoryValue, usize);
    type IntoIter = std::vec::IntoIter<(CategoryValue, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
