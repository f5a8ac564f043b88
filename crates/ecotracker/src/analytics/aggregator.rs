use super::period::Period;
use crate::footprint::{CategoryKey, FootprintRecord};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodTotal {
    pub period: Period,
    pub total: f64,
}

/// Every amount recorded under one key.
///
/// The total is summed in ascending order once the amounts are settled, so it depends on
/// which amounts were added and never on the order they arrived in.
#[derive(Debug, Clone, Default)]
struct Contributions {
    amounts: Vec<f64>,
    total: f64,
}

impl Contributions {
    fn settle(&mut self) {
        self.amounts.sort_by(f64::total_cmp);
        self.total = self.amounts.iter().sum();
    }
}

/// Summed amounts per key.
///
/// Equality compares the settled totals only.
#[derive(Debug, Clone)]
pub struct Totals<K> {
    entries: BTreeMap<K, Contributions>,
}

/// Totals per calendar month.
pub type MonthlyTotals = Totals<Period>;

/// Totals per footprint category.
pub type CategoryTotals = Totals<CategoryKey>;

impl<K> Default for Totals<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> Totals<K> {
    fn add(&mut self, key: K, amount: f64) {
        self.entries.entry(key).or_default().amounts.push(amount);
    }

    fn absorb(&mut self, other: &Totals<K>) {
        for (key, contributions) in &other.entries {
            self.entries
                .entry(*key)
                .or_default()
                .amounts
                .extend_from_slice(&contributions.amounts);
        }
    }

    fn settle(&mut self) {
        self.entries.values_mut().for_each(Contributions::settle);
    }

    pub fn get(&self, key: K) -> Option<f64> {
        self.entries.get(&key).map(|contributions| contributions.total)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in ascending order with their totals.
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.entries
            .iter()
            .map(|(key, contributions)| (*key, contributions.total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Totals<Period> {
    pub fn chronological(&self) -> Vec<PeriodTotal> {
        self.iter()
            .map(|(period, total)| PeriodTotal { period, total })
            .collect()
    }
}

impl<K: Ord> Index<&K> for Totals<K> {
    type Output = f64;

    fn index(&self, key: &K) -> &f64 {
        &self.entries[key].total
    }
}

impl<K: Ord> PartialEq for Totals<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(key, contributions)| {
                other
                    .entries
                    .get(key)
                    .is_some_and(|theirs| theirs.total == contributions.total)
            })
    }
}

impl<K: Serialize> Serialize for Totals<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, contributions) in &self.entries {
            map.serialize_entry(key, &contributions.total)?;
        }
        map.end()
    }
}

/// Period and category roll-up of a record collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationSummary {
    pub monthly_totals: MonthlyTotals,
    pub category_totals: CategoryTotals,
}

impl AggregationSummary {
    pub fn is_empty(&self) -> bool {
        self.monthly_totals.is_empty() && self.category_totals.is_empty()
    }

    /// Pointwise sum of two summaries. Equal to aggregating both record sets at once.
    pub fn merge(mut self, other: &AggregationSummary) -> Self {
        self.monthly_totals.absorb(&other.monthly_totals);
        self.category_totals.absorb(&other.category_totals);
        self.settle();
        self
    }

    fn absorb(&mut self, record: &FootprintRecord) {
        self.monthly_totals
            .add(record.period(), record.total_footprint);
        for (category, value) in &record.categories {
            self.category_totals.add(*category, *value);
        }
    }

    fn settle(&mut self) {
        self.monthly_totals.settle();
        self.category_totals.settle();
    }
}

/// Fold records into monthly and category totals.
///
/// Owner-agnostic: pass a pre-filtered iterator to summarise a single user. The result
/// does not depend on the order of `records`.
pub fn aggregate<'a, I>(records: I) -> AggregationSummary
where
    I: IntoIterator<Item = &'a FootprintRecord>,
{
    let mut summary = records
        .into_iter()
        .fold(AggregationSummary::default(), |mut summary, record| {
            summary.absorb(record);
            summary
        });
    summary.settle();
    summary
}
