//! Per-year aggregates
//!
//! Counters can only move through [`YearAggregate::record`], which bumps
//! `total` together with exactly one category counter, so
//! `total == eco_only + sec_only + mixed + none` always holds.

use crate::classify::Category;
use crate::year::Year;
use std::collections::BTreeMap;

/// Category counts for one year bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearAggregate {
    year: Year,
    total: usize,
    eco_only: usize,
    sec_only: usize,
    mixed: usize,
    none: usize,
}

impl YearAggregate {
    /// Zeroed counters for `year`
    pub fn zeroed(year: Year) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    /// Count one classified record
    pub fn record(&mut self, category: Category) {
        self.total += 1;
        match category {
            Category::EcoOnly => self.eco_only += 1,
            Category::SecOnly => self.sec_only += 1,
            Category::Mixed => self.mixed += 1,
            Category::None => self.none += 1,
        }
    }

    /// Bucket year
    pub fn year(&self) -> Year {
        self.year
    }

    /// Records in this bucket
    pub fn total(&self) -> usize {
        self.total
    }

    /// Records hitting only the ecology cluster
    pub fn eco_only(&self) -> usize {
        self.eco_only
    }

    /// Records hitting only the security cluster
    pub fn sec_only(&self) -> usize {
        self.sec_only
    }

    /// Records hitting both clusters
    pub fn mixed(&self) -> usize {
        self.mixed
    }

    /// Records hitting neither cluster
    pub fn none(&self) -> usize {
        self.none
    }

    /// Records hitting the ecology cluster at all
    pub fn eco_total(&self) -> usize {
        self.eco_only + self.mixed
    }

    /// Records hitting the security cluster at all
    pub fn sec_total(&self) -> usize {
        self.sec_only + self.mixed
    }

    /// Security total over ecology total; `None` when nothing hit ecology
    pub fn ratio(&self) -> Option<f64> {
        match self.eco_total() {
            0 => None,
            eco => Some(self.sec_total() as f64 / eco as f64),
        }
    }

    /// Fold another bucket's counts into this one (year is kept)
    pub fn absorb(&mut self, other: &YearAggregate) {
        self.total += other.total;
        self.eco_only += other.eco_only;
        self.sec_only += other.sec_only;
        self.mixed += other.mixed;
        self.none += other.none;
    }
}

/// Ratio indicator for one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioRow {
    /// Bucket year
    pub year: Year,

    /// `sec_total / eco_total`, missing when `eco_total` is zero
    pub ratio: Option<f64>,

    /// Records hitting the security cluster
    pub sec_total: usize,

    /// Records hitting the ecology cluster
    pub eco_total: usize,
}

impl From<&YearAggregate> for RatioRow {
    fn from(agg: &YearAggregate) -> Self {
        Self {
            year: agg.year(),
            ratio: agg.ratio(),
            sec_total: agg.sec_total(),
            eco_total: agg.eco_total(),
        }
    }
}

/// Year buckets, created zeroed on first access
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearTable {
    buckets: BTreeMap<Year, YearAggregate>,
}

impl YearTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The bucket for `year`, created zeroed if absent
    pub fn bucket_mut(&mut self, year: Year) -> &mut YearAggregate {
        self.buckets
            .entry(year)
            .or_insert_with(|| YearAggregate::zeroed(year))
    }

    /// Count one classified record in its year bucket
    pub fn record(&mut self, year: Year, category: Category) {
        self.bucket_mut(year).record(category);
    }

    /// Look up a bucket without creating it
    pub fn get(&self, year: Year) -> Option<&YearAggregate> {
        self.buckets.get(&year)
    }

    /// Buckets in ascending year order, `unknown` last
    pub fn rows(&self) -> impl Iterator<Item = &YearAggregate> {
        self.buckets.values()
    }

    /// Ratio rows in ascending year order
    pub fn ratios(&self) -> Vec<RatioRow> {
        self.rows().map(RatioRow::from).collect()
    }

    /// Counts summed over all years (year is `Unknown`)
    pub fn totals(&self) -> YearAggregate {
        let mut sum = YearAggregate::zeroed(Year::Unknown);
        for row in self.rows() {
            sum.absorb(row);
        }
        sum
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no record was counted
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn category() -> impl Strategy<Value = Category> {
        prop_oneof![
            Just(Category::EcoOnly),
            Just(Category::SecOnly),
            Just(Category::Mixed),
            Just(Category::None),
        ]
    }

    proptest! {
        /// Property: every bucket's total equals the sum of its categories
        #[test]
        fn test_total_is_sum_of_categories(
            records in proptest::collection::vec((prop::option::of(1990i32..2030), category()), 0..200)
        ) {
            let mut table = YearTable::new();
            for (year, cat) in &records {
                table.record(Year::from_option(*year), *cat);
            }

            let mut counted = 0;
            for row in table.rows() {
                prop_assert_eq!(row.total(), row.eco_only() + row.sec_only() + row.mixed() + row.none());
                counted += row.total();
            }
            prop_assert_eq!(counted, records.len());
        }

        /// Property: the ratio is finite whenever present
        #[test]
        fn test_ratio_is_finite(cats in proptest::collection::vec(category(), 0..50)) {
            let mut agg = YearAggregate::zeroed(Year::Known(2000));
            for cat in cats {
                agg.record(cat);
            }
            if let Some(ratio) = agg.ratio() {
                prop_assert!(ratio.is_finite());
            } else {
                prop_assert_eq!(agg.eco_total(), 0);
            }
        }
    }
}
