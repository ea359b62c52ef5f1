//! Explosions by source country.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use kiloton_core::{Country, TestRecord};

/// One country's share of all explosions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryShare {
    /// Country credited with the tests.
    pub country: Country,
    /// Number of explosions.
    pub count: usize,
    /// Share of the total, 0-100.
    pub share_pct: f64,
}

/// Explosion counts per country, largest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryDistribution {
    /// Total explosions counted.
    pub total: usize,
    /// Per-country shares, by count descending; ties keep first appearance.
    pub shares: Vec<CountryShare>,
}

impl CountryDistribution {
    /// Returns the share for `country`, if it appears.
    #[must_use]
    pub fn get(&self, country: &Country) -> Option<&CountryShare> {
        self.shares.iter().find(|s| &s.country == country)
    }

    /// Returns true if nothing was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Counts explosions per country.
#[allow(clippy::cast_precision_loss)]
pub fn by_country<'a, I>(records: I) -> CountryDistribution
where
    I: IntoIterator<Item = &'a TestRecord>,
{
    let mut index: HashMap<&Country, usize> = HashMap::new();
    let mut counts: Vec<(&Country, usize)> = Vec::new();

    for record in records {
        match index.get(&record.country) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(&record.country, counts.len());
                counts.push((&record.country, 1));
            }
        }
    }

    // Stable: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let shares = counts
        .into_iter()
        .map(|(country, count)| CountryShare {
            country: country.clone(),
            count,
            share_pct: count as f64 / total as f64 * 100.0,
        })
        .collect();

    CountryDistribution { total, shares }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rec(country: &str) -> TestRecord {
        TestRecord::new("t", Country::new(country).unwrap(), 1.0, 1.0)
    }

    #[test]
    fn test_counts_and_order() {
        let records: Vec<_> = ["UK", "USA", "USSR", "USA", "USSR", "USA", "FRANCE"]
            .into_iter()
            .map(rec)
            .collect();

        let dist = by_country(&records);

        let order: Vec<_> = dist.shares.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(order, ["USA", "USSR", "UK", "FRANCE"]);
        assert_eq!(dist.total, 7);
        assert_eq!(dist.shares[0].count, 3);
        assert_relative_eq!(dist.shares[0].share_pct, 300.0 / 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shares_sum_to_100() {
        let records: Vec<_> = ["CHINA", "INDIA", "PAKIST"].into_iter().map(rec).collect();
        let dist = by_country(&records);
        let sum: f64 = dist.shares.iter().map(|s| s.share_pct).sum();
        assert_relative_eq!(sum, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lookup() {
        let records = vec![rec("USA"), rec("UK")];
        let dist = by_country(&records);
        assert_eq!(dist.get(&Country::new("uk").unwrap()).map(|s| s.count), Some(1));
        assert!(dist.get(&Country::new("CHINA").unwrap()).is_none());
    }

    #[test]
    fn test_empty() {
        let dist = by_country(&Vec::<TestRecord>::new());
        assert!(dist.is_empty());
        assert_eq!(dist.total, 0);
    }
}
