//! Explosions per calendar year.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use kiloton_core::{Country, TestRecord};

use crate::filter::CountryFilter;

/// Number of explosions in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    /// Calendar year.
    pub year: i32,
    /// Explosions conducted that year.
    pub count: usize,
}

/// Yearly explosion counts for one country selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Countries covered.
    pub country: CountryFilter,
    /// Years with at least one explosion, ascending.
    pub points: Vec<YearCount>,
}

impl Timeline {
    /// Chart title for this selection.
    #[must_use]
    pub fn title(&self) -> String {
        format!("Nuclear Explosions Over Time ({})", self.country)
    }

    /// One-line description of the chart.
    #[must_use]
    pub fn caption(&self) -> String {
        let by = self.country.country().map_or("all countries", Country::as_str);
        format!("This line graph shows the number of nuclear explosions conducted each year by {by} from 1945 onwards.")
    }

    /// Total explosions across all years.
    #[must_use]
    pub fn total(&self) -> usize {
        self.points.iter().map(|p| p.count).sum()
    }

    /// Year with the most explosions; the earliest wins a tie.
    #[must_use]
    pub fn peak(&self) -> Option<YearCount> {
        self.points
            .iter()
            .copied()
            .reduce(|best, p| if p.count > best.count { p } else { best })
    }

    /// First and last year covered.
    #[must_use]
    pub fn span(&self) -> Option<(i32, i32)> {
        Some((self.points.first()?.year, self.points.last()?.year))
    }

    /// Returns true if no explosions matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Counts explosions per year for the records passing `filter`.
///
/// Undated records are ignored.
pub fn explosions_per_year<'a, I>(records: I, filter: &CountryFilter) -> Timeline
where
    I: IntoIterator<Item = &'a TestRecord>,
{
    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    let mut undated = 0usize;

    for record in records.into_iter().filter(|r| filter.matches(*r)) {
        match record.year() {
            Some(year) => *by_year.entry(year).or_default() += 1,
            None => undated += 1,
        }
    }

    if undated > 0 {
        log::trace!("timeline ({}): ignored {} undated records", filter, undated);
    }

    Timeline {
        country: filter.clone(),
        points: by_year
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
    }
}
