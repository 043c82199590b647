//! Chartable metrics.

use std::fmt;
use std::str::FromStr;
use crate::error::ChartError;

/// A per-country counter that can be charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    #[default]
    Cases,
    Deaths,
    Recovered,
    Active,
    Critical,
    Tests,
}

impl Metric {
    /// Get all metrics in selector order.
    pub fn all() -> &'static [Metric] {
        &[
            Metric::Cases,
            Metric::Deaths,
            Metric::Recovered,
            Metric::Active,
            Metric::Critical,
            Metric::Tests,
        ]
    }

    /// Field name in the source records.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Cases => "cases",
            Metric::Deaths => "deaths",
            Metric::Recovered => "recovered",
            Metric::Active => "active",
            Metric::Critical => "critical",
            Metric::Tests => "tests",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Cases => "Total Cases",
            Metric::Deaths => "Total Deaths",
            Metric::Recovered => "Total Recovered",
            Metric::Active => "Active Cases",
            Metric::Critical => "Critical Cases",
            Metric::Tests => "Total Tests",
        }
    }

    /// Position in `all()`.
    pub fn index(&self) -> usize {
        Metric::all()
            .iter()
            .position(|m| m == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Metric> {
        Metric::all().get(index).copied()
    }

    /// Next metric, wrapping around.
    pub fn next(&self) -> Metric {
        let all = Metric::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous metric, wrapping around.
    pub fn prev(&self) -> Metric {
        let all = Metric::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::all()
            .iter()
            .copied()
            .find(|m| m.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChartError::UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric() {
        assert_eq!("deaths".parse::<Metric>().unwrap(), Metric::Deaths);
        assert_eq!("TESTS".parse::<Metric>().unwrap(), Metric::Tests);
        assert_eq!(
            "vaccinated".parse::<Metric>().unwrap_err(),
            ChartError::UnknownMetric("vaccinated".to_string())
        );
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Metric::Cases.next(), Metric::Deaths);
        assert_eq!(Metric::Tests.next(), Metric::Cases);
        assert_eq!(Metric::Cases.prev(), Metric::Tests);
        assert_eq!(Metric::from_index(4), Some(Metric::Critical));
        assert_eq!(Metric::from_index(6), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Metric::Active.label(), "Active Cases");
        assert_eq!(Metric::Recovered.to_string(), "recovered");
    }
}
