//! Period Statistics
//!
//! The frozen, normalized record of one simulated period. A run produces one
//! `PeriodStatistics` per period, in order; this is everything plotting and
//! persistence layers need from the engine.

use serde::{Deserialize, Serialize};

use crate::{ExchangeType, Good};

/// Share of a period's completed exchanges that involved a given pair of goods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeShare {
    pub exchange: ExchangeType,
    pub frequency: f64,
}

/// Statistics for a single period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStatistics {
    /// Zero-based period index
    pub period: u64,
    /// Exchange-type frequencies, one entry per unordered pair of goods
    pub exchanges: Vec<ExchangeShare>,
    /// Fraction of agents that consumed this period
    pub consumption: f64,
    /// Number of completed exchanges between agents holding different goods
    pub n_exchanges: u64,
    /// Per good: accepted-as-medium count over proposed-as-medium count
    pub good_accepted_as_medium: Vec<f64>,
    /// Rows: consumption good (agent type). Columns: good held.
    pub proportions: Vec<Vec<f64>>,
}

impl PeriodStatistics {
    pub fn n_goods(&self) -> usize {
        self.good_accepted_as_medium.len()
    }

    /// Frequency of exchanges between `a` and `b`, in either direction.
    pub fn exchange_frequency(&self, a: Good, b: Good) -> Option<f64> {
        let wanted = ExchangeType::new(a, b)?;
        self.exchanges
            .iter()
            .find(|share| share.exchange == wanted)
            .map(|share| share.frequency)
    }

    /// Sum of all exchange-type frequencies: 1 when any exchange happened, else 0.
    pub fn exchange_total(&self) -> f64 {
        self.exchanges.iter().map(|share| share.frequency).sum()
    }

    pub fn medium_acceptance(&self, good: Good) -> Option<f64> {
        self.good_accepted_as_medium.get(good.index()).copied()
    }

    /// Fraction of agents consuming `consumer` that hold `held`.
    pub fn proportion(&self, consumer: Good, held: Good) -> Option<f64> {
        self.proportions
            .get(consumer.index())
            .and_then(|row| row.get(held.index()))
            .copied()
    }

    /// The good most accepted as a medium of exchange this period, if any was.
    pub fn leading_medium(&self) -> Option<Good> {
        self.good_accepted_as_medium
            .iter()
            .enumerate()
            .filter(|(_, rate)| **rate > 0.0)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(index, _)| Good(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PeriodStatistics {
        let types = ExchangeType::all(3);
        PeriodStatistics {
            period: 4,
            exchanges: vec![
                ExchangeShare { exchange: types[0], frequency: 0.5 },
                ExchangeShare { exchange: types[1], frequency: 0.25 },
                ExchangeShare { exchange: types[2], frequency: 0.25 },
            ],
            consumption: 0.4,
            n_exchanges: 4,
            good_accepted_as_medium: vec![0.0, 0.75, 0.5],
            proportions: vec![
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.5, 0.5],
                vec![1.0, 0.0, 0.0],
            ],
        }
    }

    #[test]
    fn test_exchange_lookup_is_unordered() {
        let stats = sample();
        assert_eq!(stats.exchange_frequency(Good(1), Good(0)), Some(0.5));
        assert_eq!(stats.exchange_frequency(Good(2), Good(1)), Some(0.25));
        assert_eq!(stats.exchange_frequency(Good(2), Good(2)), None);
        assert_eq!(stats.exchange_total(), 1.0);
    }

    #[test]
    fn test_accessors() {
        let stats = sample();
        assert_eq!(stats.n_goods(), 3);
        assert_eq!(stats.medium_acceptance(Good(1)), Some(0.75));
        assert_eq!(stats.medium_acceptance(Good(5)), None);
        assert_eq!(stats.proportion(Good(1), Good(2)), Some(0.5));
        assert_eq!(stats.leading_medium(), Some(Good(1)));
    }

    #[test]
    fn test_no_leading_medium_without_acceptances() {
        let mut stats = sample();
        stats.good_accepted_as_medium = vec![0.0; 3];
        assert_eq!(stats.leading_medium(), None);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        for field in ["exchanges", "consumption", "n_exchanges", "good_accepted_as_medium", "proportions"] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        let back: PeriodStatistics = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
