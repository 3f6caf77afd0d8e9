//! Aggregate statistics over a view of shots.
//!
//! Every rate defaults to exactly zero on an empty view; the maximum xG is an
//! explicit [`Option`] rather than a sentinel. All quantities are produced by
//! a single pass in input order, so two invocations over the same view are
//! bit-identical.

use strum::EnumCount;

use crate::domain::{Outcome, Shot};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShotSummary {
    pub shots: usize,
    pub goals: usize,
    pub on_target: usize,
    pub xg_sum: f64,
    pub max_xg: Option<f64>,
    pub outcomes: OutcomeTally,
}
impl ShotSummary {
    pub fn collect<'a>(shots: impl IntoIterator<Item = &'a Shot>) -> Self {
        let mut summary = ShotSummary::default();
        for shot in shots {
            summary.shots += 1;
            if shot.outcome.is_goal() {
                summary.goals += 1;
            }
            if shot.outcome.is_on_target() {
                summary.on_target += 1;
            }
            summary.xg_sum += shot.xg;
            summary.max_xg = Some(match summary.max_xg {
                Some(max) => f64::max(max, shot.xg),
                None => shot.xg,
            });
            summary.outcomes.increment(shot.outcome);
        }
        summary
    }

    /// Goals per shot, in [0, 1].
    pub fn conversion_rate(&self) -> f64 {
        fraction(self.goals as f64, self.shots)
    }

    pub fn on_target_rate(&self) -> f64 {
        fraction(self.on_target as f64, self.shots)
    }

    pub fn avg_xg(&self) -> f64 {
        fraction(self.xg_sum, self.shots)
    }

    /// Goals scored minus goals expected; positive means the model was beaten.
    pub fn xg_delta(&self) -> f64 {
        self.goals as f64 - self.xg_sum
    }

    /// Goals per unit of expected goals; above 1 means outperforming the
    /// model. Zero on an empty view.
    pub fn lethality(&self) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            self.goals as f64 / self.xg_sum
        }
    }

    pub fn outcome_rate(&self, outcome: Outcome) -> f64 {
        fraction(self.outcomes.count(outcome) as f64, self.shots)
    }
}

fn fraction(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

/// Per-outcome shot counts, indexed by the outcome's ordinal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutcomeTally {
    counts: [usize; Outcome::COUNT],
}
impl OutcomeTally {
    pub fn increment(&mut self, outcome: Outcome) {
        self.counts[outcome.ordinal()] += 1;
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.counts[outcome.ordinal()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
