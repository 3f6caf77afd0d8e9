//! Cumulative comparison of actual versus expected goals when shots are
//! replayed from the least to the most promising chance.

use crate::domain::Shot;

/// Three aligned sequences of length `shots + 1`. Index 0 is a synthetic zero
/// point; index `i > 0` covers the first `i` shots of the ascending-xG order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CumulativeCurve {
    pub expected: Vec<f64>,
    pub actual: Vec<f64>,
    pub overperformance: Vec<f64>,
}
impl CumulativeCurve {
    /// Sorts ascending by xG and accumulates the expected and actual goal
    /// counts in one pass. The sort is stable: shots with equal xG keep their
    /// input order, making the curve deterministic for a given view.
    pub fn build<'a>(shots: impl IntoIterator<Item = &'a Shot>) -> Self {
        let mut sorted: Vec<&Shot> = shots.into_iter().collect();
        sorted.sort_by(|a, b| a.xg.total_cmp(&b.xg));

        let mut expected = Vec::with_capacity(sorted.len() + 1);
        let mut actual = Vec::with_capacity(sorted.len() + 1);
        let mut overperformance = Vec::with_capacity(sorted.len() + 1);
        expected.push(0.0);
        actual.push(0.0);
        overperformance.push(0.0);

        let (mut running_expected, mut running_actual) = (0.0, 0.0);
        for shot in sorted {
            running_expected += shot.xg;
            if shot.outcome.is_goal() {
                running_actual += 1.0;
            }
            expected.push(running_expected);
            actual.push(running_actual);
            overperformance.push(running_actual - running_expected);
        }
        Self {
            expected,
            actual,
            overperformance,
        }
    }

    /// Number of points on the curve; at least 1 (the zero point).
    pub fn len(&self) -> usize {
        self.overperformance.len()
    }

    /// `true` only for the degenerate zero-point-only curve.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }

    /// The highest positive overperformance and the first index attaining it.
    /// `None` when the curve never rises above expectation.
    pub fn peak(&self) -> Option<Peak> {
        let mut peak: Option<Peak> = None;
        for (index, &value) in self.overperformance.iter().enumerate() {
            if value > 0.0 && peak.map_or(true, |peak| value > peak.value) {
                peak = Some(Peak { index, value });
            }
        }
        peak
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    pub index: usize,
    pub value: f64,
}
