//! A view is the immutable selection a consumer is currently looking at:
//! an optional player, optional categorical filters and a minimum-xG
//! threshold. Derived statistics are recomputed from scratch whenever the
//! view changes; nothing here mutates shared state.

use crate::domain::{Shot, ShotType, Situation};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShotView {
    pub player: Option<String>,
    pub situations: Option<Vec<Situation>>,
    pub shot_types: Option<Vec<ShotType>>,
    pub min_xg: f64,
}
impl ShotView {
    /// Applies the view to a full shot log, preserving input order. A `None`
    /// filter admits everything; an empty `Some` filter admits nothing.
    pub fn select<'a>(&self, shots: &'a [Shot]) -> Vec<&'a Shot> {
        shots
            .iter()
            .filter(|shot| match &self.player {
                Some(player) => &shot.player == player,
                None => true,
            })
            .filter(|shot| match &self.situations {
                Some(situations) => situations.contains(&shot.situation),
                None => true,
            })
            .filter(|shot| match &self.shot_types {
                Some(shot_types) => shot_types.contains(&shot.shot_type),
                None => true,
            })
            .filter(|shot| shot.xg >= self.min_xg)
            .collect()
    }
}

/// Retains shots with `xg >= threshold`, preserving input order. This is the
/// single filter behind both the initial render and every slider-driven
/// recomputation, so the two paths cannot disagree.
pub fn filter_by_xg<'a>(
    shots: impl IntoIterator<Item = &'a Shot>,
    threshold: f64,
) -> Vec<&'a Shot> {
    shots
        .into_iter()
        .filter(|shot| shot.xg >= threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, Outcome};

    fn shot(player: &str, xg: f64, outcome: Outcome, situation: Situation) -> Shot {
        Shot {
            player: player.into(),
            xg,
            outcome,
            situation,
            shot_type: ShotType::RightFoot,
            location: Location { x: 0.9, y: 0.5 },
        }
    }

    fn sample() -> Vec<Shot> {
        vec![
            shot("Kane", 0.1, Outcome::Missed, Situation::OpenPlay),
            shot("Kane", 0.3, Outcome::Goal, Situation::SetPiece),
            shot("Son", 0.3, Outcome::Saved, Situation::OpenPlay),
            shot("Kane", 0.76, Outcome::Goal, Situation::Penalty),
        ]
    }

    #[test]
    fn threshold_is_inclusive_and_order_preserving() {
        let shots = sample();
        let filtered = filter_by_xg(&shots, 0.3);
        let xgs: Vec<f64> = filtered.iter().map(|shot| shot.xg).collect();
        assert_eq!(vec![0.3, 0.3, 0.76], xgs);
    }

    #[test]
    fn threshold_monotonicity() {
        let shots = sample();
        let loose = filter_by_xg(&shots, 0.2);
        let tight = filter_by_xg(&shots, 0.5);
        assert!(tight.len() <= loose.len());
        // the tighter selection is a subsequence of the looser one
        let mut loose_iter = loose.iter();
        for shot in &tight {
            assert!(loose_iter.any(|candidate| std::ptr::eq(*candidate, *shot)));
        }
    }

    #[test]
    fn out_of_domain_thresholds() {
        let shots = sample();
        assert_eq!(4, filter_by_xg(&shots, -1.0).len());
        assert_eq!(0, filter_by_xg(&shots, 1.5).len());
    }

    #[test]
    fn view_filters_compose() {
        let shots = sample();
        let view = ShotView {
            player: Some("Kane".into()),
            situations: Some(vec![Situation::SetPiece, Situation::Penalty]),
            shot_types: None,
            min_xg: 0.5,
        };
        let selected = view.select(&shots);
        assert_eq!(1, selected.len());
        assert_eq!(0.76, selected[0].xg);
    }

    #[test]
    fn default_view_selects_everything() {
        let shots = sample();
        assert_eq!(4, ShotView::default().select(&shots).len());
    }

    #[test]
    fn empty_categorical_filter_selects_nothing() {
        let shots = sample();
        let view = ShotView {
            situations: Some(vec![]),
            ..ShotView::default()
        };
        assert!(view.select(&shots).is_empty());
    }
}
