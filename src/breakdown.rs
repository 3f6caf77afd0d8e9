//! Per-category attempt/goal roll-ups in a fixed display order.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use crate::domain::{Shot, ShotType, Situation};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryGroup<C> {
    pub category: C,
    pub attempts: usize,
    pub goals: usize,
}
impl<C> CategoryGroup<C> {
    pub fn conversion_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.goals as f64 / self.attempts as f64
        }
    }
}

/// Tallies attempts and goals per category, emitting groups in the given
/// display order. Categories without a single attempt are omitted.
pub fn breakdown<'a, C>(
    shots: impl IntoIterator<Item = &'a Shot>,
    order: impl IntoIterator<Item = C>,
    key: impl Fn(&Shot) -> C,
) -> Vec<CategoryGroup<C>>
where
    C: Copy + Eq + Hash,
{
    let mut tallies: FxHashMap<C, (usize, usize)> = FxHashMap::default();
    for shot in shots {
        let (attempts, goals) = tallies.entry(key(shot)).or_insert((0, 0));
        *attempts += 1;
        if shot.outcome.is_goal() {
            *goals += 1;
        }
    }
    order
        .into_iter()
        .filter_map(|category| {
            tallies
                .get(&category)
                .map(|&(attempts, goals)| CategoryGroup {
                    category,
                    attempts,
                    goals,
                })
        })
        .collect()
}

pub fn by_situation<'a>(
    shots: impl IntoIterator<Item = &'a Shot>,
) -> Vec<CategoryGroup<Situation>> {
    breakdown(shots, Situation::iter(), |shot| shot.situation)
}

pub fn by_shot_type<'a>(
    shots: impl IntoIterator<Item = &'a Shot>,
) -> Vec<CategoryGroup<ShotType>> {
    breakdown(shots, ShotType::iter(), |shot| shot.shot_type)
}
