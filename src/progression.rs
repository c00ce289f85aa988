use serde::Serialize;

use crate::workout_set::WorkoutSet;

/// The planned sets, lightest warmup first and the working set last.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Progression {
    sets: Vec<WorkoutSet>,
}

impl Progression {
    #[must_use]
    pub fn new(sets: Vec<WorkoutSet>) -> Self {
        Progression { sets }
    }

    #[must_use]
    pub fn sets(&self) -> &[WorkoutSet] {
        &self.sets
    }

    #[must_use]
    pub fn working(&self) -> Option<&WorkoutSet> {
        self.sets.last()
    }

    #[must_use]
    pub fn warmups(&self) -> &[WorkoutSet] {
        match self.sets.split_last() {
            Some((_, warmups)) => warmups,
            None => &[],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutSet> {
        self.sets.iter()
    }
}

impl IntoIterator for Progression {
    type Item = WorkoutSet;
    type IntoIter = std::vec::IntoIter<WorkoutSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}

impl<'a> IntoIterator for &'a Progression {
    type Item = &'a WorkoutSet;
    type IntoIter = std::slice::Iter<'a, WorkoutSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
