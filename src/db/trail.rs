/*!
The trail --- every current assignment, in the order made, partitioned into decision levels.

Level zero holds consequences of the formula itself.
Each later level opens with a decision (or an assumption) and continues with the consequences of [BCP](crate::procedures::bcp).

The trail doubles as the propagation queue: [q_head](Trail::q_head) splits assignments whose consequences have been exhausted from those still to be examined.
*/

use crate::db::LevelIndex;
use crate::structures::literal::CLiteral;

/// Assignments in the order made, with decision level bookkeeping.
#[derive(Default)]
pub struct Trail {
    /// Every current assignment, in the order made.
    pub literals: Vec<CLiteral>,

    /// The trail index at which each level above zero begins.
    level_starts: Vec<usize>,

    /// The index of the first assignment whose consequences may not have been queued.
    pub q_head: usize,
}

impl Trail {
    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_starts.len() as LevelIndex
    }

    /// The count of assignments on the trail.
    pub fn assignment_count(&self) -> usize {
        self.literals.len()
    }

    /// Opens a fresh decision level at the current end of the trail.
    pub fn push_level(&mut self) {
        self.level_starts.push(self.literals.len());
    }

    /// The trail index at which `level` begins.
    pub fn level_start(&self, level: LevelIndex) -> usize {
        match level {
            0 => 0,
            _ => self.level_starts[level as usize - 1],
        }
    }

    /// Records an assignment at the current level.
    pub fn push(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// The next assignment whose consequences are to be examined, if any, advancing [q_head](Trail::q_head).
    pub fn take_next(&mut self) -> Option<CLiteral> {
        let literal = self.literals.get(self.q_head).copied()?;
        self.q_head += 1;
        Some(literal)
    }

    /// Removes and returns every assignment at levels above `level`, in order of assignment, and closes those levels.
    ///
    /// [q_head](Trail::q_head) is reset to the end of the shortened trail.
    pub fn clear_above(&mut self, level: LevelIndex) -> std::vec::Drain<'_, CLiteral> {
        let keep = match self.level_starts.get(level as usize) {
            Some(start) => *start,
            None => self.literals.len(),
        };
        self.level_starts.truncate(level as usize);
        self.q_head = keep;
        self.literals.drain(keep..)
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;

    fn literal(int: i32) -> CLiteral {
        CLiteral::from_dimacs(int)
    }

    #[test]
    fn levels() {
        let mut trail = Trail::default();
        trail.push(literal(1));
        trail.push_level();
        trail.push(literal(2));
        trail.push(literal(3));
        trail.push_level();
        trail.push(literal(4));

        assert_eq!(trail.level(), 2);
        assert_eq!(trail.level_start(0), 0);
        assert_eq!(trail.level_start(1), 1);
        assert_eq!(trail.level_start(2), 3);
    }

    #[test]
    fn clearing() {
        let mut trail = Trail::default();
        trail.push(literal(1));
        trail.push_level();
        trail.push(literal(2));
        trail.push(literal(3));

        let cleared: Vec<_> = trail.clear_above(0).collect();
        assert_eq!(cleared, vec![literal(2), literal(3)]);
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.assignment_count(), 1);
        assert_eq!(trail.q_head, 1);
    }

    #[test]
    fn queue() {
        let mut trail = Trail::default();
        trail.push(literal(1));
        trail.push(literal(2));

        assert_eq!(trail.take_next(), Some(literal(1)));
        assert_eq!(trail.take_next(), Some(literal(2)));
        assert_eq!(trail.take_next(), None);
    }
}
