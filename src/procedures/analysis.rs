/*!
Context methods for conflict analysis --- the derivation of a learnt clause from a conflict.

# Overview

Analysis walks the trail backwards from a conflicting clause, resolving each clause met with the reason of some literal of the clause, until a single literal from the current decision level remains.
That literal is the first unique implication point, and the derived clause:

- Is a consequence of the formula, being derived by resolution from clauses of the database.
- Is asserting after a backjump, with every literal false other than the negation of the implication point.

The derived clause may then be [minimised](crate::config::Minimization):

- Basic minimisation removes any literal whose reason is made entirely of other literals of the clause.
- Deep minimisation removes any literal whose reasons, followed to any depth, bottom out in other literals of the clause, with a bitmask over decision levels to cut hopeless searches short.

The second literal of the returned clause is from the highest decision level below the current, and that level is returned as the level to backjump to --- after the backjump the clause is unit on its first literal.

Activity of met atoms and learnt clauses is bumped along the way.
*/

use crate::{
    config::Minimization,
    context::GenericContext,
    db::{ClauseRef, LevelIndex},
    misc::log::targets::{self},
    structures::{atom::Atom, clause::CClause, literal::CLiteral},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Derives a learnt clause from `conflict`, returning the clause and the level to backjump to.
    ///
    /// The first literal of the clause asserts after the backjump.
    /// Requires a decision (or assumption) to have been made.
    pub fn conflict_analysis(&mut self, conflict: ClauseRef) -> (CClause, LevelIndex) {
        let current_level = self.trail.level();
        debug_assert!(current_level > 0);

        // The first cell is reserved for the asserting literal.
        let mut learnt: CClause = vec![CLiteral::new(0, false)];
        let mut path_count: usize = 0;
        let mut index = self.trail.assignment_count();
        let mut resolved_on: Option<CLiteral> = None;
        let mut reference = conflict;

        loop {
            if self.clause_db.clause(reference).learnt {
                self.clause_db.bump_activity(reference);
            }

            let clause = self.clause_db.clause(reference);
            // For a reason the first literal is the propagated literal, already accounted for.
            let start = resolved_on.is_some() as usize;

            for offset in start..clause.size() {
                let candidate = clause.literals[offset];
                let atom = candidate.atom();

                if self.atom_db.is_seen(atom) {
                    continue;
                }
                let level = match self.atom_db.level_of(atom) {
                    Some(level) => level,
                    None => continue,
                };
                if level == 0 {
                    continue;
                }

                self.atom_db.bump_activity(atom);
                self.atom_db.mark_seen(atom);

                if level >= current_level {
                    path_count += 1;
                } else {
                    learnt.push(candidate);
                }
            }

            // The most recent seen assignment is the next resolution candidate.
            loop {
                index -= 1;
                if self.atom_db.is_seen(self.trail.literals[index].atom()) {
                    break;
                }
            }
            let pivot = self.trail.literals[index];
            self.atom_db.clear_seen(pivot.atom());
            path_count -= 1;

            if path_count == 0 {
                learnt[0] = pivot.negate();
                break;
            }

            reference = match self.atom_db.reason_of(pivot.atom()) {
                Some(reason) => reason,
                None => panic!("No reason for {pivot} during analysis"),
            };
            resolved_on = Some(pivot);
        }

        log::trace!(target: targets::ANALYSIS, "Learnt, prior to minimisation: {learnt:?}");

        let mut to_clear = learnt.clone();
        self.minimise(&mut learnt, &mut to_clear);

        let backjump_level = match learnt.len() {
            1 => 0,
            _ => {
                // Swap a literal from the highest level below the current to the second cell.
                let mut max_index = 1;
                for candidate_index in 2..learnt.len() {
                    let max_level = self.atom_db.level_of(learnt[max_index].atom());
                    if self.atom_db.level_of(learnt[candidate_index].atom()) > max_level {
                        max_index = candidate_index;
                    }
                }
                learnt.swap(1, max_index);
                self.atom_db.level_of(learnt[1].atom()).unwrap_or(0)
            }
        };

        for cleared in &to_clear {
            self.atom_db.clear_seen(cleared.atom());
        }

        (learnt, backjump_level)
    }

    /// Minimises `learnt` per the configured [Minimization], keeping the asserting literal in place.
    ///
    /// Seen marks added while checking redundancy are recorded in `to_clear`.
    fn minimise(&mut self, learnt: &mut CClause, to_clear: &mut Vec<CLiteral>) {
        match self.config.minimization {
            Minimization::None => {}

            Minimization::Basic => {
                let mut keep = 1;
                'candidates: for candidate_index in 1..learnt.len() {
                    let candidate = learnt[candidate_index];
                    let reason = match self.atom_db.reason_of(candidate.atom()) {
                        None => {
                            learnt[keep] = candidate;
                            keep += 1;
                            continue 'candidates;
                        }
                        Some(reason) => reason,
                    };

                    let clause = self.clause_db.clause(reason);
                    for offset in 1..clause.size() {
                        let atom = clause.literals[offset].atom();
                        if !self.atom_db.is_seen(atom)
                            && self.atom_db.level_of(atom).is_some_and(|level| level > 0)
                        {
                            learnt[keep] = candidate;
                            keep += 1;
                            continue 'candidates;
                        }
                    }
                }
                learnt.truncate(keep);
            }

            Minimization::Deep => {
                let abstract_levels = learnt[1..]
                    .iter()
                    .fold(0_u32, |levels, literal| levels | self.abstract_level(literal.atom()));

                let mut keep = 1;
                for candidate_index in 1..learnt.len() {
                    let candidate = learnt[candidate_index];
                    if self.atom_db.reason_of(candidate.atom()).is_none()
                        || !self.literal_redundant(candidate, abstract_levels, to_clear)
                    {
                        learnt[keep] = candidate;
                        keep += 1;
                    }
                }
                learnt.truncate(keep);
            }
        }
    }

    /// True if every path through the reasons of `literal` bottoms out in seen literals or level zero.
    ///
    /// A redundant literal is implied by the rest of the clause, and may be dropped.
    fn literal_redundant(
        &mut self,
        literal: CLiteral,
        abstract_levels: u32,
        to_clear: &mut Vec<CLiteral>,
    ) -> bool {
        let top = to_clear.len();
        let mut stack = vec![literal];

        while let Some(pivot) = stack.pop() {
            let reference = match self.atom_db.reason_of(pivot.atom()) {
                Some(reason) => reason,
                None => panic!("No reason for {pivot} during redundancy checking"),
            };

            let clause = self.clause_db.clause(reference);
            for offset in 1..clause.size() {
                let antecedent = clause.literals[offset];
                let atom = antecedent.atom();

                if self.atom_db.is_seen(atom) {
                    continue;
                }
                let level = match self.atom_db.level_of(atom) {
                    Some(level) => level,
                    None => continue,
                };
                if level == 0 {
                    continue;
                }

                let expandable = self.atom_db.reason_of(atom).is_some()
                    && (self.abstract_level(atom) & abstract_levels) != 0;
                if expandable {
                    self.atom_db.mark_seen(atom);
                    stack.push(antecedent);
                    to_clear.push(antecedent);
                } else {
                    // Some path escapes the clause, so marks made during this check are unwound.
                    for unwound in to_clear.drain(top..) {
                        self.atom_db.clear_seen(unwound.atom());
                    }
                    return false;
                }
            }
        }

        true
    }

    /// A bitmask standing for the decision level of `atom`, folded over a clause to approximate its levels.
    fn abstract_level(&self, atom: Atom) -> u32 {
        1 << (self.atom_db.level_of(atom).unwrap_or(0) & 31)
    }

    /// Populates the unsatisfiable core from a conflicting assumption.
    ///
    /// `literal` is the negation of the failed assumption.
    /// The core collects the negations of every assumption involved in forcing the conflict, by walking the trail above level zero through seen atoms.
    pub fn analyze_final(&mut self, literal: CLiteral) {
        self.core.clear();
        self.core.push(literal);

        if self.trail.level() == 0 {
            return;
        }

        self.atom_db.mark_seen(literal.atom());

        let above_zero = self.trail.level_start(1);
        for index in (above_zero..self.trail.assignment_count()).rev() {
            let trail_literal = self.trail.literals[index];
            let atom = trail_literal.atom();
            if !self.atom_db.is_seen(atom) {
                continue;
            }

            match self.atom_db.reason_of(atom) {
                None => {
                    // A decision at these levels is an assumption.
                    self.core.push(trail_literal.negate());
                }

                Some(reason) => {
                    let clause = self.clause_db.clause(reason);
                    for offset in 1..clause.size() {
                        let antecedent_atom = clause.literals[offset].atom();
                        if self
                            .atom_db
                            .level_of(antecedent_atom)
                            .is_some_and(|level| level > 0)
                        {
                            self.atom_db.mark_seen(antecedent_atom);
                        }
                    }
                }
            }

            self.atom_db.clear_seen(atom);
        }

        self.atom_db.clear_seen(literal.atom());
    }
}
