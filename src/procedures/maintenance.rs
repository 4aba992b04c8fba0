/*!
Context methods for database maintenance --- reduction, simplification, and garbage collection.

# Reduction

[reduce_db](crate::context::GenericContext::reduce_db) removes roughly half the learnt clauses, those with low activity.
Binary clauses are never removed, nor are locked clauses --- clauses the trail holds as the reason for some value.
Reduction keeps the learnt collection within the cap maintained by the [solve procedure](crate::procedures::solve).

# Simplification

[simplify](crate::context::GenericContext::simplify) applies to a context at decision level zero, removing every clause satisfied by the level zero valuation and trimming literals false at level zero from the remainder.
Atoms [released](crate::context::GenericContext::release_atom) earlier are recycled for reuse, as any clause through a released atom has been removed --- release adds the atom as a unit clause, so every clause containing the atom is either satisfied or has the conflicting literal trimmed.
As the procedure is linear in the database it is skipped unless enough has changed since the last call.

# Garbage collection

Removal marks arena cells as wasted, and [check_garbage](crate::context::GenericContext::check_garbage) compacts the arena when the wasted cells pass a configured fraction of those allocated.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Removes low-activity learnt clauses, keeping binary and locked clauses.
    pub fn reduce_db(&mut self) {
        self.counters.reductions += 1;

        let mut learnts = std::mem::take(&mut self.clause_db.learnts);
        if learnts.is_empty() {
            return;
        }

        // Order for removal: long clauses first, least active first.
        let precedes = |db: &crate::db::clause::ClauseDB,
                        x: crate::db::ClauseRef,
                        y: crate::db::ClauseRef| {
            db.clause(x).size() > 2
                && (db.clause(y).size() == 2 || db.clause(x).activity < db.clause(y).activity)
        };
        learnts.sort_by(|x, y| {
            if precedes(&self.clause_db, *x, *y) {
                std::cmp::Ordering::Less
            } else if precedes(&self.clause_db, *y, *x) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });

        // Clauses with activity below the mean bump are removed regardless of position.
        let extra_limit = self.clause_db.activity_inc() / learnts.len() as f64;
        let midpoint = learnts.len() / 2;

        let mut kept = Vec::with_capacity(learnts.len());
        for (position, reference) in learnts.into_iter().enumerate() {
            let clause = self.clause_db.clause(reference);
            let removable = clause.size() > 2
                && (position < midpoint || clause.activity < extra_limit)
                && !self.clause_db.locked(reference, &self.atom_db);

            if removable {
                self.clause_db
                    .remove_clause(reference, &mut self.watches, &mut self.atom_db);
            } else {
                kept.push(reference);
            }
        }

        log::debug!(target: targets::REDUCTION, "Learnt clauses kept: {}", kept.len());
        self.clause_db.learnts = kept;

        self.check_garbage();
    }

    /// Removes clauses satisfied at level zero from the learnt or original collection, trimming false literals from the rest.
    fn remove_satisfied(&mut self, learnt: bool) {
        debug_assert_eq!(self.trail.level(), 0);

        let list = match learnt {
            true => std::mem::take(&mut self.clause_db.learnts),
            false => std::mem::take(&mut self.clause_db.originals),
        };

        let mut kept = Vec::with_capacity(list.len());
        for reference in list {
            let satisfied = self
                .clause_db
                .clause(reference)
                .literals
                .iter()
                .any(|literal| self.atom_db.value_of_literal(*literal) == Some(true));
            if satisfied {
                self.clause_db
                    .remove_clause(reference, &mut self.watches, &mut self.atom_db);
                continue;
            }

            // Unsatisfied after complete propagation, so the watched literals lack values.
            let clause = self.clause_db.clause_mut(reference);
            debug_assert!(self.atom_db.value_of(clause.literals[0].atom()).is_none());
            debug_assert!(self.atom_db.value_of(clause.literals[1].atom()).is_none());

            let mut trimmed = 0;
            for offset in (2..clause.size()).rev() {
                if self.atom_db.value_of_literal(clause.literals[offset]) == Some(false) {
                    clause.literals.swap_remove(offset);
                    trimmed += 1;
                }
            }
            if trimmed > 0 {
                self.clause_db.arena.note_shrink(trimmed);
            }

            kept.push(reference);
        }

        match learnt {
            true => self.clause_db.learnts = kept,
            false => self.clause_db.originals = kept,
        }
    }

    /// Simplifies the databases against the level zero valuation, if enough has changed to be worthwhile.
    ///
    /// A conflict found while completing propagation makes the context [permanently unsatisfiable](ContextState::Unsatisfiable).
    pub fn simplify(&mut self) -> Result<(), ErrorKind> {
        debug_assert_eq!(self.trail.level(), 0);

        if self.state == ContextState::Unsatisfiable {
            return Err(err::BuildError::FundamentalConflict.into());
        }

        if let Err(err::BCPError::Conflict(_)) = self.bcp() {
            self.state = ContextState::Unsatisfiable;
            return Err(err::BuildError::FundamentalConflict.into());
        }

        if self.trail.assignment_count() as i64 == self.simp_db_assigns || self.simp_db_props > 0 {
            return Ok(());
        }

        log::debug!(target: targets::SIMPLIFY, "Simplifying with {} assignments", self.trail.assignment_count());

        self.remove_satisfied(true);
        self.remove_satisfied(false);
        self.check_garbage();

        // Every clause through a released atom has been removed, so scrub the atoms from the trail.
        let atom_db = &self.atom_db;
        self.trail
            .literals
            .retain(|literal| !atom_db.is_retired(literal.atom()));
        self.trail.q_head = self.trail.assignment_count();

        self.atom_db.recycle_released();
        self.atom_db.rebuild_heap();

        self.simp_db_assigns = self.trail.assignment_count() as i64;
        self.simp_db_props = self.clause_db.arena.allocated() as i64;

        Ok(())
    }

    /// Compacts the clause arena if enough cells are wasted, rewriting every held reference.
    pub fn check_garbage(&mut self) {
        if self.clause_db.garbage_due(self.config.garbage_fraction) {
            self.counters.garbage_collections += 1;
            self.clause_db
                .collect_garbage(&mut self.watches, &mut self.atom_db);
        }
    }
}
