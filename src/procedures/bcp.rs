/*!
Context methods for boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview

Propagation closes the valuation under the consequences of clauses with a single literal left unvalued.
Each assignment on the [trail](crate::db::trail) whose consequences have not been examined is taken in turn, and the clauses in which the negation of the assignment is watched are scanned.
For each such clause:

- If the blocking literal of the watcher is true the clause is satisfied, and nothing is done.
- If some non-false literal other than the remaining watch exists, the clause watches that literal instead, and the scanned list drops the clause.
- Otherwise, the clause is unit or conflicting on the remaining watch, and the watcher stays put.

# Complications

The scanned watch list is taken from the watch database for the duration of the scan.
This permits a mutable borrow of a clause while values are read and fresh watches are listed, as a fresh watch never lands in the scanned list --- the fresh watched literal is non-false while the scanned literal is true.

On a conflict the unexamined suffix of the list is preserved, the propagation queue is drained, and the conflicting clause is returned for [analysis](crate::procedures::analysis).
*/

use crate::{
    context::GenericContext,
    db::{watches::Watcher, ClauseRef},
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Records `literal` on the trail and valuation, with the clause which forced it, if any.
    ///
    /// The atom of the literal must not have a value.
    pub(crate) fn assign(&mut self, literal: CLiteral, reason: Option<ClauseRef>) {
        debug_assert!(self.atom_db.value_of(literal.atom()).is_none());
        self.atom_db.set_value(literal, self.trail.level(), reason);
        self.trail.push(literal);
    }

    /// Propagates queued assignments until the queue is exhausted or some clause conflicts with the valuation.
    ///
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.take_next() {
            self.counters.propagations += 1;
            self.simp_db_props -= 1;

            if let Err(conflict) = self.propagate_literal(literal) {
                log::trace!(target: targets::PROPAGATION, "Conflict on {literal}");
                self.trail.q_head = self.trail.assignment_count();
                return Err(conflict);
            }
        }
        Ok(())
    }

    /// Scans the clauses watching the negation of `literal`, updating watches and queuing consequences.
    fn propagate_literal(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = literal.negate();

        let mut watchers = self.watches.take_watchers(literal);
        let total = watchers.len();
        let mut keep = 0;
        let mut index = 0;
        let mut conflict = Ok(());

        'watchers: while index < total {
            let watcher = watchers[index];

            // The clause is satisfied without being touched if the blocking literal is true.
            if self.atom_db.value_of_literal(watcher.blocker) == Some(true) {
                watchers[keep] = watcher;
                keep += 1;
                index += 1;
                continue 'watchers;
            }

            let clause = self.clause_db.clause_mut(watcher.clause);
            if clause.literals[0] == false_literal {
                clause.literals.swap(0, 1);
            }
            debug_assert_eq!(clause.literals[1], false_literal);
            let first = clause.literals[0];

            if first != watcher.blocker && self.atom_db.value_of_literal(first) == Some(true) {
                watchers[keep] = Watcher {
                    clause: watcher.clause,
                    blocker: first,
                };
                keep += 1;
                index += 1;
                continue 'watchers;
            }

            for offset in 2..clause.size() {
                if self.atom_db.value_of_literal(clause.literals[offset]) != Some(false) {
                    clause.literals.swap(1, offset);
                    let fresh = clause.literals[1];
                    self.watches.watch(
                        fresh,
                        Watcher {
                            clause: watcher.clause,
                            blocker: first,
                        },
                    );
                    index += 1;
                    continue 'watchers;
                }
            }

            // No fresh watch, so the clause is unit or in conflict on its first literal.
            watchers[keep] = Watcher {
                clause: watcher.clause,
                blocker: first,
            };
            keep += 1;
            index += 1;

            match self.atom_db.value_of_literal(first) {
                Some(false) => {
                    // Preserve the unexamined suffix before returning the conflict.
                    while index < total {
                        watchers[keep] = watchers[index];
                        keep += 1;
                        index += 1;
                    }
                    conflict = Err(err::BCPError::Conflict(watcher.clause));
                    break 'watchers;
                }

                None => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {}: {first}", watcher.clause);
                    self.assign(first, Some(watcher.clause));
                }

                Some(true) => {
                    // Unreachable given the blocker and first literal checks above.
                    while index < total {
                        watchers[keep] = watchers[index];
                        keep += 1;
                        index += 1;
                    }
                    conflict = Err(err::BCPError::CorruptWatch);
                    break 'watchers;
                }
            }
        }

        watchers.truncate(keep);
        self.watches.restore_watchers(literal, watchers);

        conflict
    }
}
