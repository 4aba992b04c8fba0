/*!
The clause database --- original and learnt clauses, stored in an [arena](crate::db::arena).

Original clauses are added from some external source, and together form the formula whose satisfiability is in question.
Learnt clauses are added by [conflict analysis](crate::procedures::analysis), each a consequence of the original clauses, and may be [removed](crate::procedures::maintenance) at any point.

Learnt clauses carry an activity, bumped when used in analysis and decayed after each conflict, mirroring the activity of atoms.

The database owns garbage collection: when the cells wasted on removed clauses pass a configured fraction of the allocated cells, the arena is [compacted](ClauseDB::collect_garbage) and every held reference --- watch lists, reasons, the clause lists themselves --- is rewritten.
*/

use crate::db::arena::{ClauseArena, ClauseRef, StoredClause};
use crate::db::atom::AtomDB;
use crate::db::watches::{Watcher, Watches};
use crate::misc::log::targets;
use crate::structures::literal::CLiteral;
use crate::types::err::{self};

/// The amount clause activity is scaled by, on the activity of some clause passing [MAX_CLAUSE_ACTIVITY].
const CLAUSE_RESCALE_FACTOR: f64 = 1e-20;

/// The maximum activity of a clause before activities are rescaled.
const MAX_CLAUSE_ACTIVITY: f64 = 1e20;

/// A database of clauses, split into original and learnt collections.
pub struct ClauseDB {
    /// The backing arena.
    pub arena: ClauseArena,

    /// References to the original clauses.
    pub originals: Vec<ClauseRef>,

    /// References to the learnt clauses.
    pub learnts: Vec<ClauseRef>,

    /// The amount to bump the activity of a clause by.
    activity_inc: f64,
}

impl ClauseDB {
    /// Stores a clause of at least two literals, attaching watches to its first two literals.
    pub fn store(
        &mut self,
        literals: Vec<CLiteral>,
        learnt: bool,
        watches: &mut Watches,
    ) -> Result<ClauseRef, err::ClauseDBError> {
        debug_assert!(literals.len() >= 2);

        let reference = self.arena.store(literals, learnt)?;
        match learnt {
            true => self.learnts.push(reference),
            false => self.originals.push(reference),
        }

        self.attach(reference, watches);
        log::trace!(target: targets::CLAUSE_DB, "Stored {}: {}", reference, self.arena.clause(reference));

        Ok(reference)
    }

    /// The clause at `reference`.
    pub fn clause(&self, reference: ClauseRef) -> &StoredClause {
        self.arena.clause(reference)
    }

    /// The clause at `reference`, mutably.
    pub fn clause_mut(&mut self, reference: ClauseRef) -> &mut StoredClause {
        self.arena.clause_mut(reference)
    }

    /// Lists the clause at `reference` against the negations of its first two literals.
    fn attach(&self, reference: ClauseRef, watches: &mut Watches) {
        let clause = self.arena.clause(reference);
        let [first, second] = [clause.literals[0], clause.literals[1]];
        watches.watch(
            first,
            Watcher {
                clause: reference,
                blocker: second,
            },
        );
        watches.watch(
            second,
            Watcher {
                clause: reference,
                blocker: first,
            },
        );
    }

    /// Delists the clause at `reference` from the lists of its watched literals.
    fn detach(&self, reference: ClauseRef, watches: &mut Watches) {
        let clause = self.arena.clause(reference);
        watches.unwatch(clause.literals[0], reference);
        watches.unwatch(clause.literals[1], reference);
    }

    /// True if the clause at `reference` is the reason for the value of its first literal.
    ///
    /// A locked clause is never removed, as the trail would lose the derivation of the literal.
    pub fn locked(&self, reference: ClauseRef, atom_db: &AtomDB) -> bool {
        let first = self.arena.clause(reference).literals[0];
        atom_db.value_of_literal(first) == Some(true)
            && atom_db.reason_of(first.atom()) == Some(reference)
    }

    /// Removes the clause at `reference` from the database, watch lists included.
    ///
    /// A locked clause loses its lock, with the reason of the derived literal cleared.
    /// The reference is stale after removal, though is not scrubbed from the clause lists --- the caller maintains those.
    pub fn remove_clause(&mut self, reference: ClauseRef, watches: &mut Watches, atom_db: &mut AtomDB) {
        self.detach(reference, watches);

        let first = self.arena.clause(reference).literals[0];
        if atom_db.reason_of(first.atom()) == Some(reference) {
            atom_db.clear_reason(first.atom());
        }

        log::trace!(target: targets::CLAUSE_DB, "Removed {}", reference);
        self.arena.remove(reference);
    }

    /// Bumps the activity of the clause at `reference`, rescaling every learnt activity if required.
    pub fn bump_activity(&mut self, reference: ClauseRef) {
        let bumped = self.arena.clause(reference).activity + self.activity_inc;
        if bumped > MAX_CLAUSE_ACTIVITY {
            for learnt in self.learnts.clone() {
                let clause = self.arena.clause_mut(learnt);
                clause.activity *= CLAUSE_RESCALE_FACTOR;
            }
            self.activity_inc *= CLAUSE_RESCALE_FACTOR;
            let clause = self.arena.clause_mut(reference);
            clause.activity += self.activity_inc;
        } else {
            self.arena.clause_mut(reference).activity = bumped;
        }
    }

    /// Scales the activity bump, so in effect every clause activity decays relative to later bumps.
    pub fn decay_activity(&mut self, clause_decay: f64) {
        self.activity_inc *= 1.0 / clause_decay;
    }

    /// The current activity bump, e.g. for an activity threshold during reduction.
    pub fn activity_inc(&self) -> f64 {
        self.activity_inc
    }

    /// True if enough cells are wasted, relative to those allocated, to justify compaction.
    pub fn garbage_due(&self, garbage_fraction: f64) -> bool {
        (self.arena.wasted() as f64) > (self.arena.allocated() as f64) * garbage_fraction
    }

    /// Compacts the arena and rewrites every held reference: clause lists, watch lists, and reasons.
    pub fn collect_garbage(&mut self, watches: &mut Watches, atom_db: &mut AtomDB) {
        let forwards = self.arena.compact();

        let forward = |reference: &mut ClauseRef| match forwards[reference.index()] {
            Some(fresh) => *reference = fresh,
            None => panic!("Live reference {reference} lost to compaction"),
        };

        for reference in self.originals.iter_mut().chain(self.learnts.iter_mut()) {
            forward(reference);
        }

        for list in watches.lists_mut() {
            for watcher in list.iter_mut() {
                forward(&mut watcher.clause);
            }
        }

        for atom in 0..atom_db.count() as crate::structures::atom::Atom {
            atom_db.forward_reason(atom, &forwards);
        }
    }
}

impl Default for ClauseDB {
    fn default() -> Self {
        ClauseDB {
            arena: ClauseArena::default(),
            originals: Vec::default(),
            learnts: Vec::default(),
            activity_inc: 1.0,
        }
    }
}
