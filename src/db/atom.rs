/*!
The atom database --- per-atom data considered during a solve.

For each atom the database holds:
- A value on the current (partial) valuation, if any.
- The reason and decision level of that value, while set.
- A saved value from the last time the atom lost a value, consulted for [phase saving](crate::config::PhaseSaving).
- A user-suggested value and decision eligibility flag, if set.
- An activity, with atoms kept on an [IndexHeap] so the most active atom without a value is ready for a [decision](crate::procedures::decision).

Atoms may be [retired](AtomDB::retire) and later reused: a retired atom moves to a released list, and [recycling](AtomDB::recycle_released) during level zero simplification moves released atoms to a free list from which [fresh_atom](AtomDB::fresh_atom) draws before extending the database.
*/

use crate::db::arena::ClauseRef;
use crate::db::LevelIndex;
use crate::generic::index_heap::IndexHeap;
use crate::structures::atom::{Atom, ATOM_MAX};
use crate::structures::literal::CLiteral;
use crate::types::err::{self};

/// The amount activity is scaled by, on the activity of some atom passing [MAX_ACTIVITY].
const RESCALE_FACTOR: f64 = 1e-100;

/// The maximum activity of an atom before activities are rescaled.
const MAX_ACTIVITY: f64 = 1e100;

/// Per-atom data, indexed by atom.
pub struct AtomDB {
    /// The value of each atom on the current valuation, if any.
    valuation: Vec<Option<bool>>,

    /// The value each atom last lost, for phase saving.
    previous_value: Vec<bool>,

    /// A user-suggested value for each atom, if any.
    user_value: Vec<Option<bool>>,

    /// Whether each atom may be used for a decision.
    decision_eligible: Vec<bool>,

    /// Whether each atom has been retired.
    retired: Vec<bool>,

    /// The clause which forced the value of each atom, while set.
    reason: Vec<Option<ClauseRef>>,

    /// The decision level at which each atom took its value, while set.
    level: Vec<Option<LevelIndex>>,

    /// Scratch flags for conflict analysis.
    seen: Vec<bool>,

    /// Atom activities, with every eligible unvalued atom active on the heap.
    pub activity: IndexHeap<f64>,

    /// The amount to bump the activity of an atom by.
    activity_inc: f64,

    /// Retired atoms, awaiting recycling.
    released: Vec<Atom>,

    /// Recycled atoms, available for reuse.
    free: Vec<Atom>,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            valuation: Vec::default(),
            previous_value: Vec::default(),
            user_value: Vec::default(),
            decision_eligible: Vec::default(),
            retired: Vec::default(),
            reason: Vec::default(),
            level: Vec::default(),
            seen: Vec::default(),
            activity: IndexHeap::default(),
            activity_inc: 1.0,
            released: Vec::default(),
            free: Vec::default(),
        }
    }
}

impl AtomDB {
    /// A count of atoms in the database, retired atoms included.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// A fresh atom, recycled if possible, with the given initial activity.
    pub fn fresh_atom(&mut self, initial_activity: f64) -> Result<Atom, err::AtomDBError> {
        let atom = match self.free.pop() {
            Some(atom) => {
                self.retired[atom as usize] = false;
                atom
            }
            None => {
                if self.valuation.len() > ATOM_MAX as usize {
                    return Err(err::AtomDBError::AtomsExhausted);
                }
                let atom = self.valuation.len() as Atom;
                self.valuation.push(None);
                self.previous_value.push(false);
                self.user_value.push(None);
                self.decision_eligible.push(true);
                self.retired.push(false);
                self.reason.push(None);
                self.level.push(None);
                self.seen.push(false);
                self.activity.expand_to(atom as usize + 1);
                atom
            }
        };

        self.activity.revalue(atom as usize, initial_activity);
        self.activity.activate(atom as usize);
        self.activity.reposition(atom as usize);

        Ok(atom)
    }

    /// The value of `atom` on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The value of `literal` given the current valuation, if any.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        literal.value_given(self.valuation[literal.atom() as usize])
    }

    /// The current valuation, atom by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// Sets the value of the atom of `literal` to agree with `literal`, recording its level and reason.
    ///
    /// The atom is removed from decision candidacy while valued.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, reason: Option<ClauseRef>) {
        let atom = literal.atom() as usize;
        self.valuation[atom] = Some(literal.polarity());
        self.level[atom] = Some(level);
        self.reason[atom] = reason;
        self.activity.remove(atom);
    }

    /// Clears the value of `atom`, optionally saving the value for phase saving.
    ///
    /// An eligible atom returns to decision candidacy.
    pub fn drop_value(&mut self, atom: Atom, save_value: bool) {
        let index = atom as usize;
        if save_value {
            if let Some(value) = self.valuation[index] {
                self.previous_value[index] = value;
            }
        }
        self.valuation[index] = None;
        self.level[index] = None;
        self.reason[index] = None;

        if self.decision_eligible[index] && !self.retired[index] {
            self.activity.activate(index);
        }
    }

    /// The value `atom` last lost, defaulting to false.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_value[atom as usize]
    }

    /// Suggests a value for `atom`, taken over any saved value when deciding.
    pub fn set_user_value(&mut self, atom: Atom, value: Option<bool>) {
        self.user_value[atom as usize] = value;
    }

    /// The user-suggested value of `atom`, if any.
    pub fn user_value_of(&self, atom: Atom) -> Option<bool> {
        self.user_value[atom as usize]
    }

    /// Sets whether `atom` may be used for a decision.
    pub fn set_decision_eligible(&mut self, atom: Atom, eligible: bool) {
        let index = atom as usize;
        self.decision_eligible[index] = eligible;
        if eligible && self.valuation[index].is_none() && !self.retired[index] {
            self.activity.activate(index);
        } else if !eligible {
            self.activity.remove(index);
        }
    }

    /// Retires `atom`, removing it from decision candidacy and queuing it for recycling.
    pub fn retire(&mut self, atom: Atom) {
        let index = atom as usize;
        self.retired[index] = true;
        self.activity.remove(index);
        self.released.push(atom);
    }

    /// True if `atom` has been retired and not yet reused.
    pub fn is_retired(&self, atom: Atom) -> bool {
        self.retired[atom as usize]
    }

    /// Moves released atoms to the free list, clearing their values --- saved, suggested, and on the valuation.
    ///
    /// Called during level zero simplification, once no clause or trail entry mentions the atoms, after which the atoms may be handed out again.
    pub fn recycle_released(&mut self) {
        while let Some(atom) = self.released.pop() {
            let index = atom as usize;
            self.valuation[index] = None;
            self.level[index] = None;
            self.reason[index] = None;
            self.previous_value[index] = false;
            self.user_value[index] = None;
            self.decision_eligible[index] = true;
            self.free.push(atom);
        }
    }

    /// The clause which forced the value of `atom`, if any.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseRef> {
        self.reason[atom as usize]
    }

    /// Clears the reason of `atom`, e.g. when the reason clause is removed at level zero.
    pub fn clear_reason(&mut self, atom: Atom) {
        self.reason[atom as usize] = None;
    }

    /// Rewrites the reason of `atom` through a forwarding table after compaction.
    pub fn forward_reason(&mut self, atom: Atom, forwards: &[Option<ClauseRef>]) {
        if let Some(reason) = self.reason[atom as usize] {
            match forwards[reason.index()] {
                Some(fresh) => self.reason[atom as usize] = Some(fresh),
                None => panic!("Reason of atom {atom} lost to compaction"),
            }
        }
    }

    /// The decision level at which `atom` took its value, if any.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.level[atom as usize]
    }

    /// Marks `atom` as seen during analysis.
    pub fn mark_seen(&mut self, atom: Atom) {
        self.seen[atom as usize] = true;
    }

    /// Clears the seen mark of `atom`.
    pub fn clear_seen(&mut self, atom: Atom) {
        self.seen[atom as usize] = false;
    }

    /// True if `atom` has been marked as seen during analysis.
    pub fn is_seen(&self, atom: Atom) -> bool {
        self.seen[atom as usize]
    }

    /// Bumps the activity of `atom`, rescaling every activity if some activity passes [MAX_ACTIVITY].
    pub fn bump_activity(&mut self, atom: Atom) {
        let index = atom as usize;
        let bumped = self.activity.value_of(index) + self.activity_inc;
        if bumped > MAX_ACTIVITY {
            self.activity.apply_to_all(|activity| activity * RESCALE_FACTOR);
            self.activity_inc *= RESCALE_FACTOR;
            self.activity
                .revalue(index, self.activity.value_of(index) + self.activity_inc);
        } else {
            self.activity.revalue(index, bumped);
        }
        self.activity.reposition(index);
    }

    /// Scales the activity bump, so in effect every activity decays relative to later bumps.
    pub fn decay_activity(&mut self, variable_decay: f64) {
        self.activity_inc *= 1.0 / variable_decay;
    }

    /// Rebuilds the decision heap to exactly the eligible unvalued atoms.
    pub fn rebuild_heap(&mut self) {
        let active: Vec<usize> = (0..self.valuation.len())
            .filter(|index| {
                self.valuation[*index].is_none()
                    && self.decision_eligible[*index]
                    && !self.retired[*index]
            })
            .collect();
        self.activity.rebuild(active.into_iter());
    }
}
