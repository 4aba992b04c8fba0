/*!
A relocatable arena of stored clauses.

Clauses are identified by a [ClauseRef], an index into the arena.
References remain stable as clauses are added and removed, though not across [garbage collection](ClauseArena::compact) --- compaction returns a forwarding table, and every structure holding a reference is rewritten by the [clause database](crate::db::clause) before the old references are discarded.

The arena tracks the cells allocated to live clauses and the cells wasted on removed clauses.
When the wasted fraction passes a [configured threshold](crate::config::Config::garbage_fraction) the database compacts the arena.
*/

use crate::structures::literal::CLiteral;
use crate::types::err::{self};

/// A reference to a clause stored in some [ClauseArena].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseRef(u32);

impl ClauseRef {
    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClauseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A clause stored in an arena, together with data relevant to a solve.
pub struct StoredClause {
    /// The literals of the clause.
    /// The first two literals are the watched literals, so long as the clause is attached.
    pub literals: Vec<CLiteral>,

    /// True if the clause was learnt, false if it is part of the formula.
    pub learnt: bool,

    /// The activity of the clause, for use during [reduction](crate::procedures::maintenance).
    pub activity: f64,
}

impl StoredClause {
    /// The length of the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }
}

impl std::fmt::Display for StoredClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for literal in &self.literals {
            write!(f, "{literal} ")?;
        }
        write!(f, "0")
    }
}

/// A slot of an arena.
enum Slot {
    /// A stored clause.
    Stored(StoredClause),

    /// No clause, the slot previously held a clause or its clause moved during compaction.
    Vacant,
}

/// An arena of slots for clauses, with cell accounting to guide garbage collection.
#[derive(Default)]
pub struct ClauseArena {
    slots: Vec<Slot>,

    /// Cells allocated to live clauses.
    allocated: usize,

    /// Cells held by removed clauses.
    wasted: usize,
}

/// The cells a clause occupies: a header, its literals, and an activity cell if learnt.
fn cells(size: usize, learnt: bool) -> usize {
    1 + size + learnt as usize
}

impl ClauseArena {
    /// Stores a clause and returns a reference to it.
    pub fn store(
        &mut self,
        literals: Vec<CLiteral>,
        learnt: bool,
    ) -> Result<ClauseRef, err::ClauseDBError> {
        if self.slots.len() >= u32::MAX as usize {
            return Err(err::ClauseDBError::StorageExhausted);
        }

        self.allocated += cells(literals.len(), learnt);
        let reference = ClauseRef(self.slots.len() as u32);
        self.slots.push(Slot::Stored(StoredClause {
            literals,
            learnt,
            activity: 0.0,
        }));

        Ok(reference)
    }

    /// The clause at `reference`.
    ///
    /// # Panics
    /// If the reference is stale, from before a compaction or to a removed clause.
    pub fn clause(&self, reference: ClauseRef) -> &StoredClause {
        match &self.slots[reference.index()] {
            Slot::Stored(clause) => clause,
            Slot::Vacant => panic!("Vacant slot at {reference}"),
        }
    }

    /// The clause at `reference`, mutably.
    ///
    /// # Panics
    /// As [clause](ClauseArena::clause).
    pub fn clause_mut(&mut self, reference: ClauseRef) -> &mut StoredClause {
        match &mut self.slots[reference.index()] {
            Slot::Stored(clause) => clause,
            Slot::Vacant => panic!("Vacant slot at {reference}"),
        }
    }

    /// Removes the clause at `reference`, marking its cells as wasted.
    pub fn remove(&mut self, reference: ClauseRef) {
        let slot = std::mem::replace(&mut self.slots[reference.index()], Slot::Vacant);
        match slot {
            Slot::Stored(clause) => {
                let count = cells(clause.size(), clause.learnt);
                self.allocated -= count;
                self.wasted += count;
            }
            Slot::Vacant => panic!("Removal of a vacant slot at {reference}"),
        }
    }

    /// Notes `count` cells lost to shrinking a clause in place, e.g. by trimming false literals.
    pub fn note_shrink(&mut self, count: usize) {
        self.allocated -= count;
        self.wasted += count;
    }

    /// Cells held by removed clauses.
    pub fn wasted(&self) -> usize {
        self.wasted
    }

    /// Cells allocated to live clauses.
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Compacts the arena, dropping every vacant slot.
    ///
    /// Returns a forwarding table from old slot indices to fresh references.
    /// Every held [ClauseRef] must be rewritten through the table before use.
    pub fn compact(&mut self) -> Vec<Option<ClauseRef>> {
        let mut forwards = vec![None; self.slots.len()];
        let mut fresh = Vec::with_capacity(self.slots.len());

        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Slot::Stored(_) = slot {
                forwards[index] = Some(ClauseRef(fresh.len() as u32));
                fresh.push(std::mem::replace(slot, Slot::Vacant));
            }
        }

        log::debug!(target: crate::misc::log::targets::GARBAGE,
            "Compacted, recovered {} wasted cells", self.wasted);

        self.slots = fresh;
        self.wasted = 0;

        forwards
    }
}

#[cfg(test)]
mod arena_tests {
    use super::*;

    fn literals(ints: &[i32]) -> Vec<CLiteral> {
        ints.iter().map(|i| CLiteral::from_dimacs(*i)).collect()
    }

    #[test]
    fn accounting() {
        let mut arena = ClauseArena::default();

        let a = arena.store(literals(&[1, 2]), false).unwrap();
        let _b = arena.store(literals(&[1, 2, 3]), true).unwrap();
        assert_eq!(arena.allocated(), 3 + 5);
        assert_eq!(arena.wasted(), 0);

        arena.remove(a);
        assert_eq!(arena.allocated(), 5);
        assert_eq!(arena.wasted(), 3);
    }

    #[test]
    fn compaction_forwards() {
        let mut arena = ClauseArena::default();

        let a = arena.store(literals(&[1, 2]), false).unwrap();
        let b = arena.store(literals(&[2, 3]), false).unwrap();
        let c = arena.store(literals(&[3, 4]), false).unwrap();
        arena.remove(b);

        let forwards = arena.compact();
        assert_eq!(arena.wasted(), 0);

        let fresh_a = forwards[0].unwrap();
        let fresh_c = forwards[2].unwrap();
        assert!(forwards[1].is_none());

        assert_eq!(arena.clause(fresh_a).literals, literals(&[1, 2]));
        assert_eq!(arena.clause(fresh_c).literals, literals(&[3, 4]));
        let _ = (a, c);
    }
}
