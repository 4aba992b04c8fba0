/*!
Watch lists for the two-watched-literal propagation scheme.

Each attached clause watches two of its literals, and is listed against the *negation* of each watched literal.
So, when a literal becomes true the list held against that literal contains exactly the clauses in which the negation of the literal is watched, and [BCP](crate::procedures::bcp) visits no other clause.

Each [Watcher] carries a blocking literal, some other literal of the clause.
If the blocking literal is already true the clause is satisfied and the clause itself is never touched.
*/

use crate::db::arena::ClauseRef;
use crate::structures::literal::CLiteral;

/// An entry in a watch list: a clause together with a blocking literal from the clause.
#[derive(Clone, Copy, Debug)]
pub struct Watcher {
    /// The watching clause.
    pub clause: ClauseRef,

    /// A literal of the clause other than the falsified watch.
    pub blocker: CLiteral,
}

/// Watch lists, indexed by the [index](CLiteral::index) of the literal whose truth requires a scan.
#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<Watcher>>,
}

impl Watches {
    /// Grows the lists so literals over atoms up to (excluding) `atom_count` may be used.
    pub fn expand_to(&mut self, atom_count: usize) {
        while self.lists.len() < atom_count * 2 {
            self.lists.push(Vec::default());
        }
    }

    /// Lists the clause against the negation of `watched`, so a scan occurs when `watched` is falsified.
    pub fn watch(&mut self, watched: CLiteral, watcher: Watcher) {
        self.lists[watched.negate().index()].push(watcher);
    }

    /// Delists the clause from the list of `watched`.
    ///
    /// Traversal order of the list is not preserved.
    pub fn unwatch(&mut self, watched: CLiteral, clause: ClauseRef) {
        let list = &mut self.lists[watched.negate().index()];
        let mut index = 0;
        let mut limit = list.len();

        while index < limit {
            if list[index].clause == clause {
                list.swap_remove(index);
                limit -= 1;
            } else {
                index += 1;
            }
        }
    }

    /// Takes the watchers to scan on `made_true` becoming true: the clauses in which its negation is watched.
    ///
    /// The list is left empty, to be rebuilt by the scan.
    pub fn take_watchers(&mut self, made_true: CLiteral) -> Vec<Watcher> {
        std::mem::take(&mut self.lists[made_true.index()])
    }

    /// Returns watchers taken by [take_watchers](Watches::take_watchers), keeping any watchers listed in the meanwhile.
    pub fn restore_watchers(&mut self, made_true: CLiteral, mut watchers: Vec<Watcher>) {
        let list = &mut self.lists[made_true.index()];
        watchers.append(list);
        *list = watchers;
    }

    /// An iterator over every list, mutably, for reference rewriting after compaction.
    pub fn lists_mut(&mut self) -> impl Iterator<Item = &mut Vec<Watcher>> {
        self.lists.iter_mut()
    }
}
