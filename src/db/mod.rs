//! Databases for holding information relevant to a solve.
//!
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses backed by a relocatable [arena](crate::db::arena), each identified by a [ClauseRef]. \
//!       From an external perspective there are two important kinds of clause:
//!       * Original clauses \
//!         Original clauses are added to the context from some external source, and together are the CNF formula whose satisfiability may be determined.
//!       * Learnt clauses \
//!         Clauses added to the context by conflict analysis.
//!         Every learnt clause is a consequence of the collection of original clauses.
//!
//!   - [The atom database](crate::db::atom)
//!     + Properties of atoms: value, reason, level, saved and suggested values, and activity.
//!
//!   - [The trail](crate::db::trail)
//!     + Assignments in the order made, partitioned into decision levels, doubling as the propagation queue.
//!
//!   - [Watch lists](crate::db::watches)
//!     + The literal-indexed lists which direct [BCP](crate::procedures::bcp).

pub mod arena;
pub mod atom;
pub mod clause;
pub mod trail;
pub mod watches;

pub use arena::ClauseRef;

/// The index of a decision level.
pub type LevelIndex = u32;
