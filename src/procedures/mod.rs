//! Procedures for determining the satisfiability of a formula, over some context.
//!
//! - [bcp] --- boolean constraint propagation, closing the valuation under the consequences of unit clauses.
//! - [analysis] --- derivation of a learnt clause from a conflict, by resolution to the first unique implication point.
//! - [backjump] --- return of the trail and valuation to some earlier decision level.
//! - [decision] --- choice of an atom and value to extend the valuation when no consequences remain.
//! - [maintenance] --- level zero simplification, reduction of the learnt clause collection, and garbage collection.
//! - [solve] --- the loop tying the above together, with restarts, assumptions, and budgets.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod maintenance;
pub mod solve;
