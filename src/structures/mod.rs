//! Representations of the abstract elements of a solve.
//!
//! - [Atoms](atom), things to which a value may be assigned.
//! - [Literals](literal), atoms paired with a polarity.
//! - [Clauses](clause), disjunctions of literals.
//! - [Values](valuation), the three-valued truth domain of a partial valuation.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
