//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! tern_sat is a conflict-driven clause-learning (CDCL) engine.
//! Given a formula as a conjunction of clauses it decides satisfiability, optionally under a collection of assumed literals, and on a satisfiable formula produces a model --- a value for every atom which satisfies every clause.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context::Context).
//!
//! A context owns every database relevant to a solve:
//! - A [clause database](crate::db::clause) whose clauses live in a relocatable [arena](crate::db::arena) and are accessed through [ClauseRef](crate::db::arena::ClauseRef) handles.
//! - An [atom database](crate::db::atom) holding the valuation, reasons, decision levels, and activity of atoms.
//! - A [trail](crate::db::trail) of assignments partitioned into decision levels.
//! - [Watch lists](crate::db::watches) supporting the two-watched-literal propagation scheme.
//!
//! The algorithm for determining satisfiability is factored into a collection of [procedures]:
//! boolean constraint propagation, conflict analysis with first-UIP learning, backjumping, decision making, database maintenance, and the solve loop itself.
//!
//! Useful starting points:
//! - The high-level [solve procedure](crate::procedures::solve) for the dynamics of a solve.
//! - The [database module](crate::db) for the data considered during a solve.
//! - The [configuration](crate::config) for supported features and their defaults.
//! - The [embed] module for a minimal integer-literal surface in the style of common solver embeddings.
//!
//! # Example
//!
//! ```rust
//! # use tern_sat::config::Config;
//! # use tern_sat::context::Context;
//! # use tern_sat::reports::Report;
//! # use tern_sat::structures::literal::CLiteral;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = the_context.fresh_atom().unwrap();
//! let q = the_context.fresh_atom().unwrap();
//!
//! // (p ∨ q) ∧ (¬p ∨ q) ∧ (¬p ∨ ¬q)
//! assert!(the_context.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)]).is_ok());
//! assert!(the_context.add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)]).is_ok());
//! assert!(the_context.add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, false)]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(p), Some(false));
//! assert_eq!(the_context.value_of(q), Some(true));
//! ```
//!
//! # Errors and contracts
//!
//! Expected conditions --- unsatisfiability, exhausted budgets, an external interrupt --- are ordinary values ([reports](crate::reports) or [errors](crate::types::err)) and leave the context usable, with one exception: a conflict at decision level zero permanently disables the context.
//!
//! Contract violations --- referencing a retired atom, adding a clause above decision level zero, a zero literal at the [embed] surface --- panic.
//! A context whose contracts have been broken is not safe to continue using, and no attempt is made to do so.
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets defined in [misc::log] to help narrow output to relevant parts of a solve.
//! No log implementation is provided.

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod embed;
pub mod misc;
pub mod reports;
