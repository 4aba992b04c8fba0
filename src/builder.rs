/*!
Context methods for adding to the formula of a context.

Clauses are preprocessed on addition, at no more than the cost of a sort of the clause:

- Literals are ordered and duplicates dropped.
- A clause containing some literal and its negation is a tautology, and discarded.
- A literal true at level zero satisfies the clause, and the clause is discarded.
- A literal false at level zero is dropped from the clause.

What remains is stored, with two special cases:

- An empty clause --- added empty, or with every literal false at level zero --- makes the formula [permanently unsatisfiable](crate::context::ContextState::Unsatisfiable).
- A unit clause is assigned at level zero and propagated, with a conflict likewise permanent.

Clauses may only be added at decision level zero, and only over atoms handed out by the context and not retired --- violations panic.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
    types::err::{self, ErrorKind},
};

/// How an added clause was incorporated into a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added,

    /// The clause reduced to a single literal, assigned at level zero.
    Unit,

    /// The clause is satisfied at level zero, and was discarded.
    Satisfied,

    /// The clause contains some literal and its negation, and was discarded.
    Tautology,

    /// The context is already unsatisfiable, and the clause was discarded.
    Ignored,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Adds a clause to the formula of the context.
    ///
    /// # Panics
    /// If some decision has been made, or some literal is over an atom the context has not handed out, or has retired.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        assert_eq!(
            self.trail.level(),
            0,
            "Clauses may only be added at decision level zero"
        );

        match self.state {
            ContextState::Unsatisfiable => return Ok(ClauseOk::Ignored),
            ContextState::Satisfiable | ContextState::UnsatisfiableAssumptions => {
                self.state = ContextState::Input;
            }
            ContextState::Input | ContextState::Solving => {}
        }

        for literal in clause.literals() {
            assert!(
                (literal.atom() as usize) < self.atom_db.count(),
                "Literal {literal} over an unknown atom"
            );
            assert!(
                !self.atom_db.is_retired(literal.atom()),
                "Literal {literal} over a retired atom"
            );
        }

        if clause.size() == 0 {
            log::debug!(target: targets::CLAUSE_DB, "Empty clause added");
            self.state = ContextState::Unsatisfiable;
            return Err(err::BuildError::EmptyClause.into());
        }

        let mut literals = clause.canonical();
        literals.sort_unstable();

        let mut kept = CClause::with_capacity(literals.len());
        let mut previous: Option<CLiteral> = None;
        for literal in literals {
            if previous == Some(literal) {
                continue;
            }
            if previous == Some(literal.negate()) {
                return Ok(ClauseOk::Tautology);
            }
            previous = Some(literal);

            match self.atom_db.value_of_literal(literal) {
                Some(true) => return Ok(ClauseOk::Satisfied),
                Some(false) => continue,
                None => kept.push(literal),
            }
        }

        match kept.len() {
            0 => {
                log::debug!(target: targets::CLAUSE_DB, "Clause false at level zero added");
                self.state = ContextState::Unsatisfiable;
                Err(err::BuildError::FundamentalConflict.into())
            }

            1 => {
                self.assign(kept[0], None);
                if let Err(err::BCPError::Conflict(_)) = self.bcp() {
                    log::debug!(target: targets::CLAUSE_DB, "Conflict at level zero on {}", kept[0]);
                    self.state = ContextState::Unsatisfiable;
                    return Err(err::BuildError::FundamentalConflict.into());
                }
                Ok(ClauseOk::Unit)
            }

            _ => {
                self.clause_db.store(kept, false, &mut self.watches)?;
                Ok(ClauseOk::Added)
            }
        }
    }

    /// Fixes `literal` and retires its atom, allowing the atom to be reused for a fresh atom later.
    ///
    /// The atom keeps its place in the databases until recycled during level zero [simplification](crate::procedures::maintenance), so the fix behaves as a unit clause in the meanwhile.
    ///
    /// # Panics
    /// As [add_clause](GenericContext::add_clause).
    pub fn release_atom(&mut self, literal: CLiteral) -> Result<ClauseOk, ErrorKind> {
        let result = self.add_clause(literal)?;
        self.atom_db.retire(literal.atom());
        Ok(result)
    }
}
