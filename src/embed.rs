/*!
A minimal integer surface over a [Context], in the style of common solver embeddings.

Literals are signed integers in the DIMACS convention: the atom index offset by one, negated by sign, with zero never used.
The surface is deliberately small --- allocate literals, add clauses, solve, read the model --- and is free of budgets: a [solve](Engine::solve) runs to a verdict.

```rust
# use tern_sat::embed::Engine;
let mut engine = Engine::new();

let p = engine.new_literal();
let q = engine.new_literal();

engine.add_clause(&[p, q]);
engine.add_clause(&[-p, q]);
engine.add_clause(&[-p, -q]);

assert!(engine.solve());

let mut model = vec![0_u8; engine.variable_count()];
engine.extract_model(&mut model);
assert_eq!(model, vec![0, 1]);
```
*/

use crate::{
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::CLiteral,
};

/// The encoding of a false value in an extracted model.
pub const VALUE_FALSE: u8 = 0;

/// The encoding of a true value in an extracted model.
pub const VALUE_TRUE: u8 = 1;

/// The encoding of a missing value in an extracted model.
pub const VALUE_UNDEFINED: u8 = 2;

/// A context behind an integer-literal surface.
pub struct Engine {
    context: Context,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine over a default configuration.
    pub fn new() -> Self {
        Engine {
            context: Context::from_config(Config::default()),
        }
    }

    /// A fresh literal, as a positive integer.
    ///
    /// # Panics
    /// If every atom has been used.
    pub fn new_literal(&mut self) -> i32 {
        match self.context.fresh_atom() {
            Ok(atom) => CLiteral::new(atom, true).as_dimacs(),
            Err(e) => panic!("Atoms exhausted: {e:?}"),
        }
    }

    /// Adds a clause of integer literals.
    ///
    /// A clause which makes the formula unsatisfiable is noted in the context, and surfaces on the next [solve](Engine::solve).
    ///
    /// # Panics
    /// If some literal is zero, or over an atom the engine has not handed out.
    pub fn add_clause(&mut self, clause: &[i32]) {
        let literals: Vec<CLiteral> = clause
            .iter()
            .map(|int| CLiteral::from_dimacs(*int))
            .collect();

        // Unsatisfiability is part of the state of the context, so the result carries nothing further.
        let _ = self.context.add_clause(literals);
    }

    /// True if the formula is satisfiable.
    ///
    /// Runs without a budget, to a verdict.
    pub fn solve(&mut self) -> bool {
        self.context.budget_off();
        matches!(self.context.solve(), Ok(Report::Satisfiable))
    }

    /// A count of literals handed out.
    pub fn variable_count(&self) -> usize {
        self.context.atom_count()
    }

    /// Fills `buffer` with the model value of the atom at each index: [VALUE_FALSE], [VALUE_TRUE], or [VALUE_UNDEFINED].
    ///
    /// Meaningful only after a satisfiable [solve](Engine::solve).
    pub fn extract_model(&self, buffer: &mut [u8]) {
        for (atom, cell) in buffer.iter_mut().enumerate() {
            *cell = match self.context.value_of(atom as crate::structures::atom::Atom) {
                Some(false) => VALUE_FALSE,
                Some(true) => VALUE_TRUE,
                None => VALUE_UNDEFINED,
            };
        }
    }

    /// Discards the engine's state, as if freshly constructed.
    pub fn reset(&mut self) {
        self.context = Context::from_config(Config::default());
    }
}

#[cfg(test)]
mod embed_tests {
    use super::*;

    #[test]
    fn unsatisfiable_pair() {
        let mut engine = Engine::new();
        let p = engine.new_literal();

        engine.add_clause(&[p]);
        engine.add_clause(&[-p]);

        assert!(!engine.solve());
    }

    #[test]
    fn reset_clears_clauses() {
        let mut engine = Engine::new();
        let p = engine.new_literal();
        engine.add_clause(&[p]);
        engine.add_clause(&[-p]);
        assert!(!engine.solve());

        engine.reset();
        assert_eq!(engine.variable_count(), 0);
        let p = engine.new_literal();
        engine.add_clause(&[p]);
        assert!(engine.solve());
    }
}
