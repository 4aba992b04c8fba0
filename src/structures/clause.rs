/*!
Clauses --- disjunctions of literals.

Anything with methods for inspecting a collection of literals and for conversion to the canonical [CClause] representation counts as a clause, via the [Clause] trait.
In particular, a lone [CLiteral] is a (unit) clause, which helps keep [clause addition](crate::context::GenericContext::add_clause) uniform.

Clauses stored by a context use a distinct representation, private to the [clause database](crate::db::clause).
*/

use crate::structures::literal::CLiteral;

/// The canonical representation of a clause, as a vector of literals.
pub type CClause = Vec<CLiteral>;

/// Something which has methods for inspecting a collection of literals, etc.
pub trait Clause {
    /// The length of the clause.
    fn size(&self) -> usize;

    /// An iterator over the literals of the clause.
    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

impl Clause for CClause {
    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter().copied()
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn size(&self) -> usize {
        1
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        std::iter::once(*self)
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}

impl Clause for &[CLiteral] {
    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter().copied()
    }

    fn canonical(self) -> CClause {
        self.to_vec()
    }
}
