/*!
Literals --- atoms paired with a (boolean) polarity.

The canonical representation is the [CLiteral] structure.

```rust
# use tern_sat::structures::literal::CLiteral;
let literal = CLiteral::new(79, true);

assert!(literal.polarity());
assert_eq!(literal.atom(), 79);
assert_eq!(literal.negate().polarity(), false);
assert_eq!(-literal, literal.negate());
```

Literals are ordered by atom and then polarity, with false (strictly) less than true.
This ordering is used to canonicalise clauses during [clause addition](crate::context::GenericContext::add_clause).

In other solvers an integer is often used, with the sign of the integer indicating the polarity of the literal.
The same convention is used at the [embed](crate::embed) surface, via [as_dimacs](CLiteral::as_dimacs).
*/

use crate::structures::atom::Atom;

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl CLiteral {
    /// A fresh literal, pairing `atom` with `polarity`.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// An index unique to the literal, for use with literal-indexed structures (e.g. [watch lists](crate::db::watches)).
    ///
    /// The negation of a literal is always the adjacent index.
    pub fn index(&self) -> usize {
        ((self.atom as usize) << 1) | (self.polarity as usize)
    }

    /// The value the literal takes given a value of its atom --- XOR with the sign of the literal.
    ///
    /// An atom without a value leaves the literal without a value.
    pub fn value_given(&self, atom_value: Option<bool>) -> Option<bool> {
        atom_value.map(|value| value == self.polarity)
    }

    /// The literal in its signed integer form, with the atom offset by one so that zero is never used.
    pub fn as_dimacs(&self) -> i32 {
        let external = self.atom as i32 + 1;
        match self.polarity {
            true => external,
            false => -external,
        }
    }

    /// The literal corresponding to a signed integer in DIMACS convention.
    ///
    /// # Panics
    /// Zero does not represent a literal, by convention, and panics.
    pub fn from_dimacs(int: i32) -> Self {
        assert!(int != 0, "Zero does not correspond to a literal");
        CLiteral {
            atom: (int.unsigned_abs()) - 1,
            polarity: int.is_positive(),
        }
    }
}

impl std::ops::Neg for CLiteral {
    type Output = CLiteral;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs())
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn negation() {
        let p = CLiteral::new(0, true);
        assert_eq!(p.negate(), CLiteral::new(0, false));
        assert_eq!(p.negate().negate(), p);
        assert_eq!(p.index() ^ 1, p.negate().index());
    }

    #[test]
    fn values() {
        let not_q = CLiteral::new(1, false);
        assert_eq!(not_q.value_given(Some(false)), Some(true));
        assert_eq!(not_q.value_given(Some(true)), Some(false));
        assert_eq!(not_q.value_given(None), None);
    }

    #[test]
    fn dimacs() {
        let p = CLiteral::new(0, true);
        assert_eq!(p.as_dimacs(), 1);
        assert_eq!(CLiteral::from_dimacs(-2), CLiteral::new(1, false));
        assert_eq!(CLiteral::from_dimacs(p.as_dimacs()), p);
    }

    #[test]
    fn order() {
        let mut literals = vec![
            CLiteral::new(2, false),
            CLiteral::new(0, true),
            CLiteral::new(1, true),
            CLiteral::new(0, false),
        ];
        literals.sort_unstable();
        assert_eq!(literals[0], CLiteral::new(0, false));
        assert_eq!(literals[1], CLiteral::new(0, true));
        assert_eq!(literals[3], CLiteral::new(2, false));
    }
}
