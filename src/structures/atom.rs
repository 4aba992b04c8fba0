/*!
(The internal representation of) an atom, aka. a 'variable'.

Broadly, atoms are things to which assigning a (boolean) value is of interest.

Internally atoms are unsigned integers, so that an atom may be used as the index of a structure.
The atoms of a context are always [0..*m*) for some *m*, though an atom within the range may have been [retired](crate::context::GenericContext::release_atom) and its index set aside for reuse.

Externally --- at the [embed](crate::embed) surface --- an atom *a* is written as the (strictly positive) integer *a + 1*, with negation as the arithmetic sign.
As a consequence the largest supported atom is bounded by [ATOM_MAX] rather than [u32::MAX].
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, limited by the signed external representation.
pub const ATOM_MAX: Atom = i32::MAX as Atom - 1;
