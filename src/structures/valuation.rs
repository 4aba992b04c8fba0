/*!
The three-valued truth domain of a partial valuation.

A [Value] is true, false, or undefined --- with 'undefined' represented by [None].

Two pure operations are given to combine values the way clauses and formulas do:
- [disjunction], under which a single true settles the value and two undefined values remain undefined.
- [conjunction], dually.

Negation of a value is handled on the literal side, see [value_given](crate::structures::literal::CLiteral::value_given).
*/

/// A truth value: true, false, or undefined.
pub type Value = Option<bool>;

/// The disjunction of two values.
///
/// True if either disjunct is true, undefined if neither is true and either is undefined, and false otherwise.
pub fn disjunction(a: Value, b: Value) -> Value {
    match (a, b) {
        (Some(true), _) | (_, Some(true)) => Some(true),
        (None, _) | (_, None) => None,
        _ => Some(false),
    }
}

/// The conjunction of two values.
///
/// False if either conjunct is false, undefined if neither is false and either is undefined, and true otherwise.
pub fn conjunction(a: Value, b: Value) -> Value {
    match (a, b) {
        (Some(false), _) | (_, Some(false)) => Some(false),
        (None, _) | (_, None) => None,
        _ => Some(true),
    }
}

#[cfg(test)]
mod value_tests {
    use super::*;

    #[test]
    fn disjunctions() {
        assert_eq!(disjunction(Some(true), None), Some(true));
        assert_eq!(disjunction(Some(false), None), None);
        assert_eq!(disjunction(None, None), None);
        assert_eq!(disjunction(Some(false), Some(false)), Some(false));
    }

    #[test]
    fn conjunctions() {
        assert_eq!(conjunction(Some(false), None), Some(false));
        assert_eq!(conjunction(Some(true), None), None);
        assert_eq!(conjunction(None, None), None);
        assert_eq!(conjunction(Some(true), Some(true)), Some(true));
    }
}
