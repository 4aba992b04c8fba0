/*!
Context methods for making a decision.

A decision extends the valuation when no consequence remains to propagate, by choosing an atom and a value for the atom.

The atom is the most active atom without a value, or occasionally a uniformly random such atom, per the [configured frequency](crate::config::Config::random_decision_frequency).
The decision heap holds exactly the eligible atoms without a value, so any entry will do.

The value is a [user-suggested value](crate::context::GenericContext::set_polarity) if set, a coin flip if [random_polarity](crate::config::Config::random_polarity) is set, and otherwise the value the atom last lost --- false, if the atom has never lost a value.
*/

use crate::{
    context::GenericContext,
    structures::{atom::Atom, literal::CLiteral},
};

impl<R: rand::Rng> GenericContext<R> {
    /// A decision literal, if some atom lacks a value.
    ///
    /// The caller opens a fresh decision level and assigns the literal.
    pub fn make_decision(&mut self) -> Option<CLiteral> {
        let atom = self.pick_decision_atom()?;
        let value = self.choose_value(atom);

        self.counters.total_decisions += 1;
        Some(CLiteral::new(atom, value))
    }

    /// An atom without a value, by activity or occasionally at random.
    fn pick_decision_atom(&mut self) -> Option<Atom> {
        if self.atom_db.activity.is_empty() {
            return None;
        }

        if self.config.random_decision_frequency > 0.0
            && self.rng.random_bool(self.config.random_decision_frequency)
        {
            self.counters.random_decisions += 1;
            let position = self.rng.random_range(0..self.atom_db.activity.active_count());
            return Some(self.atom_db.activity.active_entry(position) as Atom);
        }

        self.atom_db.activity.pop_max().map(|index| index as Atom)
    }

    /// A value for `atom`, per the configuration.
    fn choose_value(&mut self, atom: Atom) -> bool {
        if let Some(value) = self.atom_db.user_value_of(atom) {
            return value;
        }

        match self.config.random_polarity {
            true => self.rng.random_bool(0.5),
            false => self.atom_db.previous_value_of(atom),
        }
    }
}
