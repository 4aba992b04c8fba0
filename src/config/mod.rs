/*!
Configuration of a context.

A context clones the configuration it is given and consults it throughout a solve.
Fields may be adjusted between solves, though adjustments which reshape stored structures (e.g. the random seed) only take full effect on a fresh context.

The defaults are those of a typical CDCL solver, tuned for quick deterministic results.
*/

/// How much effort to spend minimising a learnt clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Minimization {
    /// Keep the learnt clause as derived.
    None,

    /// Remove literals whose negation is set by the reason of some other literal in the clause.
    Basic,

    /// Remove literals implied by other literals in the clause through any depth of reasons.
    Deep,
}

/// Which saved values to prefer when choosing a value for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseSaving {
    /// Never consult saved values.
    None,

    /// Save values only for atoms unset while backjumping from the top decision level.
    Limited,

    /// Save the value of every atom unset while backjumping.
    Full,
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The amount to decay atom activity by after a conflict, as an inverse factor.
    pub variable_decay: f64,

    /// The amount to decay clause activity by after a conflict, as an inverse factor.
    pub clause_decay: f64,

    /// The probability of choosing the atom of a decision at random rather than by activity.
    pub random_decision_frequency: f64,

    /// The seed for the source of randomness of a context.
    pub random_seed: u64,

    /// Give fresh atoms a small random initial activity.
    pub random_initial_activity: bool,

    /// Choose the value of a decision at random rather than by saved value.
    pub random_polarity: bool,

    /// How much effort to spend minimising a learnt clause.
    pub minimization: Minimization,

    /// Which saved values to prefer when choosing a value for a decision.
    pub phase_saving: PhaseSaving,

    /// Schedule restarts on the luby sequence, and otherwise geometrically.
    pub luby_restart: bool,

    /// The conflict allowance of the first restart interval.
    pub restart_first: u32,

    /// The base of the luby sequence, or the factor by which the allowance grows, per [luby_restart](Config::luby_restart).
    pub restart_inc: f64,

    /// The initial cap on learnt clauses, as a fraction of the clause count.
    pub learnt_size_factor: f64,

    /// The factor by which the learnt clause cap grows at each adjustment.
    pub learnt_size_inc: f64,

    /// The conflict count of the first cap adjustment.
    pub learnt_adjust_start: u32,

    /// The factor by which the conflict count to the next adjustment grows.
    pub learnt_adjust_inc: f64,

    /// A floor on the learnt clause cap.
    pub min_learnt_limit: u32,

    /// The fraction of wasted arena cells which triggers garbage collection.
    pub garbage_fraction: f64,

    /// An upper bound on conflicts for a solve, if set.
    pub conflict_limit: Option<u64>,

    /// An upper bound on propagations for a solve, if set.
    pub propagation_limit: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variable_decay: 0.95,
            clause_decay: 0.999,

            random_decision_frequency: 0.0,
            random_seed: 91648253,
            random_initial_activity: false,
            random_polarity: false,

            minimization: Minimization::Deep,
            phase_saving: PhaseSaving::Full,

            luby_restart: true,
            restart_first: 100,
            restart_inc: 2.0,

            learnt_size_factor: 1.0 / 3.0,
            learnt_size_inc: 1.1,
            learnt_adjust_start: 100,
            learnt_adjust_inc: 1.5,
            min_learnt_limit: 0,

            garbage_fraction: 0.20,

            conflict_limit: None,
            propagation_limit: None,
        }
    }
}
