use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    reports::Report,
    structures::{atom::Atom, literal::CLiteral},
};

use super::{ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
///
/// # Example
///
/// ```rust
/// # use tern_sat::context::GenericContext;
/// # use tern_sat::generic::minimal_pcg::MinimalPCG32;
/// # use tern_sat::config::Config;
/// # use rand::SeedableRng;
/// let rng = MinimalPCG32::from_seed(0_u64.to_le_bytes());
/// let context = GenericContext::from_config_and_rng(Config::default(), rng);
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Watch lists, directing BCP.
    pub watches: Watches,

    /// The trail of assignments, partitioned into decision levels.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The assumptions of the solve in progress, if any.
    pub(crate) assumptions: Vec<CLiteral>,

    /// The model from the last satisfiable solve, atom by atom.
    pub(crate) model: Vec<Option<bool>>,

    /// Assumptions incompatible with the formula, from the last solve under assumptions.
    pub(crate) core: Vec<CLiteral>,

    /// The cap on stored learnt clauses.
    pub(crate) max_learnts: f64,

    /// Conflicts until the next adjustment of the learnt clause cap.
    pub(crate) learnt_adjust_conflicts: f64,

    /// The current count towards [learnt_adjust_conflicts](GenericContext::learnt_adjust_conflicts).
    pub(crate) learnt_adjust_count: u32,

    /// The trail length at the last level zero simplification, or a negative value if none has happened.
    pub(crate) simp_db_assigns: i64,

    /// The propagation allowance before the next level zero simplification.
    pub(crate) simp_db_props: i64,

    /// An absolute cap on [total_conflicts](Counters::total_conflicts), if set.
    pub(crate) conflict_budget: Option<u64>,

    /// An absolute cap on [propagations](Counters::propagations), if set.
    pub(crate) propagation_budget: Option<u64>,

    /// Set to interrupt a solve in progress, from this or another thread.
    interrupt: Arc<AtomicBool>,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        GenericContext {
            conflict_budget: config.conflict_limit,
            propagation_budget: config.propagation_limit,

            config,

            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            watches: Watches::default(),
            trail: Trail::default(),
            state: ContextState::Input,
            rng,

            assumptions: Vec::default(),
            model: Vec::default(),
            core: Vec::default(),

            max_learnts: 0.0,
            learnt_adjust_conflicts: 0.0,
            learnt_adjust_count: 0,

            simp_db_assigns: -1,
            simp_db_props: 0,

            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// A fresh atom, for use in clauses added to the context.
    ///
    /// Atoms [released](crate::context::GenericContext::release_atom) earlier may be handed out again.
    pub fn fresh_atom(&mut self) -> Result<Atom, crate::types::err::ErrorKind> {
        let initial_activity = match self.config.random_initial_activity {
            true => self.rng.random::<f64>() * 0.00001,
            false => 0.0,
        };

        let atom = self.atom_db.fresh_atom(initial_activity)?;
        self.watches.expand_to(self.atom_db.count());
        if self.model.len() < self.atom_db.count() {
            self.model.resize(self.atom_db.count(), None);
        }
        Ok(atom)
    }

    /// The value of `atom` on the model from the last satisfiable solve, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.model[atom as usize]
    }

    /// The assumptions found incompatible with the formula during the last solve under assumptions.
    ///
    /// A subset of the assumptions given, negated, as with the final conflict clause of a solve under assumptions.
    pub fn core(&self) -> &[CLiteral] {
        &self.core
    }

    /// A count of atoms in the context.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// A count of literals on the trail.
    pub fn assignment_count(&self) -> usize {
        self.trail.assignment_count()
    }

    /// A count of clauses added to the context and kept.
    pub fn clause_count(&self) -> usize {
        self.clause_db.originals.len()
    }

    /// A count of learnt clauses kept.
    pub fn learnt_count(&self) -> usize {
        self.clause_db.learnts.len()
    }

    /// Compacts the clause arena, without waiting on the wasted cell threshold.
    pub fn collect_garbage(&mut self) {
        self.counters.garbage_collections += 1;
        self.clause_db
            .collect_garbage(&mut self.watches, &mut self.atom_db);
    }

    /// Suggests a value for `atom`, taken over any saved value when deciding.
    pub fn set_polarity(&mut self, atom: Atom, value: Option<bool>) {
        self.atom_db.set_user_value(atom, value);
    }

    /// Sets whether `atom` may be used for a decision.
    pub fn set_decision_atom(&mut self, atom: Atom, eligible: bool) {
        self.atom_db.set_decision_eligible(atom, eligible);
    }

    /// Caps conflicts for subsequent solves at `budget` conflicts from now.
    pub fn set_conflict_budget(&mut self, budget: u64) {
        self.conflict_budget = Some(self.counters.total_conflicts + budget);
    }

    /// Caps propagations for subsequent solves at `budget` propagations from now.
    pub fn set_propagation_budget(&mut self, budget: u64) {
        self.propagation_budget = Some(self.counters.propagations + budget);
    }

    /// Removes any conflict or propagation cap.
    pub fn budget_off(&mut self) {
        self.conflict_budget = None;
        self.propagation_budget = None;
    }

    /// True if no budget has been passed and no interrupt is pending.
    pub fn within_budget(&self) -> bool {
        if self.interrupt.load(Ordering::Relaxed) {
            return false;
        }
        if let Some(budget) = self.conflict_budget {
            if self.counters.total_conflicts >= budget {
                return false;
            }
        }
        if let Some(budget) = self.propagation_budget {
            if self.counters.propagations >= budget {
                return false;
            }
        }
        true
    }

    /// A handle to the interrupt flag, to interrupt a solve from another thread.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupt.clone()
    }

    /// Requests any solve in progress return [Unknown](crate::reports::Report::Unknown) at the next opportunity.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Clears a pending interrupt, so further solves may be made.
    pub fn clear_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}
