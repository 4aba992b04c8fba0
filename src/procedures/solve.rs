/*!
Context methods for a solve --- the loop tying propagation, analysis, and decisions together.

# Overview

A solve is a sequence of searches, each with an allowance of conflicts.
When the allowance is spent the search restarts: the trail returns to level zero and the search begins again, keeping learnt clauses and activity.
Allowances follow the [luby](crate::generic::luby) sequence, or grow geometrically, per the configuration.

Within a search:

- The valuation is closed under [BCP](crate::procedures::bcp).
- A conflict is [analysed](crate::procedures::analysis), the learnt clause stored, and the trail returned to the level at which the clause asserts.
  A conflict without any decision settles the formula as unsatisfiable, permanently.
- Otherwise the valuation is extended by an assumption of the solve, if any remain, and a [decision](crate::procedures::decision) if not.
  A valuation with no atom left to decide settles the formula as satisfiable, and is kept as the model.

An assumption false on the valuation ends the solve, with the incompatible assumptions collected as an [unsatisfiable core](crate::context::GenericContext::core).

Searches also keep the databases in shape: the learnt clause collection is [reduced](crate::procedures::maintenance) when it outgrows a cap which loosens over the solve, and at level zero the databases are [simplified](crate::procedures::maintenance).

Conflict and propagation [budgets](crate::context::GenericContext::set_conflict_budget) and the [interrupt flag](crate::context::GenericContext::interrupt) are polled once per iteration of the search loop, an exhausted budget or a raised interrupt ending the solve without a verdict.
*/

use crate::{
    context::{ContextState, GenericContext},
    generic::luby::luby,
    misc::log::targets::{self},
    reports::Report,
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

/// How a single search concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchOutcome {
    /// A valuation satisfying the formula was found.
    Satisfiable,

    /// A conflict without any decision was found.
    Unsatisfiable,

    /// Some assumption is incompatible with the formula.
    UnsatisfiableAssumptions,

    /// The conflict allowance was spent.
    Restart,

    /// A budget was passed, or an interrupt raised.
    Exhausted,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.solve_given(Vec::default())
    }

    /// Determines the satisfiability of the formula of the context under the given assumptions.
    ///
    /// Assumptions are taken in order, each opening a decision level before any free decision is made.
    /// If the assumptions are incompatible with the formula the report is unsatisfiable, an [unsatisfiable core](GenericContext::core) is kept, and the context remains usable --- with other assumptions, or none.
    ///
    /// # Panics
    /// If some decision has been made, or some assumption is over an atom the context has not handed out, or has retired.
    pub fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind> {
        assert_eq!(
            self.trail.level(),
            0,
            "Solves may only begin at decision level zero"
        );

        if self.state == ContextState::Unsatisfiable {
            return Ok(Report::Unsatisfiable);
        }

        for assumption in &assumptions {
            assert!(
                (assumption.atom() as usize) < self.atom_db.count(),
                "Assumption {assumption} over an unknown atom"
            );
            assert!(
                !self.atom_db.is_retired(assumption.atom()),
                "Assumption {assumption} over a retired atom"
            );
        }

        self.counters.solves += 1;
        self.assumptions = assumptions;
        self.core.clear();
        self.state = ContextState::Solving;

        self.max_learnts = (self.clause_db.originals.len() as f64
            * self.config.learnt_size_factor)
            .max(self.config.min_learnt_limit as f64);
        self.learnt_adjust_conflicts = self.config.learnt_adjust_start as f64;
        self.learnt_adjust_count = self.learnt_adjust_conflicts as u32;

        let mut restarts: u32 = 0;
        let outcome = loop {
            let scale = match self.config.luby_restart {
                true => luby(self.config.restart_inc, restarts),
                false => self.config.restart_inc.powi(restarts as i32),
            };
            let allowance = (scale * self.config.restart_first as f64) as u64;

            match self.search(allowance)? {
                SearchOutcome::Restart => restarts += 1,
                concluded => break concluded,
            }
        };

        self.backjump(0);
        self.assumptions.clear();

        let report = match outcome {
            SearchOutcome::Satisfiable => Report::Satisfiable,
            SearchOutcome::Unsatisfiable | SearchOutcome::UnsatisfiableAssumptions => {
                Report::Unsatisfiable
            }
            SearchOutcome::Exhausted => {
                self.state = ContextState::Input;
                Report::Unknown
            }
            SearchOutcome::Restart => Report::Unknown,
        };

        log::debug!(target: targets::ANALYSIS, "Solve concluded: {report}");
        Ok(report)
    }

    /// Searches for a satisfying valuation or a level zero conflict, restarting after `conflict_allowance` conflicts.
    ///
    /// An allowance of zero permits any number of conflicts.
    fn search(&mut self, conflict_allowance: u64) -> Result<SearchOutcome, ErrorKind> {
        let mut conflicts: u64 = 0;

        loop {
            if !self.within_budget() {
                self.backjump(0);
                return Ok(SearchOutcome::Exhausted);
            }

            match self.bcp() {
                Err(err::BCPError::Conflict(conflict)) => {
                    self.counters.total_conflicts += 1;
                    self.counters.fresh_conflicts += 1;
                    conflicts += 1;

                    if self.trail.level() == 0 {
                        self.state = ContextState::Unsatisfiable;
                        return Ok(SearchOutcome::Unsatisfiable);
                    }

                    let (learnt, backjump_level) = self.conflict_analysis(conflict);
                    self.counters.learnt_literals += learnt.len() as u64;
                    self.backjump(backjump_level);

                    match learnt.len() {
                        1 => self.assign(learnt[0], None),
                        _ => {
                            let asserted = learnt[0];
                            let reference = self.clause_db.store(learnt, true, &mut self.watches)?;
                            self.clause_db.bump_activity(reference);
                            self.assign(asserted, Some(reference));
                        }
                    }

                    self.atom_db.decay_activity(self.config.variable_decay);
                    self.clause_db.decay_activity(self.config.clause_decay);

                    self.learnt_adjust_count -= 1;
                    if self.learnt_adjust_count == 0 {
                        self.learnt_adjust_conflicts *= self.config.learnt_adjust_inc;
                        self.learnt_adjust_count = self.learnt_adjust_conflicts as u32;
                        self.max_learnts *= self.config.learnt_size_inc;

                        log::debug!(target: targets::REDUCTION,
                            "Learnt cap now {}, with {} learnt clauses stored",
                            self.max_learnts as u64,
                            self.clause_db.learnts.len());
                    }
                }

                Err(corruption) => return Err(corruption.into()),

                Ok(()) => {
                    if conflict_allowance > 0 && conflicts >= conflict_allowance {
                        self.counters.restarts += 1;
                        self.counters.fresh_conflicts = 0;
                        self.backjump(0);
                        return Ok(SearchOutcome::Restart);
                    }

                    if self.trail.level() == 0 && self.simplify().is_err() {
                        return Ok(SearchOutcome::Unsatisfiable);
                    }

                    if self.clause_db.learnts.len() as f64
                        - self.trail.assignment_count() as f64
                        >= self.max_learnts
                    {
                        self.reduce_db();
                    }

                    // Assumptions are taken ahead of any free decision.
                    let mut next = None;
                    while (self.trail.level() as usize) < self.assumptions.len() {
                        let assumption = self.assumptions[self.trail.level() as usize];
                        match self.atom_db.value_of_literal(assumption) {
                            // Already consequence of earlier levels, so the level for it is empty.
                            Some(true) => self.trail.push_level(),

                            Some(false) => {
                                self.analyze_final(assumption.negate());
                                self.state = ContextState::UnsatisfiableAssumptions;
                                return Ok(SearchOutcome::UnsatisfiableAssumptions);
                            }

                            None => {
                                next = Some(assumption);
                                break;
                            }
                        }
                    }

                    let decision = match next {
                        Some(assumption) => Some(assumption),
                        None => self.make_decision(),
                    };

                    match decision {
                        None => {
                            self.model.clear();
                            self.model.extend_from_slice(self.atom_db.valuation());
                            self.state = ContextState::Satisfiable;
                            return Ok(SearchOutcome::Satisfiable);
                        }

                        Some(literal) => {
                            self.trail.push_level();
                            self.assign(literal, None);
                        }
                    }
                }
            }
        }
    }
}
