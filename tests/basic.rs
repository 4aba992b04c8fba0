use tern_sat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

fn fresh_literals<const N: usize>(ctx: &mut Context) -> [CLiteral; N] {
    std::array::from_fn(|_| {
        let atom = ctx.fresh_atom().expect("atoms available");
        CLiteral::new(atom, true)
    })
}

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let [p] = fresh_literals(&mut ctx);

        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(p));

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable)
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = fresh_literals(&mut ctx);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable))
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = fresh_literals(&mut ctx);

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p, q]));
        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn duplicates() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = fresh_literals(&mut ctx);

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p, p, q, q]));

        assert_eq!(ctx.clause_db.originals.len(), 1);
        let stored = ctx.clause_db.clause(ctx.clause_db.originals[0]);
        assert_eq!(stored.size(), 2);
    }

    #[test]
    fn tautology_skip() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = fresh_literals(&mut ctx);

        assert_eq!(Ok(ClauseOk::Tautology), ctx.add_clause(vec![p, -q, -p]));
        assert!(ctx.clause_db.originals.is_empty());

        // A discarded tautology leaves the context as it was.
        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn empty_clause_is_permanent() {
        let mut ctx = Context::from_config(Config::default());
        let [p] = fresh_literals(&mut ctx);

        assert_eq!(
            ctx.add_clause(Vec::default()),
            Err(ErrorKind::Build(err::BuildError::EmptyClause))
        );
        assert_eq!(ctx.report(), Report::Unsatisfiable);

        assert_eq!(Ok(ClauseOk::Ignored), ctx.add_clause(p));
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn conflicting_units_are_permanent() {
        let mut ctx = Context::from_config(Config::default());
        let [p] = fresh_literals(&mut ctx);

        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(p));
        assert_eq!(
            ctx.add_clause(-p),
            Err(ErrorKind::Build(err::BuildError::FundamentalConflict))
        );

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn clause_false_at_level_zero_is_permanent() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = fresh_literals(&mut ctx);

        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(p));
        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(q));

        // Both literals are dropped as false, distinct from adding a clause with no literals.
        assert_eq!(
            ctx.add_clause(vec![-p, -q]),
            Err(ErrorKind::Build(err::BuildError::FundamentalConflict))
        );
        assert_eq!(ctx.report(), Report::Unsatisfiable);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn satisfied_on_addition() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = fresh_literals(&mut ctx);

        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(p));
        assert_eq!(Ok(ClauseOk::Satisfied), ctx.add_clause(vec![p, q]));
        assert!(ctx.clause_db.originals.is_empty());
    }
}

mod models {
    use super::*;

    /// Clauses over `atoms` atoms which admit a model, deterministically scrambled.
    fn satisfiable_formula(atoms: usize) -> Vec<Vec<i32>> {
        // An implication cycle broken at the end, with some extra binary clauses.
        let mut clauses = Vec::default();
        for index in 1..atoms as i32 {
            clauses.push(vec![-index, index + 1]);
        }
        for index in 1..(atoms as i32 - 2) {
            clauses.push(vec![-index, index + 2]);
        }
        clauses.push(vec![1, 2, 3]);
        clauses
    }

    #[test]
    fn model_satisfies_every_clause() {
        use tern_sat::structures::{
            clause::{CClause, Clause},
            valuation,
        };

        let mut ctx = Context::from_config(Config::default());
        let clauses = satisfiable_formula(24);

        for _ in 0..24 {
            ctx.fresh_atom().expect("atoms available");
        }
        for clause in &clauses {
            let literals: Vec<CLiteral> =
                clause.iter().map(|int| CLiteral::from_dimacs(*int)).collect();
            assert!(ctx.add_clause(literals).is_ok());
        }

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        // The model evaluates the formula, clause by clause, to true.
        let mut formula_value = Some(true);
        for clause in &clauses {
            let literals: CClause =
                clause.iter().map(|int| CLiteral::from_dimacs(*int)).collect();

            let clause_value = literals.literals().fold(Some(false), |value, literal| {
                valuation::disjunction(value, literal.value_given(ctx.value_of(literal.atom())))
            });
            assert_eq!(
                clause_value,
                Some(true),
                "Clause {clause:?} unsatisfied by the model"
            );

            formula_value = valuation::conjunction(formula_value, clause_value);
        }
        assert_eq!(formula_value, Some(true));
    }

    #[test]
    fn pigeonhole_three_into_two() {
        let mut ctx = Context::from_config(Config::default());

        // p[i][j]: pigeon i in hole j.
        let p: Vec<[CLiteral; 2]> = (0..3).map(|_| fresh_literals(&mut ctx)).collect();

        for pigeon in &p {
            assert!(ctx.add_clause(vec![pigeon[0], pigeon[1]]).is_ok());
        }
        for hole in 0..2 {
            for first in 0..3 {
                for second in (first + 1)..3 {
                    assert!(ctx
                        .add_clause(vec![-p[first][hole], -p[second][hole]])
                        .is_ok());
                }
            }
        }

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn deterministic_under_a_fixed_seed() {
        let config = Config {
            random_decision_frequency: 0.5,
            random_polarity: true,
            ..Config::default()
        };

        let run = |config: Config| {
            let mut ctx = Context::from_config(config);
            for _ in 0..24 {
                ctx.fresh_atom().expect("atoms available");
            }
            for clause in satisfiable_formula(24) {
                let literals: Vec<CLiteral> =
                    clause.iter().map(|int| CLiteral::from_dimacs(*int)).collect();
                assert!(ctx.add_clause(literals).is_ok());
            }
            assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
            (0..24).map(|atom| ctx.value_of(atom)).collect::<Vec<_>>()
        };

        assert_eq!(run(config.clone()), run(config));
    }
}
