use tern_sat::{
    builder::ClauseOk, config::Config, context::Context, reports::Report,
    structures::literal::CLiteral,
};

fn fresh_literals<const N: usize>(ctx: &mut Context) -> [CLiteral; N] {
    std::array::from_fn(|_| {
        let atom = ctx.fresh_atom().expect("atoms available");
        CLiteral::new(atom, true)
    })
}

mod simplification {
    use super::*;

    #[test]
    fn satisfied_clauses_are_dropped() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = fresh_literals(&mut ctx);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![q, r]).is_ok());
        assert!(ctx.add_clause(vec![-p, r]).is_ok());
        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(q));

        assert!(ctx.simplify().is_ok());

        // Both clauses through q are satisfied at level zero.
        assert_eq!(ctx.clause_db.originals.len(), 1);
    }

    #[test]
    fn false_literals_are_trimmed() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = fresh_literals(&mut ctx);

        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(-r));

        assert!(ctx.simplify().is_ok());

        assert_eq!(ctx.clause_db.originals.len(), 1);
        let stored = ctx.clause_db.clause(ctx.clause_db.originals[0]);
        assert_eq!(stored.size(), 2);
    }

    #[test]
    fn idempotent() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = fresh_literals(&mut ctx);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, r]).is_ok());
        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(p));

        assert!(ctx.simplify().is_ok());
        let after_first = ctx.clause_db.originals.len();

        assert!(ctx.simplify().is_ok());
        assert_eq!(ctx.clause_db.originals.len(), after_first);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }
}

mod garbage {
    use super::*;

    /// Three pigeons into two holes, unsatisfiable after some search.
    fn add_pigeonhole(ctx: &mut Context) {
        let p: Vec<[CLiteral; 2]> = (0..3).map(|_| fresh_literals(ctx)).collect();

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
    }

    #[test]
    fn compaction_during_a_solve() {
        // Any wasted cell triggers compaction, so each removal relocates the arena mid-solve.
        let config = Config {
            garbage_fraction: 0.0,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);
        add_pigeonhole(&mut ctx);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.garbage_collections > 0);
    }

    #[test]
    fn solving_after_compaction() {
        let config = Config {
            garbage_fraction: 0.0,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);
        let [p, q, r, s] = fresh_literals(&mut ctx);

        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert!(ctx.add_clause(vec![-q, s, r]).is_ok());
        assert!(ctx.add_clause(vec![-p, q, s]).is_ok());
        assert!(ctx.add_clause(vec![p, -s]).is_ok());

        // r satisfies two clauses, and their removal leaves wasted cells to compact.
        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(r));
        assert!(ctx.simplify().is_ok());
        assert!(ctx.counters.garbage_collections > 0);
        assert_eq!(ctx.clause_db.originals.len(), 2);

        // The surviving clauses are watched and solved through relocated references.
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        for clause in [vec![-p, q, s], vec![p, -s]] {
            let satisfied = clause
                .iter()
                .any(|literal| ctx.value_of(literal.atom()) == Some(literal.polarity()));
            assert!(satisfied);
        }
    }
}

mod released_atoms {
    use super::*;

    #[test]
    fn release_fixes_the_literal() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = fresh_literals(&mut ctx);

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.release_atom(p).is_ok());

        // q is forced before the released atom is recycled.
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn released_atoms_are_reused_after_simplification() {
        let mut ctx = Context::from_config(Config::default());
        let [p, _q] = fresh_literals(&mut ctx);

        assert!(ctx.release_atom(-p).is_ok());

        // Before recycling a fresh atom extends the database.
        let extended = ctx.fresh_atom().expect("atoms available");
        assert_eq!(extended, 2);

        assert!(ctx.simplify().is_ok());

        let recycled = ctx.fresh_atom().expect("atoms available");
        assert_eq!(recycled, p.atom());

        // The recycled atom is an ordinary atom, free to take either value.
        assert!(ctx.add_clause(CLiteral::new(recycled, true)).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(recycled), Some(true));
    }

    #[test]
    #[should_panic]
    fn clauses_over_released_atoms_panic() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = fresh_literals(&mut ctx);

        assert!(ctx.release_atom(p).is_ok());
        let _ = ctx.add_clause(vec![p, q]);
    }
}
