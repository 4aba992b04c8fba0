use tern_sat::{config::Config, context::Context, reports::Report, structures::literal::CLiteral};

fn fresh_literals<const N: usize>(ctx: &mut Context) -> [CLiteral; N] {
    std::array::from_fn(|_| {
        let atom = ctx.fresh_atom().expect("atoms available");
        CLiteral::new(atom, true)
    })
}

/// An unsatisfiable formula which requires search to refute.
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
fn zero_conflict_budget_returns_unknown() {
    let mut ctx = Context::from_config(Config::default());
    add_pigeonhole(&mut ctx);

    ctx.set_conflict_budget(0);
    assert_eq!(ctx.solve(), Ok(Report::Unknown));

    ctx.budget_off();
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn zero_propagation_budget_returns_unknown() {
    let mut ctx = Context::from_config(Config::default());
    add_pigeonhole(&mut ctx);

    ctx.set_propagation_budget(0);
    assert_eq!(ctx.solve(), Ok(Report::Unknown));
}

#[test]
fn budgets_from_configuration() {
    let config = Config {
        conflict_limit: Some(0),
        ..Config::default()
    };
    let mut ctx = Context::from_config(config);
    add_pigeonhole(&mut ctx);

    assert_eq!(ctx.solve(), Ok(Report::Unknown));
}

#[test]
fn interrupt_before_a_solve() {
    let mut ctx = Context::from_config(Config::default());
    add_pigeonhole(&mut ctx);

    let handle = ctx.interrupt_handle();
    handle.store(true, std::sync::atomic::Ordering::Relaxed);
    assert_eq!(ctx.solve(), Ok(Report::Unknown));

    ctx.clear_interrupt();
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn counters_accumulate() {
    let mut ctx = Context::from_config(Config::default());
    add_pigeonhole(&mut ctx);

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

    assert_eq!(ctx.counters.solves, 1);
    assert!(ctx.counters.total_conflicts > 0);
    assert!(ctx.counters.propagations > 0);
    assert!(ctx.counters.total_decisions > 0);
}
