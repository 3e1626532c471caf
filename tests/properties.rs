use rand::{Rng, SeedableRng};

use sudoku_dpll::{
    config::{Config, Heuristic},
    context::Context,
    formula::Formula,
    generic::random::MinimalPCG32,
    heuristics::{ConflictScorer, MomSelector},
    reports::Report,
    structures::clause::Clause,
};

const HEURISTICS: [Heuristic; 3] = [Heuristic::Random, Heuristic::Mom, Heuristic::Vsids];

/// A random formula over at most `atoms` atoms, with clauses of one to three literals.
fn random_formula(rng: &mut MinimalPCG32, atoms: u32) -> Vec<Vec<i32>> {
    let clause_count = rng.gen_range(1..=(5 * atoms as usize));
    (0..clause_count)
        .map(|_| {
            let length = rng.gen_range(1..=3);
            (0..length)
                .map(|_| {
                    let atom = rng.gen_range(1..=atoms) as i32;
                    match rng.gen_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect()
        })
        .collect()
}

/// Whether some valuation of the atoms up to `atoms` satisfies every clause.
fn brute_force(clauses: &[Vec<i32>], atoms: u32) -> bool {
    (0..(1_u32 << atoms)).any(|mask| {
        clauses.iter().all(|clause| {
            clause.iter().any(|literal| {
                let value = mask & (1 << (literal.unsigned_abs() - 1)) != 0;
                value == literal.is_positive()
            })
        })
    })
}

fn solve(heuristic: Heuristic, seed: u64, clauses: Vec<Vec<i32>>) -> Context {
    let mut config = Config::default();
    config.heuristic.value = heuristic;
    config.seed.value = seed;
    let mut the_context = Context::from_formula(config, Formula::from_clauses(clauses).unwrap());
    assert!(the_context.solve().is_ok());
    the_context
}

#[test]
fn sound_and_complete_on_small_formulas() {
    let mut rng = MinimalPCG32::seed_from_u64(2024);

    for _ in 0..120 {
        let atoms = rng.gen_range(2..=12);
        let clauses = random_formula(&mut rng, atoms);
        let expected = brute_force(&clauses, atoms);

        for heuristic in HEURISTICS {
            let the_context = solve(heuristic, 5, clauses.clone());
            match expected {
                true => {
                    assert_eq!(the_context.report(), Report::Satisfiable, "{clauses:?}");
                    let valuation = the_context.formula.valuation();
                    assert!(clauses.iter().all(|clause| clause.satisfied_on(valuation)));
                }
                false => assert_eq!(the_context.report(), Report::Unsatisfiable, "{clauses:?}"),
            }
        }
    }
}

#[test]
fn tautologies_preserve_verdicts() {
    let mut rng = MinimalPCG32::seed_from_u64(7);

    for _ in 0..40 {
        let atoms = rng.gen_range(2..=10);
        let clauses = random_formula(&mut rng, atoms);

        let mut with_tautologies = clauses.clone();
        for atom in 1..=atoms as i32 {
            with_tautologies.push(vec![atom, rng.gen_range(1..=atoms) as i32, -atom]);
        }

        let plain = solve(Heuristic::Mom, 0, clauses);
        let padded = solve(Heuristic::Mom, 0, with_tautologies);
        assert_eq!(plain.report(), padded.report());
    }
}

#[test]
fn seeded_search_is_reproducible() {
    let mut rng = MinimalPCG32::seed_from_u64(99);

    for _ in 0..20 {
        let atoms = rng.gen_range(6..=12);
        let clauses = random_formula(&mut rng, atoms);

        let a = solve(Heuristic::Random, 31, clauses.clone());
        let b = solve(Heuristic::Random, 31, clauses);

        assert_eq!(a.report(), b.report());
        assert_eq!(a.model(), b.model());
        assert_eq!(a.counters.splits, b.counters.splits);
        assert_eq!(a.counters.backtracks, b.counters.backtracks);
        assert_eq!(a.counters.conflicts, b.counters.conflicts);
        assert_eq!(a.counters.unit_propagations, b.counters.unit_propagations);
    }
}

#[test]
fn branches_are_isolated() {
    let mut rng = MinimalPCG32::seed_from_u64(404);

    for _ in 0..40 {
        let atoms = rng.gen_range(4..=10);
        let clauses = random_formula(&mut rng, atoms);
        let mut the_context = Context::from_formula(Config::default(), Formula::from_clauses(clauses).unwrap());

        assert!(the_context.formula.init_simplify().is_ok());
        let Some(atom) = the_context.formula.unvalued_atoms().next() else {
            continue;
        };

        let mark = the_context.formula.trail_mark();
        let snapshot = |formula: &Formula| {
            let clauses = formula
                .active_clauses()
                .map(|clause| clause.to_vec())
                .collect::<Vec<_>>();
            (clauses, formula.valuation().clone(), formula.is_consistent())
        };

        // The false branch alone.
        assert!(the_context.formula.decide(atom, false).is_ok());
        assert!(the_context.formula.propagate_units().is_ok());
        let alone = snapshot(&the_context.formula);
        the_context.formula.backtrack_to(mark);
        the_context.formula.conflicts.clear();

        // The true branch explored in full, and then the false branch.
        assert!(the_context.formula.decide(atom, true).is_ok());
        assert!(the_context.formula.propagate_units().is_ok());
        assert!(the_context.splitting(&mut MomSelector::new(), 1).is_ok());
        the_context.formula.backtrack_to(mark);
        the_context.formula.conflicts.clear();

        assert!(the_context.formula.decide(atom, false).is_ok());
        assert!(the_context.formula.propagate_units().is_ok());
        assert_eq!(alone, snapshot(&the_context.formula));
    }
}

#[test]
fn propagation_is_idempotent() {
    let mut rng = MinimalPCG32::seed_from_u64(12);

    for _ in 0..60 {
        let atoms = rng.gen_range(2..=12);
        let mut formula = Formula::from_clauses(random_formula(&mut rng, atoms)).unwrap();
        assert!(formula.init_simplify().is_ok());

        let clauses = formula
            .active_clauses()
            .map(|clause| clause.to_vec())
            .collect::<Vec<_>>();
        let valuation = formula.valuation().clone();

        assert_eq!(formula.propagate_units(), Ok(0));
        let again = formula
            .active_clauses()
            .map(|clause| clause.to_vec())
            .collect::<Vec<_>>();

        assert_eq!(clauses, again);
        assert_eq!(&valuation, formula.valuation());
    }
}

#[test]
fn decay_is_geometric() {
    let mut scorer = ConflictScorer::new(4);
    let conflicts = [vec![1, -2], vec![2, 4], vec![-2]];
    scorer.bump(conflicts.iter().map(|clause| clause.as_slice()), 1.0);
    let before = scorer.scores().to_vec();

    let factor = 0.95;
    for _ in 0..10 {
        scorer.decay(factor);
    }

    for (prior, score) in before.iter().zip(scorer.scores()) {
        assert!((prior * factor.powi(10) - score).abs() < 1e-12);
    }
}
