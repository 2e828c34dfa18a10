use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        consistency::is_assignment_consistent,
        graph::{ConstraintGraph, Value},
        strategy::{SearchStrategy, StrategyKind},
    },
};

/// Everything one `solve` call reports back: which strategy ran, how
/// long it took, how many recursive calls it made, and the complete
/// assignment if one was found (`None` means the search space was
/// exhausted, not that something went wrong).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub strategy: StrategyKind,
    pub elapsed: Duration,
    pub iterations: u64,
    pub solution: Option<Vec<Value>>,
}

/// The front door to the search strategies.
///
/// A `SearchEngine` owns an immutable [`ConstraintGraph`] and dispatches
/// `solve` calls to a named strategy, timing the run and retaining the
/// resulting assignment (if any) for a post-hoc validity check. Each
/// `solve` call starts from a fresh all-unassigned assignment; the
/// stored solution only ever reflects the most recent call.
pub struct SearchEngine {
    graph: ConstraintGraph,
    solution: Option<Assignment>,
}

impl SearchEngine {
    pub fn new(graph: ConstraintGraph) -> Self {
        Self {
            graph,
            solution: None,
        }
    }

    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    /// Runs the named strategy against the engine's graph.
    ///
    /// # Arguments
    ///
    /// * `strategy`: one of `backtracking`, `forward_checking` or
    ///   `backjumping`.
    ///
    /// # Returns
    ///
    /// * `Ok(report)` with `solution: Some(..)` if a complete consistent
    ///   assignment was found.
    /// * `Ok(report)` with `solution: None` if the search space was
    ///   exhausted without one.
    /// * `Err(Error::UnknownStrategy)` if the name is not in the closed
    ///   strategy set; this is a usage error at the dispatch boundary,
    ///   not a search failure.
    pub fn solve(&mut self, strategy: &str) -> Result<SolveReport> {
        let kind: StrategyKind = strategy.parse()?;

        let mut assignment = Assignment::new(self.graph.num_variables());
        let start = Instant::now();
        let outcome = kind.strategy().solve(&self.graph, &mut assignment);
        let elapsed = start.elapsed();

        debug_assert!(outcome.found || assignment.is_fully_unassigned());
        debug!(
            strategy = %kind,
            iterations = outcome.iterations,
            found = outcome.found,
            ?elapsed,
            "search finished"
        );

        let solution = outcome.found.then(|| assignment.to_values()).flatten();
        self.solution = outcome.found.then_some(assignment);

        Ok(SolveReport {
            strategy: kind,
            elapsed,
            iterations: outcome.iterations,
            solution,
        })
    }

    /// Whether a solution from the most recent `solve` call is stored
    /// and still satisfies every constraint. False before any call and
    /// after a call that found nothing.
    pub fn is_solution_valid(&self) -> bool {
        match &self.solution {
            Some(assignment) => is_assignment_consistent(&self.graph, assignment),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchEngine;
    use crate::error::Error;
    use crate::solver::graph::{ConstraintDef, ConstraintGraph};
    use pretty_assertions::assert_eq;

    fn four_variable_graph() -> ConstraintGraph {
        ConstraintGraph::new(
            vec![vec![1, 2, 3]; 4],
            vec![
                ConstraintDef {
                    a: 0,
                    b: 1,
                    allowed: vec![(2, 1), (2, 3), (3, 2)],
                },
                ConstraintDef {
                    a: 0,
                    b: 2,
                    allowed: vec![(2, 3)],
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn all_strategies_solve_the_reference_instance() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut engine = SearchEngine::new(four_variable_graph());

        for name in ["backtracking", "forward_checking", "backjumping"] {
            let report = engine.solve(name).unwrap();
            let solution = report.solution.expect("instance is satisfiable");
            assert_eq!(solution, vec![2, 1, 3, 1]);
            assert!(engine.is_solution_valid());
            assert!(report.iterations > 0);
        }
    }

    #[test]
    fn unknown_strategy_is_rejected_at_the_dispatch_boundary() {
        let mut engine = SearchEngine::new(four_variable_graph());
        let err = engine.solve("dancing_links").unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy { .. }));
        assert!(!engine.is_solution_valid());
    }

    #[test]
    fn validity_is_false_before_any_solve_and_after_no_solution() {
        let graph = ConstraintGraph::new(
            vec![vec![1], vec![2]],
            vec![ConstraintDef {
                a: 0,
                b: 1,
                allowed: vec![],
            }],
        )
        .unwrap();
        let mut engine = SearchEngine::new(graph);
        assert!(!engine.is_solution_valid());

        for name in ["backtracking", "forward_checking", "backjumping"] {
            let report = engine.solve(name).unwrap();
            assert_eq!(report.solution, None);
            assert!(!engine.is_solution_valid());
        }
    }

    #[test]
    fn report_echoes_the_dispatched_strategy() {
        let mut engine = SearchEngine::new(four_variable_graph());
        let report = engine.solve("forward_checking").unwrap();
        assert_eq!(report.strategy.name(), "forward_checking");
        assert_eq!(report.solution, Some(vec![2, 1, 3, 1]));
    }

    mod prop_tests {
        use super::super::SearchEngine;
        use crate::generator::{generate, GeneratorConfig};
        use proptest::prelude::*;
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        fn arb_generator_config() -> impl Strategy<Value = (GeneratorConfig, u64)> {
            (
                2usize..6,
                1usize..4,
                0.0f64..=1.0,
                0.0f64..=1.0,
                any::<u64>(),
            )
                .prop_map(|(num_variables, domain_size, density, tightness, seed)| {
                    (
                        GeneratorConfig {
                            num_variables,
                            domain_size,
                            density,
                            tightness,
                        },
                        seed,
                    )
                })
        }

        proptest! {
            #[test]
            fn backtracking_and_forward_checking_agree((config, seed) in arb_generator_config()) {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let graph = generate(&config, &mut rng).unwrap();
                let mut engine = SearchEngine::new(graph);

                let bt = engine.solve("backtracking").unwrap();
                prop_assert_eq!(engine.is_solution_valid(), bt.solution.is_some());
                let fc = engine.solve("forward_checking").unwrap();
                prop_assert_eq!(engine.is_solution_valid(), fc.solution.is_some());

                prop_assert_eq!(bt.solution.is_some(), fc.solution.is_some());
                prop_assert!(fc.iterations <= bt.iterations);
            }

            #[test]
            fn backjumping_terminates_and_found_solutions_are_valid(
                (config, seed) in arb_generator_config()
            ) {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let graph = generate(&config, &mut rng).unwrap();
                let mut engine = SearchEngine::new(graph);

                let report = engine.solve("backjumping").unwrap();
                prop_assert_eq!(engine.is_solution_valid(), report.solution.is_some());
            }
        }
    }
}
