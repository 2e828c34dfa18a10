//! Simplified backjumping: depth-first search that can abandon a branch
//! before enumerating any values, based on the link to the most recently
//! assigned variable.
//!
//! This is a single-level simplification, not conflict-directed
//! backjumping: only the immediate predecessor link is inspected, never
//! the deepest conflicting ancestor. When a variable's domain is
//! exhausted the search re-enters variable selection with the
//! predecessor unchanged; two guards bound that recovery path (see
//! `search`), keeping the recursion finite on every finite graph.

use crate::solver::assignment::Assignment;
use crate::solver::consistency::{is_assignment_consistent, is_link_consistent};
use crate::solver::graph::{ConstraintGraph, VariableId};
use crate::solver::strategy::{SearchOutcome, SearchStrategy};

pub struct BackjumpingSearch;

impl SearchStrategy for BackjumpingSearch {
    fn solve(&self, graph: &ConstraintGraph, assignment: &mut Assignment) -> SearchOutcome {
        let mut iterations = 0;
        let found = search(graph, assignment, None, false, &mut iterations);
        SearchOutcome { iterations, found }
    }
}

/// One node of the search. `predecessor` is the most recently assigned
/// variable on the current path; `reselected` marks a node reached by
/// the domain-exhaustion re-selection call rather than by an
/// assignment.
fn search(
    graph: &ConstraintGraph,
    assignment: &mut Assignment,
    predecessor: Option<VariableId>,
    reselected: bool,
    iterations: &mut u64,
) -> bool {
    // Every assignment on the path was checked before descending, so a
    // complete assignment is already consistent.
    if assignment.is_complete() {
        return true;
    }

    let Some(variable) = assignment.first_unassigned_except(predecessor) else {
        // Only the excluded predecessor is left unassigned: no progress
        // is possible on this branch.
        return false;
    };

    // Early jump: if the link to the predecessor is already violated,
    // give up on this variable without enumerating its domain.
    if let Some(predecessor) = predecessor {
        if !is_link_consistent(graph, variable, predecessor, assignment) {
            return false;
        }
    }

    for &value in graph.domain(variable) {
        assignment.assign(variable, value);
        if is_assignment_consistent(graph, assignment) {
            *iterations += 1;
            if search(graph, assignment, Some(variable), false, iterations) {
                return true;
            }
        }
        assignment.unassign(variable);
    }

    // Domain exhausted. Re-enter variable selection once, keeping the
    // predecessor unchanged; a second consecutive re-selection would
    // revisit an identical state, so it fails instead.
    if reselected {
        return false;
    }
    *iterations += 1;
    search(graph, assignment, predecessor, true, iterations)
}

#[cfg(test)]
mod tests {
    use super::BackjumpingSearch;
    use crate::solver::assignment::Assignment;
    use crate::solver::consistency::is_assignment_consistent;
    use crate::solver::graph::{ConstraintDef, ConstraintGraph};
    use crate::solver::strategy::SearchStrategy;
    use pretty_assertions::assert_eq;

    #[test]
    fn solves_the_four_variable_instance() {
        let graph = ConstraintGraph::new(
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
        .unwrap();
        let mut assignment = Assignment::new(4);

        let outcome = BackjumpingSearch.solve(&graph, &mut assignment);

        assert!(outcome.found);
        assert!(is_assignment_consistent(&graph, &assignment));
        assert_eq!(assignment.to_values(), Some(vec![2, 1, 3, 1]));
    }

    #[test]
    fn unconstrained_graph_takes_first_domain_values() {
        let graph = ConstraintGraph::new(vec![vec![9, 1], vec![3, 4]], vec![]).unwrap();
        let mut assignment = Assignment::new(2);

        let outcome = BackjumpingSearch.solve(&graph, &mut assignment);

        assert!(outcome.found);
        assert_eq!(assignment.to_values(), Some(vec![9, 3]));
    }

    #[test]
    fn terminates_on_an_unsatisfiable_pair() {
        let graph = ConstraintGraph::new(
            vec![vec![1], vec![2]],
            vec![ConstraintDef {
                a: 0,
                b: 1,
                allowed: vec![],
            }],
        )
        .unwrap();
        let mut assignment = Assignment::new(2);

        let outcome = BackjumpingSearch.solve(&graph, &mut assignment);

        assert!(!outcome.found);
        assert!(assignment.is_fully_unassigned());
    }

    #[test]
    fn terminates_when_every_pair_is_in_mutual_conflict() {
        // Three variables whose pairwise constraints permit nothing at
        // all; the exhaustion/re-selection path is exercised repeatedly
        // and must still bottom out.
        let empty = |a, b| ConstraintDef {
            a,
            b,
            allowed: vec![],
        };
        let graph = ConstraintGraph::new(
            vec![vec![1, 2]; 3],
            vec![empty(0, 1), empty(0, 2), empty(1, 2)],
        )
        .unwrap();
        let mut assignment = Assignment::new(3);

        let outcome = BackjumpingSearch.solve(&graph, &mut assignment);

        assert!(!outcome.found);
        assert!(assignment.is_fully_unassigned());
    }

    #[test]
    fn recovers_after_exhausting_a_variables_domain() {
        // Under x0 = 1, x1's whole domain fails the consistency check
        // and the re-selection fallback finds nothing new; the search
        // must unwind to x0 = 2 and succeed.
        let graph = ConstraintGraph::new(
            vec![vec![1, 2], vec![5]],
            vec![ConstraintDef {
                a: 0,
                b: 1,
                allowed: vec![(2, 5)],
            }],
        )
        .unwrap();
        let mut assignment = Assignment::new(2);

        let outcome = BackjumpingSearch.solve(&graph, &mut assignment);

        assert!(outcome.found);
        assert_eq!(assignment.to_values(), Some(vec![2, 5]));
    }
}
