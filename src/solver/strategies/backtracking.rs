//! Chronological backtracking: depth-first enumeration in declaration
//! and domain order, with the consistency check deferred to the leaves.

use crate::solver::assignment::Assignment;
use crate::solver::consistency::is_assignment_consistent;
use crate::solver::graph::ConstraintGraph;
use crate::solver::strategy::{SearchOutcome, SearchStrategy};

pub struct BacktrackingSearch;

impl SearchStrategy for BacktrackingSearch {
    fn solve(&self, graph: &ConstraintGraph, assignment: &mut Assignment) -> SearchOutcome {
        let mut iterations = 0;
        let found = search(graph, assignment, &mut iterations);
        SearchOutcome { iterations, found }
    }
}

fn search(graph: &ConstraintGraph, assignment: &mut Assignment, iterations: &mut u64) -> bool {
    // Consistency is checked once, at the leaf; a complete but invalid
    // assignment makes this branch a dead end.
    if assignment.is_complete() {
        return is_assignment_consistent(graph, assignment);
    }

    let Some(variable) = assignment.first_unassigned() else {
        // Unreachable while is_complete() is false; kept as the graceful
        // fallback.
        return is_assignment_consistent(graph, assignment);
    };

    for &value in graph.domain(variable) {
        assignment.assign(variable, value);
        *iterations += 1;
        if search(graph, assignment, iterations) {
            return true;
        }
        assignment.unassign(variable);
    }

    // Every value failed: chronological backtrack one level up.
    false
}
