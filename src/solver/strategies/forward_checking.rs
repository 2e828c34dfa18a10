//! Forward checking: the backtracking skeleton with value-level
//! lookahead against already-assigned neighbors.
//!
//! Candidate values that fail the local check are skipped before the
//! recursive call, so on any instance this strategy makes at most as
//! many recursive calls as plain backtracking. Future domains are not
//! shrunk; there is no arc-consistency propagation here.

use crate::solver::assignment::Assignment;
use crate::solver::consistency::{is_assignment_consistent, is_value_consistent};
use crate::solver::graph::ConstraintGraph;
use crate::solver::strategy::{SearchOutcome, SearchStrategy};

pub struct ForwardCheckingSearch;

impl SearchStrategy for ForwardCheckingSearch {
    fn solve(&self, graph: &ConstraintGraph, assignment: &mut Assignment) -> SearchOutcome {
        let mut iterations = 0;
        let found = search(graph, assignment, &mut iterations);
        SearchOutcome { iterations, found }
    }
}

fn search(graph: &ConstraintGraph, assignment: &mut Assignment, iterations: &mut u64) -> bool {
    if assignment.is_complete() {
        return is_assignment_consistent(graph, assignment);
    }

    let Some(variable) = assignment.first_unassigned() else {
        return is_assignment_consistent(graph, assignment);
    };

    for &value in graph.domain(variable) {
        if !is_value_consistent(graph, variable, value, assignment) {
            continue;
        }
        assignment.assign(variable, value);
        *iterations += 1;
        if search(graph, assignment, iterations) {
            return true;
        }
        assignment.unassign(variable);
    }

    false
}
