//! The consistency checks shared by every search strategy.
//!
//! All three are pure functions over a graph and an assignment, at three
//! granularities: the whole assignment, one candidate value against its
//! already-assigned neighbors, and the single link between two
//! variables. Constraints with an unassigned endpoint are vacuously
//! satisfied throughout.

use crate::solver::assignment::Assignment;
use crate::solver::graph::{ConstraintGraph, Value, VariableId};

/// Whether every constraint with both endpoints assigned contains the
/// formed pair.
pub fn is_assignment_consistent(graph: &ConstraintGraph, assignment: &Assignment) -> bool {
    graph.constraints().all(|(a, b, allowed)| {
        match (assignment.value(a), assignment.value(b)) {
            (Some(va), Some(vb)) => allowed.contains(&(va, vb)),
            _ => true,
        }
    })
}

/// Whether `candidate` for `variable` is compatible with every
/// already-assigned neighbor. Used to prune a value before committing
/// it, without a recursive call.
pub fn is_value_consistent(
    graph: &ConstraintGraph,
    variable: VariableId,
    candidate: Value,
    assignment: &Assignment,
) -> bool {
    graph.neighbors(variable).iter().all(|&other| {
        match assignment.value(other) {
            Some(value) => graph.allows(variable, other, candidate, value),
            None => true,
        }
    })
}

/// Whether the single constraint (if any) directly linking `variable`
/// and `predecessor` is satisfied by their current values. Vacuously
/// true when no such constraint exists or either side is unassigned.
pub fn is_link_consistent(
    graph: &ConstraintGraph,
    variable: VariableId,
    predecessor: VariableId,
    assignment: &Assignment,
) -> bool {
    if graph.constraint_between(variable, predecessor).is_none() {
        return true;
    }
    match (assignment.value(variable), assignment.value(predecessor)) {
        (Some(value), Some(other)) => graph.allows(variable, predecessor, value, other),
        _ => true,
    }
}
