use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::solver::assignment::Assignment;
use crate::solver::graph::ConstraintGraph;
use crate::solver::strategies::{
    backjumping::BackjumpingSearch, backtracking::BacktrackingSearch,
    forward_checking::ForwardCheckingSearch,
};

/// What a single search run reports back: how many recursive calls it
/// made (the top-level call is not counted) and whether it found a
/// complete assignment. The counter exists for benchmarking only; it
/// plays no part in correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub iterations: u64,
    pub found: bool,
}

/// A depth-first assignment search.
///
/// Implementations receive a read-only graph and an all-unassigned
/// [`Assignment`] they mutate in place. On a `found` outcome the
/// assignment is complete and consistent; on failure it is returned
/// fully unassigned.
pub trait SearchStrategy {
    fn solve(&self, graph: &ConstraintGraph, assignment: &mut Assignment) -> SearchOutcome;
}

/// The closed set of strategies the engine can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Backtracking,
    ForwardChecking,
    Backjumping,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Backtracking,
        StrategyKind::ForwardChecking,
        StrategyKind::Backjumping,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Backtracking => "backtracking",
            StrategyKind::ForwardChecking => "forward_checking",
            StrategyKind::Backjumping => "backjumping",
        }
    }

    pub fn strategy(self) -> &'static dyn SearchStrategy {
        match self {
            StrategyKind::Backtracking => &BacktrackingSearch,
            StrategyKind::ForwardChecking => &ForwardCheckingSearch,
            StrategyKind::Backjumping => &BackjumpingSearch,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "backtracking" => Ok(StrategyKind::Backtracking),
            "forward_checking" => Ok(StrategyKind::ForwardChecking),
            "backjumping" => Ok(StrategyKind::Backjumping),
            other => Err(Error::UnknownStrategy {
                name: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StrategyKind;
    use crate::error::Error;

    #[test]
    fn names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_names_are_a_dispatch_error() {
        let err = "simulated_annealing".parse::<StrategyKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy { name } if name == "simulated_annealing"));
    }
}
