//! Explico is a small laboratory for comparing exhaustive search
//! strategies on binary constraint satisfaction problems (CSPs).
//!
//! Three classical depth-first strategies (chronological backtracking,
//! forward checking and a simplified backjumping) run against the same
//! immutable problem description and report their cost in wall-clock
//! time and recursive-call count, so their pruning behaviour can be
//! compared on randomly generated instances.
//!
//! # Core Concepts
//!
//! - **[`ConstraintGraph`]**: the immutable problem description, one
//!   domain per variable plus allowed-pair sets for constrained variable
//!   pairs.
//! - **[`SearchStrategy`]**: the trait the three strategies implement;
//!   each mutates a single shared [`Assignment`] in place during its
//!   search.
//! - **[`SearchEngine`]**: the facade that dispatches to a strategy by
//!   name, times the run and retains the solution for a validity check.
//! - **[`generator`]** and **[`sweep`]**: random instance synthesis
//!   (density/tightness knobs) and the parameter-grid benchmark driver.
//!
//! # Example: solving one instance
//!
//! ```
//! use explico::solver::engine::SearchEngine;
//! use explico::solver::graph::{ConstraintDef, ConstraintGraph};
//!
//! let domains = vec![vec![1, 2, 3]; 3];
//! let constraints = vec![ConstraintDef {
//!     a: 0,
//!     b: 1,
//!     allowed: vec![(2, 1), (2, 3), (3, 2)],
//! }];
//! let graph = ConstraintGraph::new(domains, constraints)?;
//!
//! let mut engine = SearchEngine::new(graph);
//! let report = engine.solve("forward_checking")?;
//!
//! assert_eq!(report.solution, Some(vec![2, 1, 1]));
//! assert!(engine.is_solution_valid());
//! # Ok::<(), explico::error::Error>(())
//! ```
//!
//! [`ConstraintGraph`]: solver::graph::ConstraintGraph
//! [`SearchStrategy`]: solver::strategy::SearchStrategy
//! [`Assignment`]: solver::assignment::Assignment
//! [`SearchEngine`]: solver::engine::SearchEngine

pub mod error;
pub mod generator;
pub mod solver;
pub mod stats;
pub mod sweep;
