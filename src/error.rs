use crate::solver::graph::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A problem description that cannot be searched.
///
/// Raised while building a [`ConstraintGraph`] or validating generator
/// parameters, never mid-search: by the time a strategy runs, the graph
/// is known to be well-formed.
///
/// [`ConstraintGraph`]: crate::solver::graph::ConstraintGraph
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("variable {variable} has an empty domain")]
    EmptyDomain { variable: VariableId },

    #[error("constraint endpoint {variable} is not a declared variable (graph has {num_variables})")]
    UndeclaredVariable {
        variable: VariableId,
        num_variables: usize,
    },

    #[error("constraint links variable {variable} to itself")]
    SelfConstraint { variable: VariableId },

    #[error("duplicate constraint between variables {a} and {b}")]
    DuplicateConstraint { a: VariableId, b: VariableId },

    #[error("{name} must lie in [0, 1], got {value}")]
    ParameterOutOfRange { name: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("unknown strategy {name:?}; expected one of: backtracking, forward_checking, backjumping")]
    UnknownStrategy { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
