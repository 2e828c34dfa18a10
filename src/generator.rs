//! Random binary-CSP instance synthesis.
//!
//! An instance is shaped by two knobs besides its size: *density*, the
//! fraction of the complete constraint graph's edges actually
//! instantiated, and *tightness*, the fraction of value pairs each
//! constraint retains (lower = more restrictive). Generation starts from
//! the complete graph with full allowed sets and thins both, removing
//! uniformly at random.
//!
//! All randomness flows through a caller-supplied [`Rng`], so a seeded
//! ChaCha stream reproduces instances exactly.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigurationError, Result};
use crate::solver::graph::{ConstraintDef, ConstraintGraph, Value};

/// Size and shape knobs for one generated instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub num_variables: usize,
    pub domain_size: usize,
    /// Fraction of possible constraint-graph edges kept, in `[0, 1]`.
    pub density: f64,
    /// Fraction of value pairs each constraint keeps, in `[0, 1]`.
    pub tightness: f64,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("density", self.density), ("tightness", self.tightness)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigurationError::ParameterOutOfRange { name, value }.into());
            }
        }
        Ok(())
    }
}

/// A fully materialized problem description, independent of the solver's
/// internal representation. Serializable, so instances can be dumped to
/// JSON and replayed later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub domains: Vec<Vec<Value>>,
    pub constraints: Vec<ConstraintDef>,
}

impl Instance {
    pub fn into_graph(self) -> Result<ConstraintGraph> {
        ConstraintGraph::new(self.domains, self.constraints)
    }

    /// The inverse of [`Instance::into_graph`], with pairs and allowed
    /// sets sorted so equal graphs produce identical dumps.
    pub fn from_graph(graph: &ConstraintGraph) -> Self {
        let domains = graph
            .variables()
            .map(|variable| graph.domain(variable).to_vec())
            .collect();
        let mut constraints: Vec<ConstraintDef> = graph
            .constraints()
            .map(|(a, b, allowed)| {
                let mut allowed: Vec<_> = allowed.iter().copied().collect();
                allowed.sort_unstable();
                ConstraintDef { a, b, allowed }
            })
            .collect();
        constraints.sort_by_key(|def| (def.a, def.b));
        Self {
            domains,
            constraints,
        }
    }
}

/// Generates a random instance: domains `1..=domain_size` for every
/// variable, then every unordered variable pair constrained and thinned
/// by tightness, then the constraint set thinned by density.
pub fn generate_instance(config: &GeneratorConfig, rng: &mut impl Rng) -> Result<Instance> {
    config.validate()?;

    let domain: Vec<Value> = (1..=config.domain_size as Value).collect();
    let domains = vec![domain.clone(); config.num_variables];

    let mut constraints = Vec::new();
    for a in 0..config.num_variables {
        for b in (a + 1)..config.num_variables {
            let mut allowed: Vec<(Value, Value)> = domain
                .iter()
                .flat_map(|&x| domain.iter().map(move |&y| (x, y)))
                .collect();
            let keep = (allowed.len() as f64 * config.tightness) as usize;
            allowed.shuffle(rng);
            allowed.truncate(keep);
            allowed.sort_unstable();
            constraints.push(ConstraintDef { a, b, allowed });
        }
    }

    let keep = (constraints.len() as f64 * config.density) as usize;
    constraints.shuffle(rng);
    constraints.truncate(keep);
    constraints.sort_by_key(|def| (def.a, def.b));

    debug!(
        num_variables = config.num_variables,
        domain_size = config.domain_size,
        constraints = constraints.len(),
        "generated instance"
    );

    Ok(Instance {
        domains,
        constraints,
    })
}

/// [`generate_instance`] composed with graph construction.
pub fn generate(config: &GeneratorConfig, rng: &mut impl Rng) -> Result<ConstraintGraph> {
    generate_instance(config, rng)?.into_graph()
}
