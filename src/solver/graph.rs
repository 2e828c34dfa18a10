use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// Dense index of a variable, `0..num_variables`.
pub type VariableId = usize;
/// A candidate value in a variable's domain.
pub type Value = i64;

/// The set of value pairs a single binary constraint allows.
pub type AllowedPairs = HashSet<(Value, Value)>;

/// Declarative form of one binary constraint, as supplied to
/// [`ConstraintGraph::new`] and serialized in instance dumps.
///
/// The endpoints may be given in either order; construction canonicalizes
/// them (and inverts the tuples to match).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintDef {
    pub a: VariableId,
    pub b: VariableId,
    pub allowed: Vec<(Value, Value)>,
}

/// An immutable binary-CSP description: one domain per variable plus a
/// table of allowed-pair constraints, stored under one canonical
/// direction per unordered variable pair.
///
/// A `ConstraintGraph` is built once and never mutated by the search; all
/// strategies borrow it read-only.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    domains: Vec<Vec<Value>>,
    constraints: HashMap<(VariableId, VariableId), AllowedPairs>,
    neighbors: Vec<Vec<VariableId>>,
}

impl ConstraintGraph {
    /// Builds a graph from per-variable domains and constraint
    /// definitions.
    ///
    /// Variables are implicit: variable `v` is the index of its domain in
    /// `domains`. Constraint endpoints given in non-canonical order are
    /// swapped, with their allowed tuples inverted to match.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if any domain is empty, a
    /// constraint references an undeclared variable or links a variable
    /// to itself, or two definitions cover the same unordered pair.
    pub fn new(domains: Vec<Vec<Value>>, constraints: Vec<ConstraintDef>) -> Result<Self> {
        let num_variables = domains.len();
        for (variable, domain) in domains.iter().enumerate() {
            if domain.is_empty() {
                return Err(ConfigurationError::EmptyDomain { variable }.into());
            }
        }

        let mut table = HashMap::new();
        let mut neighbors = vec![Vec::new(); num_variables];
        for def in constraints {
            for endpoint in [def.a, def.b] {
                if endpoint >= num_variables {
                    return Err(ConfigurationError::UndeclaredVariable {
                        variable: endpoint,
                        num_variables,
                    }
                    .into());
                }
            }
            if def.a == def.b {
                return Err(ConfigurationError::SelfConstraint { variable: def.a }.into());
            }

            let ((lo, hi), swapped) = Self::canonical_pair(def.a, def.b);
            let allowed: AllowedPairs = if swapped {
                def.allowed.iter().map(|&(x, y)| (y, x)).collect()
            } else {
                def.allowed.into_iter().collect()
            };
            if table.insert((lo, hi), allowed).is_some() {
                return Err(ConfigurationError::DuplicateConstraint { a: lo, b: hi }.into());
            }
            neighbors[lo].push(hi);
            neighbors[hi].push(lo);
        }

        Ok(Self {
            domains,
            constraints: table,
            neighbors,
        })
    }

    /// Maps an unordered variable pair to its canonical storage order.
    ///
    /// Returns the ordered pair and whether the caller's argument order
    /// was swapped; when it was, value tuples must be inverted before a
    /// membership test. Every lookup in the crate goes through this.
    pub fn canonical_pair(a: VariableId, b: VariableId) -> ((VariableId, VariableId), bool) {
        if a <= b {
            ((a, b), false)
        } else {
            ((b, a), true)
        }
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    /// Variables in declaration order, which is also the search's
    /// selection order.
    pub fn variables(&self) -> std::ops::Range<VariableId> {
        0..self.domains.len()
    }

    /// The domain of `variable`; iteration order is try-order.
    pub fn domain(&self, variable: VariableId) -> &[Value] {
        &self.domains[variable]
    }

    /// Variables sharing a constraint with `variable`.
    pub fn neighbors(&self, variable: VariableId) -> &[VariableId] {
        &self.neighbors[variable]
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// All constraints in canonical direction, in no particular order.
    pub fn constraints(
        &self,
    ) -> impl Iterator<Item = (VariableId, VariableId, &AllowedPairs)> + '_ {
        self.constraints
            .iter()
            .map(|(&(a, b), allowed)| (a, b, allowed))
    }

    /// Looks up the constraint covering the unordered pair `{a, b}`.
    ///
    /// The flag reports whether the caller's argument order was swapped
    /// relative to canonical storage; when `true`, a pair `(va, vb)` in
    /// the caller's order must be tested as `(vb, va)`.
    pub fn constraint_between(
        &self,
        a: VariableId,
        b: VariableId,
    ) -> Option<(&AllowedPairs, bool)> {
        let (key, swapped) = Self::canonical_pair(a, b);
        self.constraints.get(&key).map(|allowed| (allowed, swapped))
    }

    /// Whether assigning `va` to `a` and `vb` to `b` is permitted by the
    /// constraint between them, if one exists. Unconstrained pairs are
    /// always permitted.
    pub fn allows(&self, a: VariableId, b: VariableId, va: Value, vb: Value) -> bool {
        match self.constraint_between(a, b) {
            None => true,
            Some((allowed, false)) => allowed.contains(&(va, vb)),
            Some((allowed, true)) => allowed.contains(&(vb, va)),
        }
    }
}

impl fmt::Display for ConstraintGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "variables: {}", self.num_variables())?;
        for variable in self.variables() {
            writeln!(f, "  x{variable}: {:?}", self.domain(variable))?;
        }
        writeln!(f, "constraints: {}", self.constraint_count())?;
        let mut entries: Vec<_> = self.constraints().collect();
        entries.sort_by_key(|&(a, b, _)| (a, b));
        for (a, b, allowed) in entries {
            let mut pairs: Vec<_> = allowed.iter().copied().collect();
            pairs.sort_unstable();
            writeln!(f, "  (x{a}, x{b}): {pairs:?}")?;
        }
        Ok(())
    }
}
