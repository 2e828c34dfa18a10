use crate::solver::graph::{Value, VariableId};

/// The single mutable structure a search owns: one optional value slot
/// per variable, `None` meaning unassigned.
///
/// Strategies mutate it in place (set on entering a branch, unset on
/// every failing exit path) rather than copying it per branch, so at
/// most one `Assignment` is alive per solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    slots: Vec<Option<Value>>,
}

impl Assignment {
    pub fn new(num_variables: usize) -> Self {
        Self {
            slots: vec![None; num_variables],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn value(&self, variable: VariableId) -> Option<Value> {
        self.slots[variable]
    }

    pub fn assign(&mut self, variable: VariableId, value: Value) {
        self.slots[variable] = Some(value);
    }

    pub fn unassign(&mut self, variable: VariableId) {
        self.slots[variable] = None;
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    pub fn is_fully_unassigned(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// First unassigned variable in declaration order.
    pub fn first_unassigned(&self) -> Option<VariableId> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    /// First unassigned variable in declaration order, skipping
    /// `excluded` if given.
    pub fn first_unassigned_except(&self, excluded: Option<VariableId>) -> Option<VariableId> {
        self.slots
            .iter()
            .enumerate()
            .find(|&(variable, slot)| slot.is_none() && Some(variable) != excluded)
            .map(|(variable, _)| variable)
    }

    /// Snapshot of a complete assignment; `None` while any slot is
    /// unassigned.
    pub fn to_values(&self) -> Option<Vec<Value>> {
        self.slots.iter().copied().collect()
    }
}
