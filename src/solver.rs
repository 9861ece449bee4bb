//! Handoff to the numeric constraint solver.
//!
//! The solver itself is an external collaborator. This module gives it the
//! two things it needs: a per-solve cache of kasuari variables keyed by
//! anchor, and one [`ConstraintEdge`] per connected anchor carrying the
//! resolved margin, strength, and connection-type hint.

use std::collections::HashMap;

use kasuari::Variable;

use crate::anchor::AnchorRef;
use crate::kind::{ConnectionType, Strength};
use crate::widget::WidgetTree;

/// Per-solve cache of solver variables, one per anchor, lazily created.
///
/// Scoped to a single solve pass. [`reset`](Self::reset) invalidates every
/// handle between passes; it touches nothing in the connection graph itself
/// and is idempotent. The cache is never shared across concurrent solves.
#[derive(Debug, Default)]
pub struct VariableCache {
    variables: HashMap<AnchorRef, Variable>,
}

impl VariableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The solver variable for `anchor`, created on first request and stable
    /// for the rest of the pass.
    pub fn variable(&mut self, anchor: AnchorRef) -> Variable {
        *self.variables.entry(anchor).or_insert_with(Variable::new)
    }

    /// The variable for `anchor` if one was already created this pass.
    pub fn get(&self, anchor: AnchorRef) -> Option<Variable> {
        self.variables.get(&anchor).copied()
    }

    /// Invalidate all handles for the next solve pass.
    pub fn reset(&mut self) {
        self.variables.clear();
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// One edge of the constraint graph, ready for the solver: a connected
/// anchor, its target, and the connection attributes the solver consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintEdge {
    pub source: AnchorRef,
    pub target: AnchorRef,
    /// Margin after visibility resolution, not the raw stored value.
    pub margin: i32,
    pub strength: Strength,
    pub connection_type: ConnectionType,
}

impl WidgetTree {
    /// Emit one constraint edge per connected anchor, in widget then anchor
    /// slot order. Margins are the effective values under current visibility.
    pub fn constraint_edges(&self) -> Vec<ConstraintEdge> {
        let mut edges = Vec::new();
        for id in self.widget_ids() {
            for anchor in self.widget(id).anchors() {
                let Some(target) = anchor.target() else {
                    continue;
                };
                let source = AnchorRef::new(id, anchor.kind());
                edges.push(ConstraintEdge {
                    source,
                    target,
                    margin: self.effective_margin(source),
                    strength: anchor.strength(),
                    connection_type: anchor.connection_type(),
                });
            }
        }
        edges
    }
}
