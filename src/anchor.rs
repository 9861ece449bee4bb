//! Per-widget anchor state: the connection target, margins, strength, and
//! provenance carried by one attachment point.
//!
//! Anchors never own their targets. A target is an [`AnchorRef`] — a
//! `(WidgetId, AnchorKind)` pair resolved through the owning
//! [`WidgetTree`](crate::widget::WidgetTree) — because the connection graph
//! is cyclic-capable by construction and ownership must stay with the arena.

use serde::{Deserialize, Serialize};

use crate::kind::{AnchorKind, ConnectionCreator, ConnectionType, Strength};
use crate::widget::WidgetId;

/// Non-owning reference to one anchor of one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorRef {
    pub widget: WidgetId,
    pub kind: AnchorKind,
}

impl AnchorRef {
    pub fn new(widget: WidgetId, kind: AnchorKind) -> Self {
        Self { widget, kind }
    }
}

/// One directional attachment point of a widget.
///
/// The owner and kind are fixed at construction; everything else is
/// connection state that [`reset`](Anchor::reset) returns to its defaults
/// between layout passes. Anchors are created once per widget and are never
/// destroyed or reparented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    owner: WidgetId,
    kind: AnchorKind,
    target: Option<AnchorRef>,
    margin: i32,
    gone_margin: Option<i32>,
    strength: Strength,
    connection_type: ConnectionType,
    creator: ConnectionCreator,
}

impl Anchor {
    pub(crate) fn new(owner: WidgetId, kind: AnchorKind) -> Self {
        Self {
            owner,
            kind,
            target: None,
            margin: 0,
            gone_margin: None,
            strength: Strength::None,
            connection_type: ConnectionType::Relaxed,
            creator: ConnectionCreator::User,
        }
    }

    /// The widget this anchor belongs to.
    pub fn owner(&self) -> WidgetId {
        self.owner
    }

    /// The anchor's kind. Immutable.
    pub fn kind(&self) -> AnchorKind {
        self.kind
    }

    /// The connected target, if any.
    pub fn target(&self) -> Option<AnchorRef> {
        self.target
    }

    pub fn is_connected(&self) -> bool {
        self.target.is_some()
    }

    /// The stored margin. Callers that need visibility-aware resolution use
    /// [`WidgetTree::effective_margin`](crate::widget::WidgetTree::effective_margin).
    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// The alternate margin applied when the target's owner is `Gone`, or
    /// `None` when unset.
    pub fn gone_margin(&self) -> Option<i32> {
        self.gone_margin
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    pub fn set_connection_type(&mut self, connection_type: ConnectionType) {
        self.connection_type = connection_type;
    }

    pub fn creator(&self) -> ConnectionCreator {
        self.creator
    }

    pub fn set_creator(&mut self, creator: ConnectionCreator) {
        self.creator = creator;
    }

    /// Set the margin, clamped to zero. No-op while disconnected: connection
    /// attributes are meaningless without a target.
    pub fn set_margin(&mut self, margin: i32) {
        if self.is_connected() {
            self.margin = margin.max(0);
        }
    }

    /// Set the gone-margin override. No-op while disconnected.
    pub fn set_gone_margin(&mut self, margin: i32) {
        if self.is_connected() {
            self.gone_margin = Some(margin);
        }
    }

    /// Set the connection strength. No-op while disconnected.
    pub fn set_strength(&mut self, strength: Strength) {
        if self.is_connected() {
            self.strength = strength;
        }
    }

    /// Return the anchor to its default, disconnected state for reuse across
    /// layout passes.
    ///
    /// Leaves strength `Strong`, unlike a disconnect via
    /// [`clear_connection`](Self::clear_connection) which leaves `None`. The
    /// asymmetry is deliberate and both paths are kept distinct.
    pub fn reset(&mut self) {
        self.target = None;
        self.margin = 0;
        self.gone_margin = None;
        self.strength = Strength::Strong;
        self.creator = ConnectionCreator::User;
        self.connection_type = ConnectionType::Relaxed;
    }

    /// Transition to `Disconnected`: no target, margin 0, gone-margin unset,
    /// strength `None`, creator `AutoCreated`.
    pub(crate) fn clear_connection(&mut self) {
        self.target = None;
        self.margin = 0;
        self.gone_margin = None;
        self.strength = Strength::None;
        self.creator = ConnectionCreator::AutoCreated;
    }

    /// Transition to `Connected`. Legality is the caller's concern; the tree
    /// runs the validator before getting here.
    pub(crate) fn set_connection(
        &mut self,
        target: AnchorRef,
        margin: i32,
        gone_margin: Option<i32>,
        strength: Strength,
        creator: ConnectionCreator,
    ) {
        self.target = Some(target);
        self.margin = margin.max(0);
        self.gone_margin = gone_margin;
        self.strength = strength;
        self.creator = creator;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn anchor() -> Anchor {
        Anchor::new(WidgetId(0), AnchorKind::Left)
    }

    fn target() -> AnchorRef {
        AnchorRef::new(WidgetId(1), AnchorKind::Right)
    }

    #[test]
    fn test_new_anchor_is_disconnected() {
        let a = anchor();
        assert!(!a.is_connected());
        assert_eq!(a.target(), None);
        assert_eq!(a.margin(), 0);
        assert_eq!(a.gone_margin(), None);
        assert_eq!(a.strength(), Strength::None);
        assert_eq!(a.connection_type(), ConnectionType::Relaxed);
        assert_eq!(a.creator(), ConnectionCreator::User);
    }

    #[test]
    fn test_setters_are_noops_while_disconnected() {
        let mut a = anchor();
        a.set_margin(10);
        a.set_gone_margin(4);
        a.set_strength(Strength::Weak);
        assert_eq!(a.margin(), 0);
        assert_eq!(a.gone_margin(), None);
        assert_eq!(a.strength(), Strength::None);
    }

    #[test]
    fn test_setters_apply_while_connected() {
        let mut a = anchor();
        a.set_connection(target(), 8, None, Strength::Strong, ConnectionCreator::User);
        a.set_margin(10);
        a.set_gone_margin(4);
        a.set_strength(Strength::Weak);
        assert_eq!(a.margin(), 10);
        assert_eq!(a.gone_margin(), Some(4));
        assert_eq!(a.strength(), Strength::Weak);
    }

    #[test]
    fn test_set_margin_clamps_negative() {
        let mut a = anchor();
        a.set_connection(target(), 8, None, Strength::Strong, ConnectionCreator::User);
        a.set_margin(-3);
        assert_eq!(a.margin(), 0);
    }

    #[test]
    fn test_set_connection_clamps_negative_margin() {
        let mut a = anchor();
        a.set_connection(target(), -5, None, Strength::Strong, ConnectionCreator::User);
        assert_eq!(a.margin(), 0);
        a.clear_connection();
        a.set_connection(target(), 12, None, Strength::Strong, ConnectionCreator::User);
        assert_eq!(a.margin(), 12);
    }

    #[test]
    fn test_clear_connection_defaults() {
        let mut a = anchor();
        a.set_connection(
            target(),
            8,
            Some(2),
            Strength::Weak,
            ConnectionCreator::ScoutTool,
        );
        a.clear_connection();
        assert!(!a.is_connected());
        assert_eq!(a.margin(), 0);
        assert_eq!(a.gone_margin(), None);
        assert_eq!(a.strength(), Strength::None);
        assert_eq!(a.creator(), ConnectionCreator::AutoCreated);
    }

    #[test]
    fn test_reset_defaults_differ_from_disconnect() {
        let mut a = anchor();
        a.set_connection(
            target(),
            8,
            Some(2),
            Strength::Weak,
            ConnectionCreator::ScoutTool,
        );
        a.set_connection_type(ConnectionType::Strict);
        a.reset();
        assert!(!a.is_connected());
        assert_eq!(a.margin(), 0);
        assert_eq!(a.gone_margin(), None);
        // reset leaves Strong where a plain disconnect leaves None
        assert_eq!(a.strength(), Strength::Strong);
        assert_eq!(a.creator(), ConnectionCreator::User);
        assert_eq!(a.connection_type(), ConnectionType::Relaxed);
    }
}
