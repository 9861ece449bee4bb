//! Widget arena and the graph-level anchor operations.
//!
//! All widgets live in a [`WidgetTree`]; anchors reference their targets by
//! `(WidgetId, AnchorKind)` so the arena keeps ownership of a graph that may
//! otherwise be cyclic. The tree hosts every operation that needs to see both
//! endpoints of a connection: validity checking, the cycle/scope guard,
//! effective-margin resolution, and the connect state transitions themselves.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::anchor::{Anchor, AnchorRef};
use crate::error::ConnectionError;
use crate::kind::{AnchorKind, ConnectionCreator, Strength, ANCHOR_KINDS};

/// Stable index of a widget within its [`WidgetTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub(crate) usize);

/// Widget visibility. `Gone` widgets collapse: they contribute no margin and
/// trigger the gone-margin substitution on anchors connected to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Visible,
    Invisible,
    Gone,
}

/// Widget role. Guidelines are the only role the connection validator treats
/// specially: side anchors may target a guideline's center-line anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetRole {
    Plain,
    Guideline,
}

/// One layout widget: parent link, visibility, capabilities, and its eight
/// anchors in fixed order.
#[derive(Debug, Clone)]
pub struct Widget {
    debug_name: String,
    parent: Option<WidgetId>,
    visibility: Visibility,
    role: WidgetRole,
    has_baseline: bool,
    anchors: [Anchor; 8],
}

impl Widget {
    fn new(id: WidgetId, debug_name: String, parent: Option<WidgetId>, role: WidgetRole) -> Self {
        Self {
            debug_name,
            parent,
            visibility: Visibility::Visible,
            role,
            has_baseline: false,
            anchors: ANCHOR_KINDS.map(|kind| Anchor::new(id, kind)),
        }
    }

    pub fn debug_name(&self) -> &str {
        &self.debug_name
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn role(&self) -> WidgetRole {
        self.role
    }

    pub fn is_guideline(&self) -> bool {
        self.role == WidgetRole::Guideline
    }

    /// Whether this widget can supply a baseline. Every widget allocates a
    /// baseline anchor; this flag gates whether the validator lets it be used.
    pub fn has_baseline(&self) -> bool {
        self.has_baseline
    }

    pub fn set_has_baseline(&mut self, has_baseline: bool) {
        self.has_baseline = has_baseline;
    }

    /// The widget's eight anchors in slot order.
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// The anchor of the given kind. Panics for `AnchorKind::None`.
    pub fn anchor(&self, kind: AnchorKind) -> &Anchor {
        &self.anchors[kind.slot()]
    }

    pub fn anchor_mut(&mut self, kind: AnchorKind) -> &mut Anchor {
        &mut self.anchors[kind.slot()]
    }

    /// Reset all anchors to their default, disconnected state for reuse in a
    /// fresh layout pass.
    pub fn reset_anchors(&mut self) {
        for anchor in &mut self.anchors {
            anchor.reset();
        }
    }
}

/// Arena owning every widget of one layout. Widgets are added, never removed
/// or reparented; `WidgetId`s stay valid for the life of the tree.
///
/// Single-threaded by design: one layout-building pass mutates the tree at a
/// time, and callers serialize access if several threads could reach it.
#[derive(Debug, Clone, Default)]
pub struct WidgetTree {
    widgets: Vec<Widget>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a widget. `parent` is `None` for roots.
    pub fn add_widget(&mut self, debug_name: impl Into<String>, parent: Option<WidgetId>) -> WidgetId {
        self.add_with_role(debug_name, parent, WidgetRole::Plain)
    }

    /// Add a guideline widget.
    pub fn add_guideline(
        &mut self,
        debug_name: impl Into<String>,
        parent: Option<WidgetId>,
    ) -> WidgetId {
        self.add_with_role(debug_name, parent, WidgetRole::Guideline)
    }

    fn add_with_role(
        &mut self,
        debug_name: impl Into<String>,
        parent: Option<WidgetId>,
        role: WidgetRole,
    ) -> WidgetId {
        let id = WidgetId(self.widgets.len());
        self.widgets
            .push(Widget::new(id, debug_name.into(), parent, role));
        id
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn widget(&self, id: WidgetId) -> &Widget {
        &self.widgets[id.0]
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> &mut Widget {
        &mut self.widgets[id.0]
    }

    pub fn widget_ids(&self) -> impl Iterator<Item = WidgetId> {
        (0..self.widgets.len()).map(WidgetId)
    }

    pub fn anchor(&self, anchor: AnchorRef) -> &Anchor {
        self.widget(anchor.widget).anchor(anchor.kind)
    }

    pub fn anchor_mut(&mut self, anchor: AnchorRef) -> &mut Anchor {
        self.widget_mut(anchor.widget).anchor_mut(anchor.kind)
    }

    /// Diagnostic name of an anchor, `"<widget debug name>:<KIND>"`.
    pub fn anchor_name(&self, anchor: AnchorRef) -> String {
        format!("{}:{}", self.widget(anchor.widget).debug_name(), anchor.kind)
    }

    /// The owner's opposing side anchor, for side anchors.
    pub fn opposite_anchor(&self, anchor: AnchorRef) -> Option<AnchorRef> {
        anchor
            .kind
            .opposite()
            .map(|kind| AnchorRef::new(anchor.widget, kind))
    }

    /// Whether a connection from `source` to `target` is legal, by anchor
    /// kind and by the special widget roles involved. Pure; mutates nothing.
    ///
    /// Same-kind links are always legal except baseline-to-baseline, which
    /// additionally requires both owners to report a baseline. Cross-kind
    /// links are legal per axis: sides target sides of the same axis (plus a
    /// guideline's center line), `Center` targets anything that is not a
    /// baseline or center line, and `Baseline`/`CenterX`/`CenterY`/`None`
    /// never source a cross-kind link.
    pub fn is_valid_connection(&self, source: AnchorRef, target: AnchorRef) -> bool {
        let source_kind = source.kind;
        let target_kind = target.kind;

        if source_kind == target_kind {
            if source_kind == AnchorKind::Baseline {
                return self.widget(source.widget).has_baseline()
                    && self.widget(target.widget).has_baseline();
            }
            return true;
        }

        match source_kind {
            AnchorKind::Center => !matches!(
                target_kind,
                AnchorKind::Baseline | AnchorKind::CenterX | AnchorKind::CenterY
            ),
            AnchorKind::Left | AnchorKind::Right => {
                let side_compatible = matches!(target_kind, AnchorKind::Left | AnchorKind::Right);
                if self.widget(target.widget).is_guideline() {
                    side_compatible || target_kind == AnchorKind::CenterX
                } else {
                    side_compatible
                }
            }
            AnchorKind::Top | AnchorKind::Bottom => {
                let side_compatible = matches!(target_kind, AnchorKind::Top | AnchorKind::Bottom);
                if self.widget(target.widget).is_guideline() {
                    side_compatible || target_kind == AnchorKind::CenterY
                } else {
                    side_compatible
                }
            }
            AnchorKind::Baseline | AnchorKind::CenterX | AnchorKind::CenterY | AnchorKind::None => {
                false
            }
        }
    }

    /// Connect `source` to `target` with default attributes: gone-margin
    /// unset, strength `Strong`, creator `User`, no force.
    pub fn connect(&mut self, source: AnchorRef, target: Option<AnchorRef>, margin: i32) -> bool {
        self.connect_with(
            source,
            target,
            margin,
            None,
            Strength::Strong,
            ConnectionCreator::User,
            false,
        )
    }

    /// As [`connect`](Self::connect) with an explicit creator tag.
    pub fn connect_for(
        &mut self,
        source: AnchorRef,
        target: Option<AnchorRef>,
        margin: i32,
        creator: ConnectionCreator,
    ) -> bool {
        self.connect_with(source, target, margin, None, Strength::Strong, creator, false)
    }

    /// Full connection operation.
    ///
    /// `target == None` disconnects and always succeeds, leaving margin 0,
    /// gone-margin unset, strength `None`, creator `AutoCreated`. A target on
    /// the source's own widget is refused even under `force`. Otherwise the
    /// validator decides, unless `force` overrides it. Returns false with no
    /// state change on refusal.
    ///
    /// The cycle/scope guard is a separate concern: callers that want it run
    /// [`is_connection_allowed`](Self::is_connection_allowed) first, or use
    /// [`try_connect`](Self::try_connect) which composes both.
    pub fn connect_with(
        &mut self,
        source: AnchorRef,
        target: Option<AnchorRef>,
        margin: i32,
        gone_margin: Option<i32>,
        strength: Strength,
        creator: ConnectionCreator,
        force: bool,
    ) -> bool {
        let Some(target) = target else {
            self.anchor_mut(source).clear_connection();
            return true;
        };
        if target.widget == source.widget {
            return false;
        }
        if !force && !self.is_valid_connection(source, target) {
            return false;
        }
        self.anchor_mut(source)
            .set_connection(target, margin, gone_margin, strength, creator);
        true
    }

    /// The margin a connection contributes to layout, accounting for
    /// collapsed visibility.
    ///
    /// A `Gone` owner contributes nothing, unconditionally. Otherwise, a set
    /// gone-margin substitutes for the stored margin when the connected
    /// target's owner is `Gone`.
    pub fn effective_margin(&self, anchor: AnchorRef) -> i32 {
        if self.widget(anchor.widget).visibility() == Visibility::Gone {
            return 0;
        }
        let state = self.anchor(anchor);
        if let (Some(gone_margin), Some(target)) = (state.gone_margin(), state.target()) {
            if self.widget(target.widget).visibility() == Visibility::Gone {
                return gone_margin;
            }
        }
        state.margin()
    }

    /// Whether a new connection from `source` to any anchor of `candidate`
    /// may be made at all, irrespective of anchor-kind validity.
    ///
    /// Refused when the dimension-compatible connection chain starting at
    /// `candidate` already reaches the source's owner (the link would close a
    /// cycle), or when `candidate` is neither the owner's parent nor a
    /// sibling under the same parent. Must run before
    /// [`connect_with`](Self::connect_with) mutates anything.
    pub fn is_connection_allowed(&self, source: AnchorRef, candidate: WidgetId) -> bool {
        let mut visited = HashSet::new();
        if self.reaches_owner(source, candidate, &mut visited) {
            return false;
        }
        self.is_in_scope(source, candidate)
    }

    fn is_in_scope(&self, source: AnchorRef, candidate: WidgetId) -> bool {
        let owner_parent = self.widget(source.widget).parent();
        owner_parent == Some(candidate) || self.widget(candidate).parent() == owner_parent
    }

    /// Depth-first search over connected anchors in `source.kind`'s dimension
    /// family, starting at `from`. True when the chain reaches the source's
    /// owner. Each widget is visited at most once, so the walk terminates on
    /// any finite tree.
    fn reaches_owner(
        &self,
        source: AnchorRef,
        from: WidgetId,
        visited: &mut HashSet<WidgetId>,
    ) -> bool {
        if !visited.insert(from) {
            return false;
        }
        if from == source.widget {
            return true;
        }
        for anchor in self.widget(from).anchors() {
            if !anchor.kind().is_similar_dimension(source.kind) {
                continue;
            }
            if let Some(target) = anchor.target() {
                if self.reaches_owner(source, target.widget, visited) {
                    return true;
                }
            }
        }
        false
    }

    /// Guarded connection: runs the scope/cycle guard and the validator, then
    /// connects with default attributes. Reports the reason for a refusal
    /// instead of a bare false.
    pub fn try_connect(
        &mut self,
        source: AnchorRef,
        target: AnchorRef,
        margin: i32,
    ) -> Result<(), ConnectionError> {
        if target.widget == source.widget {
            return Err(ConnectionError::self_connection(self.anchor_name(source)));
        }
        let mut visited = HashSet::new();
        if self.reaches_owner(source, target.widget, &mut visited) {
            return Err(ConnectionError::would_cycle(
                self.anchor_name(source),
                self.anchor_name(target),
            ));
        }
        if !self.is_in_scope(source, target.widget) {
            return Err(ConnectionError::out_of_scope(
                self.anchor_name(source),
                self.widget(target.widget).debug_name(),
            ));
        }
        if !self.is_valid_connection(source, target) {
            return Err(ConnectionError::incompatible(
                self.anchor_name(source),
                self.anchor_name(target),
            ));
        }
        self.connect(source, Some(target), margin);
        Ok(())
    }

    /// Reset every anchor in the tree for a fresh layout pass.
    pub fn reset_anchors(&mut self) {
        for widget in &mut self.widgets {
            widget.reset_anchors();
        }
    }

    /// Plain-text dump of the tree and its connections, one line per widget
    /// and one per connected anchor. Used by tests and debugging.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (index, widget) in self.widgets.iter().enumerate() {
            let parent = match widget.parent() {
                Some(id) => self.widget(id).debug_name().to_string(),
                None => "-".to_string(),
            };
            let _ = writeln!(
                out,
                "widget {} parent={} vis={:?} role={:?}",
                widget.debug_name(),
                parent,
                widget.visibility(),
                widget.role(),
            );
            for anchor in widget.anchors() {
                if let Some(target) = anchor.target() {
                    let _ = writeln!(
                        out,
                        "{} -> {} margin={} strength={:?}",
                        self.anchor_name(AnchorRef::new(WidgetId(index), anchor.kind())),
                        self.anchor_name(target),
                        anchor.margin(),
                        anchor.strength(),
                    );
                }
            }
        }
        out
    }
}
