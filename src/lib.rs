//! anchor-graph - the anchor-connection core of a constraint layout engine
//!
//! This library models the directed graph of positional anchors (left, right,
//! top, bottom, baseline, centers) between layout widgets: which anchor pairs
//! may legally connect, whether a proposed link would close a constraint
//! cycle, and what margin a link effectively contributes once collapsed
//! (`Gone`) visibility is accounted for. The numeric solving that turns the
//! graph into coordinates is out of scope; [`WidgetTree::constraint_edges`]
//! and [`VariableCache`] are the handoff to it.
//!
//! # Example
//!
//! ```rust
//! use anchor_graph::{AnchorKind, AnchorRef, WidgetTree};
//!
//! let mut tree = WidgetTree::new();
//! let root = tree.add_widget("root", None);
//! let button = tree.add_widget("button", Some(root));
//!
//! let src = AnchorRef::new(button, AnchorKind::Left);
//! let tgt = AnchorRef::new(root, AnchorKind::Left);
//! assert!(tree.is_connection_allowed(src, root));
//! assert!(tree.connect(src, Some(tgt), 16));
//! assert_eq!(tree.effective_margin(src), 16);
//! ```

pub mod anchor;
pub mod error;
pub mod kind;
pub mod solver;
pub mod widget;

pub use anchor::{Anchor, AnchorRef};
pub use error::ConnectionError;
pub use kind::{AnchorKind, ConnectionCreator, ConnectionType, Strength, ANCHOR_KINDS};
pub use solver::{ConstraintEdge, VariableCache};
pub use widget::{Visibility, Widget, WidgetId, WidgetRole, WidgetTree};
