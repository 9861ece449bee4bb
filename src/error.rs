//! Error types for guarded connection attempts.
//!
//! The primitive connection API stays boolean: an illegal attempt is a normal
//! outcome the caller may ignore, retry with force, or surface. This error
//! type is what [`WidgetTree::try_connect`](crate::widget::WidgetTree::try_connect)
//! returns when the caller wants the reason spelled out.

use std::fmt;

/// Why a guarded connection attempt was refused.
///
/// `Display` and `std::error::Error` are implemented by hand because the
/// `thiserror` derive treats any field named `source` as the error's cause,
/// and these `source` fields are plain anchor names, not nested errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The target anchor belongs to the source's own widget.
    SelfConnection { source: String },

    /// Linking would close a cycle in the same-dimension constraint chain.
    WouldCycle { source: String, target: String },

    /// The target widget is neither the owner's parent nor a sibling.
    OutOfScope { source: String, candidate: String },

    /// The anchor kinds are not connectable per the validity rules.
    IncompatibleKinds { source: String, target: String },
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfConnection { source } => {
                write!(f, "anchor '{source}' cannot target its own widget")
            }
            Self::WouldCycle { source, target } => {
                write!(f, "connecting '{source}' to '{target}' would create a cycle")
            }
            Self::OutOfScope { source, candidate } => {
                write!(f, "widget '{candidate}' is out of scope for anchor '{source}'")
            }
            Self::IncompatibleKinds { source, target } => {
                write!(f, "anchor '{source}' cannot connect to '{target}'")
            }
        }
    }
}

impl std::error::Error for ConnectionError {}

impl ConnectionError {
    pub fn self_connection(source: impl Into<String>) -> Self {
        Self::SelfConnection {
            source: source.into(),
        }
    }

    pub fn would_cycle(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::WouldCycle {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn out_of_scope(source: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self::OutOfScope {
            source: source.into(),
            candidate: candidate.into(),
        }
    }

    pub fn incompatible(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::IncompatibleKinds {
            source: source.into(),
            target: target.into(),
        }
    }
}
