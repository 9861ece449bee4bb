//! Anchor taxonomy: the closed set of anchor kinds and the pure per-kind
//! tables (dimension families, snap pairing, priority scoring) derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of an anchor. Fixed at anchor creation and immutable afterwards.
///
/// `None` is the null kind: it participates in the taxonomy (scoring,
/// compatibility tables) but no widget ever allocates an anchor slot for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorKind {
    None,
    Left,
    Top,
    Right,
    Bottom,
    Baseline,
    Center,
    CenterX,
    CenterY,
}

/// The eight anchor kinds a widget allocates, in slot order.
pub const ANCHOR_KINDS: [AnchorKind; 8] = [
    AnchorKind::Left,
    AnchorKind::Top,
    AnchorKind::Right,
    AnchorKind::Bottom,
    AnchorKind::Baseline,
    AnchorKind::Center,
    AnchorKind::CenterX,
    AnchorKind::CenterY,
];

impl AnchorKind {
    /// Anchor slot index within a widget.
    ///
    /// Panics for `AnchorKind::None`: the null kind owns no slot, and asking
    /// for one is a taxonomy bug in the caller, not a runtime condition.
    pub(crate) fn slot(self) -> usize {
        match self {
            AnchorKind::Left => 0,
            AnchorKind::Top => 1,
            AnchorKind::Right => 2,
            AnchorKind::Bottom => 3,
            AnchorKind::Baseline => 4,
            AnchorKind::Center => 5,
            AnchorKind::CenterX => 6,
            AnchorKind::CenterY => 7,
            AnchorKind::None => panic!("AnchorKind::None owns no anchor slot"),
        }
    }

    /// True for anchors on the vertical axis. `None` is grouped with the
    /// vertical family.
    pub fn is_vertical(self) -> bool {
        match self {
            AnchorKind::Center
            | AnchorKind::Left
            | AnchorKind::Right
            | AnchorKind::CenterX => false,
            AnchorKind::Top
            | AnchorKind::Bottom
            | AnchorKind::Baseline
            | AnchorKind::CenterY
            | AnchorKind::None => true,
        }
    }

    /// True for the four side anchors (`Left`, `Right`, `Top`, `Bottom`).
    pub fn is_side_anchor(self) -> bool {
        matches!(
            self,
            AnchorKind::Left | AnchorKind::Right | AnchorKind::Top | AnchorKind::Bottom
        )
    }

    /// The opposing side anchor, if this kind has one.
    pub fn opposite(self) -> Option<AnchorKind> {
        match self {
            AnchorKind::Left => Some(AnchorKind::Right),
            AnchorKind::Right => Some(AnchorKind::Left),
            AnchorKind::Top => Some(AnchorKind::Bottom),
            AnchorKind::Bottom => Some(AnchorKind::Top),
            _ => None,
        }
    }

    /// Whether a connection between this kind and `other` participates in the
    /// same dimension family, so that both belong to one cycle-detection
    /// traversal. `Center` constrains both axes and pairs with everything
    /// except `Baseline`; `None` pairs with nothing.
    pub fn is_similar_dimension(self, other: AnchorKind) -> bool {
        if self == other {
            return true;
        }
        match self {
            AnchorKind::Center => other != AnchorKind::Baseline,
            AnchorKind::Left | AnchorKind::Right | AnchorKind::CenterX => matches!(
                other,
                AnchorKind::Left | AnchorKind::Right | AnchorKind::CenterX
            ),
            AnchorKind::Top
            | AnchorKind::Bottom
            | AnchorKind::Baseline
            | AnchorKind::CenterY => matches!(
                other,
                AnchorKind::Top | AnchorKind::Bottom | AnchorKind::Baseline | AnchorKind::CenterY
            ),
            AnchorKind::None => false,
        }
    }

    /// Ranking used to pick between candidate anchors when a heuristic has
    /// several choices of equal fit.
    pub fn priority_level(self) -> u8 {
        match self {
            AnchorKind::Center
            | AnchorKind::Left
            | AnchorKind::Right
            | AnchorKind::Top
            | AnchorKind::Bottom => 2,
            AnchorKind::Baseline => 1,
            AnchorKind::CenterX | AnchorKind::CenterY | AnchorKind::None => 0,
        }
    }

    /// Ranking used by snapping/auto-connect heuristics. Deliberately weighted
    /// differently from [`priority_level`](Self::priority_level).
    pub fn snap_priority_level(self) -> u8 {
        match self {
            AnchorKind::Center => 3,
            AnchorKind::Baseline => 2,
            AnchorKind::Left | AnchorKind::Right | AnchorKind::CenterY => 1,
            AnchorKind::Top
            | AnchorKind::Bottom
            | AnchorKind::CenterX
            | AnchorKind::None => 0,
        }
    }

    /// Whether a dragged anchor of this kind may snap onto a candidate anchor
    /// of kind `other`: same kind always, otherwise only the fixed
    /// axis-aligned pairings (`Left`/`Right`, `Top`/`Bottom`, and the center
    /// lines with their two sides).
    pub fn is_snap_compatible_with(self, other: AnchorKind) -> bool {
        if self == other {
            return true;
        }
        match self {
            AnchorKind::Left => matches!(other, AnchorKind::Right | AnchorKind::CenterX),
            AnchorKind::Right => matches!(other, AnchorKind::Left | AnchorKind::CenterX),
            AnchorKind::Top => matches!(other, AnchorKind::Bottom | AnchorKind::CenterY),
            AnchorKind::Bottom => matches!(other, AnchorKind::Top | AnchorKind::CenterY),
            AnchorKind::CenterX => matches!(other, AnchorKind::Left | AnchorKind::Right),
            AnchorKind::CenterY => matches!(other, AnchorKind::Top | AnchorKind::Bottom),
            AnchorKind::Center | AnchorKind::Baseline | AnchorKind::None => false,
        }
    }
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnchorKind::None => "NONE",
            AnchorKind::Left => "LEFT",
            AnchorKind::Top => "TOP",
            AnchorKind::Right => "RIGHT",
            AnchorKind::Bottom => "BOTTOM",
            AnchorKind::Baseline => "BASELINE",
            AnchorKind::Center => "CENTER",
            AnchorKind::CenterX => "CENTER_X",
            AnchorKind::CenterY => "CENTER_Y",
        };
        f.write_str(name)
    }
}

/// How strongly the downstream solver should honor a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    None,
    Strong,
    Weak,
}

/// Hint consumed by the downstream solver; recorded here, never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    Relaxed,
    Strict,
}

/// Provenance of a connection: who created it. Recorded, not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionCreator {
    User,
    ScoutTool,
    AutoCreated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_matches_kind_list() {
        for (i, kind) in ANCHOR_KINDS.iter().enumerate() {
            assert_eq!(kind.slot(), i);
        }
    }

    #[test]
    #[should_panic(expected = "owns no anchor slot")]
    fn test_none_has_no_slot() {
        AnchorKind::None.slot();
    }

    #[test]
    fn test_vertical_classification() {
        assert!(!AnchorKind::Left.is_vertical());
        assert!(!AnchorKind::Right.is_vertical());
        assert!(!AnchorKind::CenterX.is_vertical());
        assert!(!AnchorKind::Center.is_vertical());
        assert!(AnchorKind::Top.is_vertical());
        assert!(AnchorKind::Bottom.is_vertical());
        assert!(AnchorKind::Baseline.is_vertical());
        assert!(AnchorKind::CenterY.is_vertical());
    }

    #[test]
    fn test_side_anchors() {
        assert!(AnchorKind::Left.is_side_anchor());
        assert!(AnchorKind::Bottom.is_side_anchor());
        assert!(!AnchorKind::Center.is_side_anchor());
        assert!(!AnchorKind::Baseline.is_side_anchor());
        assert!(!AnchorKind::CenterX.is_side_anchor());
    }

    #[test]
    fn test_opposites() {
        assert_eq!(AnchorKind::Left.opposite(), Some(AnchorKind::Right));
        assert_eq!(AnchorKind::Right.opposite(), Some(AnchorKind::Left));
        assert_eq!(AnchorKind::Top.opposite(), Some(AnchorKind::Bottom));
        assert_eq!(AnchorKind::Bottom.opposite(), Some(AnchorKind::Top));
        assert_eq!(AnchorKind::Center.opposite(), None);
        assert_eq!(AnchorKind::Baseline.opposite(), None);
    }

    #[test]
    fn test_similar_dimension_horizontal_family() {
        for a in [AnchorKind::Left, AnchorKind::Right, AnchorKind::CenterX] {
            for b in [AnchorKind::Left, AnchorKind::Right, AnchorKind::CenterX] {
                assert!(a.is_similar_dimension(b), "{a} vs {b}");
            }
            assert!(!a.is_similar_dimension(AnchorKind::Top));
            assert!(!a.is_similar_dimension(AnchorKind::Baseline));
        }
    }

    #[test]
    fn test_similar_dimension_vertical_family() {
        let vertical = [
            AnchorKind::Top,
            AnchorKind::Bottom,
            AnchorKind::Baseline,
            AnchorKind::CenterY,
        ];
        for a in vertical {
            for b in vertical {
                assert!(a.is_similar_dimension(b), "{a} vs {b}");
            }
            assert!(!a.is_similar_dimension(AnchorKind::Left));
        }
    }

    #[test]
    fn test_similar_dimension_center_pairs_with_all_but_baseline() {
        assert!(AnchorKind::Center.is_similar_dimension(AnchorKind::Left));
        assert!(AnchorKind::Center.is_similar_dimension(AnchorKind::CenterY));
        assert!(AnchorKind::Center.is_similar_dimension(AnchorKind::Center));
        assert!(!AnchorKind::Center.is_similar_dimension(AnchorKind::Baseline));
    }

    #[test]
    fn test_similar_dimension_none_pairs_with_nothing_else() {
        assert!(AnchorKind::None.is_similar_dimension(AnchorKind::None));
        assert!(!AnchorKind::None.is_similar_dimension(AnchorKind::Left));
        assert!(!AnchorKind::None.is_similar_dimension(AnchorKind::Top));
    }

    #[test]
    fn test_priority_levels() {
        assert_eq!(AnchorKind::Center.priority_level(), 2);
        assert_eq!(AnchorKind::Left.priority_level(), 2);
        assert_eq!(AnchorKind::Right.priority_level(), 2);
        assert_eq!(AnchorKind::Top.priority_level(), 2);
        assert_eq!(AnchorKind::Bottom.priority_level(), 2);
        assert_eq!(AnchorKind::Baseline.priority_level(), 1);
        assert_eq!(AnchorKind::CenterX.priority_level(), 0);
        assert_eq!(AnchorKind::CenterY.priority_level(), 0);
        assert_eq!(AnchorKind::None.priority_level(), 0);
    }

    #[test]
    fn test_snap_priority_levels() {
        assert_eq!(AnchorKind::Center.snap_priority_level(), 3);
        assert_eq!(AnchorKind::Baseline.snap_priority_level(), 2);
        assert_eq!(AnchorKind::Left.snap_priority_level(), 1);
        assert_eq!(AnchorKind::Right.snap_priority_level(), 1);
        assert_eq!(AnchorKind::CenterY.snap_priority_level(), 1);
        assert_eq!(AnchorKind::Top.snap_priority_level(), 0);
        assert_eq!(AnchorKind::Bottom.snap_priority_level(), 0);
        assert_eq!(AnchorKind::CenterX.snap_priority_level(), 0);
        assert_eq!(AnchorKind::None.snap_priority_level(), 0);
    }

    #[test]
    fn test_snap_compatible_reflexive() {
        for kind in ANCHOR_KINDS {
            assert!(kind.is_snap_compatible_with(kind), "{kind}");
        }
    }

    #[test]
    fn test_snap_compatible_axis_pairs() {
        assert!(AnchorKind::Left.is_snap_compatible_with(AnchorKind::Right));
        assert!(AnchorKind::Right.is_snap_compatible_with(AnchorKind::Left));
        assert!(AnchorKind::Top.is_snap_compatible_with(AnchorKind::Bottom));
        assert!(AnchorKind::Bottom.is_snap_compatible_with(AnchorKind::Top));
        assert!(AnchorKind::CenterX.is_snap_compatible_with(AnchorKind::Left));
        assert!(AnchorKind::CenterX.is_snap_compatible_with(AnchorKind::Right));
        assert!(AnchorKind::CenterY.is_snap_compatible_with(AnchorKind::Top));
        assert!(AnchorKind::CenterY.is_snap_compatible_with(AnchorKind::Bottom));
        assert!(AnchorKind::Left.is_snap_compatible_with(AnchorKind::CenterX));
        assert!(AnchorKind::Top.is_snap_compatible_with(AnchorKind::CenterY));
    }

    #[test]
    fn test_snap_compatible_rejects_cross_axis() {
        assert!(!AnchorKind::Left.is_snap_compatible_with(AnchorKind::Top));
        assert!(!AnchorKind::Left.is_snap_compatible_with(AnchorKind::CenterY));
        assert!(!AnchorKind::Bottom.is_snap_compatible_with(AnchorKind::Right));
        assert!(!AnchorKind::Baseline.is_snap_compatible_with(AnchorKind::Top));
        assert!(!AnchorKind::Center.is_snap_compatible_with(AnchorKind::Left));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AnchorKind::CenterX.to_string(), "CENTER_X");
        assert_eq!(AnchorKind::Baseline.to_string(), "BASELINE");
    }
}
