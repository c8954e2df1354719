// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

/// Screen axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Returns the component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns the other axis.
    #[must_use]
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Reading direction used to resolve [`Edge::Leading`] and [`Edge::Trailing`]
/// into physical sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Leading is the left side.
    #[default]
    LeftToRight,
    /// Leading is the right side.
    RightToLeft,
}

/// A single screen edge a presented surface can travel toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top edge; dismissing toward it means dragging up.
    Top,
    /// The leading edge; left in left-to-right layouts.
    Leading,
    /// The bottom edge; dismissing toward it means dragging down.
    Bottom,
    /// The trailing edge; right in left-to-right layouts.
    Trailing,
}

impl Edge {
    /// All edges, in evaluation order.
    ///
    /// When several edges of an [`EdgeSet`] could claim a gesture, the first
    /// one in this order wins.
    pub const ALL: [Self; 4] = [Self::Top, Self::Leading, Self::Bottom, Self::Trailing];

    /// Returns the axis a surface moves along when travelling toward this edge.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Leading | Self::Trailing => Axis::Horizontal,
        }
    }

    /// Returns the edge on the other side of the screen.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Leading => Self::Trailing,
            Self::Trailing => Self::Leading,
        }
    }

    /// Returns the unit vector pointing from the screen center toward this edge.
    #[must_use]
    pub fn direction(self, layout: LayoutDirection) -> Vec2 {
        let rtl = layout == LayoutDirection::RightToLeft;
        match self {
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
            Self::Leading if rtl => Vec2::new(1.0, 0.0),
            Self::Leading => Vec2::new(-1.0, 0.0),
            Self::Trailing if rtl => Vec2::new(-1.0, 0.0),
            Self::Trailing => Vec2::new(1.0, 0.0),
        }
    }

    /// Projects `v` onto this edge's direction.
    ///
    /// Positive values move toward the edge, negative values away from it.
    #[must_use]
    pub fn directional(self, v: Vec2, layout: LayoutDirection) -> f64 {
        v.dot(self.direction(layout))
    }

    /// Returns the fraction of `size` that `translation` covers toward this edge.
    ///
    /// The result is signed and not clamped: dragging away from the edge is
    /// negative, dragging past the full extent exceeds `1.0`. Degenerate sizes
    /// yield `0.0`.
    #[must_use]
    pub fn progress(self, translation: Vec2, size: Size, layout: LayoutDirection) -> f64 {
        let extent = self.axis().extent(size);
        if extent <= 0.0 {
            return 0.0;
        }
        self.directional(translation, layout) / extent
    }

    /// Returns `true` when a drag with the given `translation` and latest
    /// `delta` heads toward this edge along its dominant axis.
    ///
    /// - bottom: `translation.y > 0` and `|delta.y| >= |delta.x|`
    /// - top: `translation.y < 0` and `|delta.y| >= |delta.x|`
    /// - leading: `translation.x < 0` and `|delta.x| >= |delta.y|` (left-to-right)
    /// - trailing: `translation.x > 0` and `|delta.x| >= |delta.y|` (left-to-right)
    #[must_use]
    pub fn is_heading_toward(self, translation: Vec2, delta: Vec2, layout: LayoutDirection) -> bool {
        let axis = self.axis();
        let dominant = axis.component(delta).abs() >= axis.cross().component(delta).abs();
        dominant && self.directional(translation, layout) > 0.0
    }

    /// Returns this edge as a single-member set.
    #[must_use]
    pub fn set(self) -> EdgeSet {
        match self {
            Self::Top => EdgeSet::TOP,
            Self::Leading => EdgeSet::LEADING,
            Self::Bottom => EdgeSet::BOTTOM,
            Self::Trailing => EdgeSet::TRAILING,
        }
    }
}

bitflags::bitflags! {
    /// Set of edges a presented surface may be dismissed toward.
    ///
    /// Both axes may be active at the same time; nothing enforces a choice
    /// between vertical and horizontal dismissal.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EdgeSet: u8 {
        /// Dismiss by dragging up.
        const TOP      = 0b0000_0001;
        /// Dismiss by dragging toward the leading side.
        const LEADING  = 0b0000_0010;
        /// Dismiss by dragging down.
        const BOTTOM   = 0b0000_0100;
        /// Dismiss by dragging toward the trailing side.
        const TRAILING = 0b0000_1000;
        /// Top and bottom.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Leading and trailing.
        const HORIZONTAL = Self::LEADING.bits() | Self::TRAILING.bits();
        /// Every edge.
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self::BOTTOM
    }
}

impl From<Edge> for EdgeSet {
    fn from(edge: Edge) -> Self {
        edge.set()
    }
}

impl EdgeSet {
    /// Returns `true` if `edge` is a member of this set.
    #[must_use]
    pub fn contains_edge(self, edge: Edge) -> bool {
        self.contains(edge.set())
    }

    /// Iterates the member edges in [`Edge::ALL`] order.
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |e| self.contains_edge(*e))
    }

    /// Returns `true` if any member edge moves along `axis`.
    #[must_use]
    pub fn has_axis(self, axis: Axis) -> bool {
        self.edges().any(|e| e.axis() == axis)
    }

    /// Returns the first member edge the drag is heading toward, if any.
    #[must_use]
    pub fn heading_edge(self, translation: Vec2, delta: Vec2, layout: LayoutDirection) -> Option<Edge> {
        self.edges()
            .find(|e| e.is_heading_toward(translation, delta, layout))
    }

    /// Returns the largest progress over all member edges, with the edge that produced it.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn max_progress(self, translation: Vec2, size: Size, layout: LayoutDirection) -> Option<(Edge, f64)> {
        self.edges()
            .map(|e| (e, e.progress(translation, size, layout)))
            .fold(None, |best, (e, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((e, p)),
            })
    }
}
