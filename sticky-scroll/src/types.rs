/// The scroll axis of a sticky scroll view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    /// Projects a point onto the scroll axis.
    pub fn main(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// Projects a size onto the scroll axis.
    pub fn main_size(self, s: Size) -> f64 {
        match self {
            Self::Horizontal => s.width,
            Self::Vertical => s.height,
        }
    }

    /// Returns `p` with its scroll-axis component replaced by `main`.
    pub fn with_main(self, p: Point, main: f64) -> Point {
        match self {
            Self::Horizontal => Point { x: main, y: p.y },
            Self::Vertical => Point { x: p.x, y: main },
        }
    }

    /// Maps a scalar displacement along the scroll axis to a 2D translation.
    pub fn translation(self, main: f64) -> Point {
        self.with_main(Point::ZERO, main)
    }

    /// The content inset applied before content starts on this axis.
    pub fn leading_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Horizontal => insets.leading,
            Self::Vertical => insets.top,
        }
    }

    /// The content inset applied after content ends on this axis.
    pub fn trailing_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Horizontal => insets.trailing,
            Self::Vertical => insets.bottom,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in the scroll content's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Start of the rect along `axis`.
    pub fn main_start(&self, axis: Axis) -> f64 {
        axis.main(self.origin())
    }

    /// Extent of the rect along `axis`.
    pub fn main_extent(&self, axis: Axis) -> f64 {
        axis.main_size(self.size())
    }

    /// Whether the rect can take part in sticky resolution along `axis`.
    ///
    /// Layout passes can report transient garbage: non-finite coordinates, negative or zero
    /// extents. Such frames are skipped for the current pass only.
    pub fn is_stickable(&self, axis: Axis) -> bool {
        let start = self.main_start(axis);
        let extent = self.main_extent(axis);
        start.is_finite() && extent.is_finite() && extent > 0.0
    }
}

/// Padding applied around scroll content, in the toolkit's edge naming.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl Insets {
    pub const ZERO: Self = Self {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    pub const fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }
}

/// The edge of the scroll axis an element sticks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StickyEdge {
    /// The top (vertical scroll) or leading (horizontal scroll) edge.
    LeadingStart,
    /// The bottom (vertical scroll) or trailing (horizontal scroll) edge.
    TrailingEnd,
}

impl StickyEdge {
    pub const ALL: [Self; 2] = [Self::LeadingStart, Self::TrailingEnd];
}

/// A small set of [`StickyEdge`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSet {
    pub leading_start: bool,
    pub trailing_end: bool,
}

impl EdgeSet {
    pub const EMPTY: Self = Self {
        leading_start: false,
        trailing_end: false,
    };

    pub const ALL: Self = Self {
        leading_start: true,
        trailing_end: true,
    };

    pub fn only(edge: StickyEdge) -> Self {
        let mut set = Self::EMPTY;
        set.insert(edge);
        set
    }

    pub fn contains(&self, edge: StickyEdge) -> bool {
        match edge {
            StickyEdge::LeadingStart => self.leading_start,
            StickyEdge::TrailingEnd => self.trailing_end,
        }
    }

    pub fn insert(&mut self, edge: StickyEdge) {
        match edge {
            StickyEdge::LeadingStart => self.leading_start = true,
            StickyEdge::TrailingEnd => self.trailing_end = true,
        }
    }
}

impl FromIterator<StickyEdge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = StickyEdge>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for edge in iter {
            set.insert(edge);
        }
        set
    }
}

/// How two elements contending for the same edge hand off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StickyBehavior {
    /// Hard cut: the incoming element replaces the outgoing one as soon as it reaches the edge.
    #[default]
    Replace,
    /// Cross-fade over the outgoing element's own extent.
    Fade,
}
