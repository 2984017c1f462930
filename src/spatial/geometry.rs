//! Points and rectangles tagged with the coordinate space they belong to
//!
//! Cell rectangles and drop points must be expressed in the same space for
//! hit-testing to mean anything. Every value carries a zero-sized space
//! marker, so the registry and placement engine only accept [`Board`]
//! coordinates and anything reported in [`Window`] coordinates has to go
//! through a [`Viewport`] first.

use std::fmt;
use std::marker::PhantomData;

/// Marker for a coordinate space
pub trait Space: Copy + Default + fmt::Debug + PartialEq {
    /// Name used in debug output
    const NAME: &'static str;
}

/// Coordinate space shared by the grid layout pass and drop handling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board;

impl Space for Board {
    const NAME: &'static str = "board";
}

/// Host window coordinates, as reported by a host's gesture recognizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window;

impl Space for Window {
    const NAME: &'static str = "window";
}

/// A point in space `S`
#[derive(Clone, Copy, PartialEq)]
pub struct Point<S: Space = Board> {
    /// Horizontal coordinate, growing to the right
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
    space: PhantomData<S>,
}

impl<S: Space> Point<S> {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Euclidean distance to another point of the same space
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Translate by a delta
    pub const fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Both coordinates are finite
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<S: Space> fmt::Debug for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", S::NAME, self.x, self.y)
    }
}

/// Width and height of an area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Create a size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both extents are finite and strictly positive
    pub const fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle in space `S`
///
/// Containment is half-open like most UI toolkits: the left and top edges
/// are inside, the right and bottom edges belong to the next rectangle.
#[derive(Clone, Copy, PartialEq)]
pub struct Rect<S: Space = Board> {
    /// Top-left corner
    pub origin: Point<S>,
    /// Extent from the origin
    pub size: Size,
}

impl<S: Space> Rect<S> {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle spanning two corners
    pub fn from_corners(min: Point<S>, max: Point<S>) -> Self {
        let x = min.x.min(max.x);
        let y = min.y.min(max.y);
        Self::new(x, y, (max.x - min.x).abs(), (max.y - min.y).abs())
    }

    /// Left edge
    pub const fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge
    pub const fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Right edge
    pub const fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge
    pub const fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Geometric center
    pub const fn center(&self) -> Point<S> {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Check whether the point lies inside (left/top edges inclusive)
    pub const fn contains(&self, point: Point<S>) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Grow the rectangle by `margin` on every side
    ///
    /// Negative margins shrink it; the size never goes below zero.
    pub fn expanded(&self, margin: f64) -> Self {
        let width = 2.0f64.mul_add(margin, self.size.width).max(0.0);
        let height = 2.0f64.mul_add(margin, self.size.height).max(0.0);
        Self::new(
            self.center().x - width / 2.0,
            self.center().y - height / 2.0,
            width,
            height,
        )
    }

    /// Finite coordinates and non-negative size
    pub const fn is_valid(&self) -> bool {
        self.origin.is_finite()
            && self.size.width.is_finite()
            && self.size.height.is_finite()
            && self.size.width >= 0.0
            && self.size.height >= 0.0
    }
}

impl<S: Space> fmt::Debug for Rect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}, {} {}x{}]",
            S::NAME,
            self.origin.x,
            self.origin.y,
            self.size.width,
            self.size.height
        )
    }
}

/// Placement of the board inside the window
///
/// The only sanctioned way to turn window coordinates into board
/// coordinates and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    board_origin: Point<Window>,
}

impl Viewport {
    /// Board whose origin sits at `board_origin` in window coordinates
    pub const fn new(board_origin: Point<Window>) -> Self {
        Self { board_origin }
    }

    /// Window position of the board origin
    pub const fn board_origin(&self) -> Point<Window> {
        self.board_origin
    }

    /// Convert a window point into board space
    pub const fn to_board(&self, point: Point<Window>) -> Point<Board> {
        Point::new(point.x - self.board_origin.x, point.y - self.board_origin.y)
    }

    /// Convert a board point into window space
    pub const fn to_window(&self, point: Point<Board>) -> Point<Window> {
        Point::new(point.x + self.board_origin.x, point.y + self.board_origin.y)
    }

    /// Convert a board rectangle into window space
    pub const fn rect_to_window(&self, rect: Rect<Board>) -> Rect<Window> {
        Rect {
            origin: self.to_window(rect.origin),
            size: rect.size,
        }
    }
}
