/// 2D point type.
///
/// Coordinates are single precision, matching the stored polygon data.
pub type Point2 = nalgebra::Point2<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// Default tolerance for boundary and closure decisions.
pub const DEFAULT_TOLERANCE: f32 = f32::EPSILON;

/// A directed polygon edge from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    /// Creates a segment from its endpoint coordinates.
    #[must_use]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns whether both endpoints share the same x (bit-exact).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    /// y of the carrier line at `x`.
    ///
    /// The segment must not be vertical.
    #[must_use]
    pub fn y_at(&self, x: f32) -> f32 {
        let slope = (self.y2 - self.y1) / (self.x2 - self.x1);
        self.y1 + slope * (x - self.x1)
    }

    /// x of the carrier line at `y`, via the inverse slope Δx/Δy.
    ///
    /// The segment must not be horizontal.
    #[must_use]
    pub fn x_at(&self, y: f32) -> f32 {
        let inverse_slope = (self.x2 - self.x1) / (self.y2 - self.y1);
        self.x1 + inverse_slope * (y - self.y1)
    }

    /// Returns whether `(x, y)` lies on this segment.
    ///
    /// An exact hit on the first endpoint always counts. Vertical
    /// segments are tested by exact x equality and an inclusive
    /// y-range. All other segments are tested by an inclusive x-range
    /// and the vertical distance to the carrier line, within
    /// `tolerance`. The second endpoint is covered by the next edge of
    /// a closed traversal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn contains(&self, x: f32, y: f32, tolerance: f32) -> bool {
        if x == self.x1 && y == self.y1 {
            return true;
        }

        if self.is_vertical() {
            return x == self.x1 && y >= self.y1.min(self.y2) && y <= self.y1.max(self.y2);
        }

        if x < self.x1.min(self.x2) || x > self.x1.max(self.x2) {
            return false;
        }

        (y - self.y_at(x)).abs() <= tolerance
    }
}
