use crate::math::{Point2, Segment};

/// An ordered sequence of 2D vertices.
///
/// Vertex order is significant: it defines the traversal orientation,
/// and consecutive stored vertices define the edges. The coordinates
/// are kept in two parallel sequences that always have equal length.
/// A polygon is built by appending vertices and is read-only for all
/// geometric queries afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    xs: Vec<f32>,
    ys: Vec<f32>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty polygon with room for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    /// Appends a vertex in traversal order.
    pub fn append_point(&mut self, x: f32, y: f32) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Returns the vertex count.
    #[must_use]
    pub fn size(&self) -> usize {
        debug_assert_eq!(self.xs.len(), self.ys.len());
        self.xs.len()
    }

    /// Returns whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns vertex `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.size()`.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Point2 {
        Point2::new(self.xs[i], self.ys[i])
    }

    /// Bit-exact closure test: the first and last stored vertices are
    /// equal.
    ///
    /// An empty polygon is not closed.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_closed(&self) -> bool {
        let n = self.size();
        if n == 0 {
            return false;
        }
        self.xs[0] == self.xs[n - 1] && self.ys[0] == self.ys[n - 1]
    }

    /// Tolerance-based closure test: the first and last stored
    /// vertices coincide within `tolerance` per coordinate.
    ///
    /// An empty polygon is not closed.
    #[must_use]
    pub fn is_closed_within(&self, tolerance: f32) -> bool {
        let n = self.size();
        if n == 0 {
            return false;
        }
        (self.xs[0] - self.xs[n - 1]).abs() <= tolerance
            && (self.ys[0] - self.ys[n - 1]).abs() <= tolerance
    }

    /// Iterates the edges between consecutive stored vertices.
    ///
    /// Stored order only: there is no implicit wrap from the last
    /// vertex back to the first, so a closed traversal must store the
    /// closing vertex explicitly. Empty for polygons with fewer than
    /// two vertices.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (1..self.size()).map(move |i| {
            Segment::new(self.xs[i - 1], self.ys[i - 1], self.xs[i], self.ys[i])
        })
    }
}
