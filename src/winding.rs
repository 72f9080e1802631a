use crate::math::{Segment, DEFAULT_TOLERANCE};
use crate::polygon::Polygon;

/// Algorithm variant, selected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Placeholder that always fails and sets a diagnostic message.
    Unimplemented,
    /// Signed ray-crossing accumulation.
    #[default]
    RayCrossing,
}

/// How a query point lying on the polygon boundary is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryRule {
    /// Return a fixed winding number of 1, regardless of orientation
    /// or actual crossing count. Compatible with the historical
    /// behavior downstream comparisons rely on.
    #[default]
    Sentinel,
    /// Treat the winding number as undefined and return nothing.
    Undefined,
}

const UNIMPLEMENTED_MESSAGE: &str = "winding number algorithm is not implemented";

/// Computes winding numbers of closed polygons around query points.
///
/// The instance is configuration shared across calls, not a result:
/// the tolerance feeds the boundary pre-check, and the last error
/// message is overwritten by each failed call. Callers that need
/// concurrent queries with different tolerances must use separate
/// instances.
#[derive(Debug, Clone)]
pub struct WindingNumberAlgorithm {
    variant: Variant,
    tolerance: f32,
    boundary_rule: BoundaryRule,
    last_error: String,
}

impl Default for WindingNumberAlgorithm {
    fn default() -> Self {
        Self::new(Variant::RayCrossing)
    }
}

impl WindingNumberAlgorithm {
    /// Creates an algorithm of the given variant with the default
    /// tolerance and boundary rule.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            tolerance: DEFAULT_TOLERANCE,
            boundary_rule: BoundaryRule::default(),
            last_error: String::new(),
        }
    }

    /// Sets the tolerance used by the boundary pre-check.
    pub fn set_tolerance(&mut self, tolerance: f32) {
        self.tolerance = tolerance;
    }

    /// Returns the configured tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Sets how boundary points are reported.
    pub fn set_boundary_rule(&mut self, rule: BoundaryRule) {
        self.boundary_rule = rule;
    }

    /// Returns the configured boundary rule.
    #[must_use]
    pub fn boundary_rule(&self) -> BoundaryRule {
        self.boundary_rule
    }

    /// Returns the message from the most recent failed call.
    #[must_use]
    pub fn last_error_message(&self) -> &str {
        &self.last_error
    }

    /// Computes the winding number of `polygon` around `(x, y)`:
    /// the signed count of how many times the traversal wraps around
    /// the point, counter-clockwise positive.
    ///
    /// Returns `None` when no winding number is defined: the polygon
    /// is not closed (bit-exact closure test), the point is on the
    /// boundary under [`BoundaryRule::Undefined`], or the variant is
    /// [`Variant::Unimplemented`] (which also sets the error message).
    ///
    /// Degenerate polygons with fewer than two stored vertices are not
    /// specially handled: an empty polygon is never closed, and a
    /// single vertex closes on itself and yields 0 from the empty edge
    /// loop.
    pub fn calculate_winding_number(&mut self, x: f32, y: f32, polygon: &Polygon) -> Option<i32> {
        match self.variant {
            Variant::Unimplemented => {
                self.last_error = UNIMPLEMENTED_MESSAGE.to_owned();
                None
            }
            Variant::RayCrossing => self.ray_crossing(x, y, polygon),
        }
    }

    fn ray_crossing(&self, x: f32, y: f32, polygon: &Polygon) -> Option<i32> {
        if !polygon.is_closed() {
            return None;
        }

        if self.point_on_boundary(x, y, polygon) {
            return match self.boundary_rule {
                BoundaryRule::Sentinel => Some(1),
                BoundaryRule::Undefined => None,
            };
        }

        let mut winding = 0.0_f32;
        for segment in polygon.edges() {
            winding += crossing_contribution(x, y, segment);
        }

        // Truncation toward zero, so residual half-weights vanish.
        #[allow(clippy::cast_possible_truncation)]
        let winding = winding as i32;
        Some(winding)
    }

    fn point_on_boundary(&self, x: f32, y: f32, polygon: &Polygon) -> bool {
        polygon.edges().any(|s| s.contains(x, y, self.tolerance))
    }
}

/// Signed contribution of one edge to the accumulated winding number.
///
/// Edges strictly crossing the rightward ray from `(x, y)` count ±1.
/// An edge touching the ray at exactly one endpoint counts ±0.5, so
/// the two adjacent edges sharing a grazing vertex combine to one
/// whole crossing. Equality comparisons here are bit-exact; the
/// boundary pre-check is the only tolerance-aware stage.
#[allow(clippy::float_cmp)]
fn crossing_contribution(x: f32, y: f32, s: Segment) -> f32 {
    if !point_is_left(x, y, s) {
        return 0.0;
    }

    // Counter-clockwise crossing of the ray.
    if s.y1 < y && s.y2 > y {
        return 1.0;
    }
    // Clockwise crossing.
    if s.y1 > y && s.y2 < y {
        return -1.0;
    }

    // Grazing vertex: one endpoint exactly at the ray height.
    if s.y1 == y && s.y2 < y {
        return -0.5;
    }
    if s.y1 == y && s.y2 > y {
        return 0.5;
    }
    if s.y2 == y && s.y1 < y {
        return 0.5;
    }
    if s.y2 == y && s.y1 > y {
        return -0.5;
    }

    0.0
}

/// Whether `(x, y)` is left of segment `s` at the ray height `y`.
///
/// Edges entirely above or entirely below the ray can never be
/// crossed. Otherwise the edge's x at height `y` is found by
/// inverse-slope interpolation and compared against the query's x.
#[allow(clippy::float_cmp)]
fn point_is_left(x: f32, y: f32, s: Segment) -> bool {
    if (s.y1 > y && s.y2 > y) || (s.y1 < y && s.y2 < y) {
        return false;
    }
    if s.x1 > x && s.x2 > x {
        return true;
    }
    if s.x1 == x && s.x2 == x {
        return false;
    }
    x < s.x_at(y)
}
