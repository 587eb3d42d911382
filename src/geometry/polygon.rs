use super::Point;

/// A planar polygon over lat/lon vertices.
///
/// Vertex order is significant: consecutive vertices form edges and the
/// last vertex connects back to the first to close the loop. The shape is
/// fixed at construction; build a new polygon to change it.
#[derive(Debug, Clone)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from vertices in loop order.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The stored vertices, in loop order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the polygon has enough vertices to enclose area.
    ///
    /// Purely a point-count check (>= 3); there is no geometric closure or
    /// self-intersection test.
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 3
    }

    /// Edges of the implicit closed loop, starting with the wraparound
    /// edge (last vertex -> first vertex).
    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            let from = self.points[if i == 0 { n - 1 } else { i - 1 }];
            (from, self.points[i])
        })
    }

    /// Ray-casting (even-odd) containment test.
    ///
    /// Returns false for any polygon that is not closed. Points exactly on
    /// an edge or vertex are not specially handled, and an edge with equal
    /// longitudes divides by zero; the usual IEEE comparison rules decide
    /// the outcome in those cases.
    pub fn contains(&self, point: &Point) -> bool {
        if !self.is_closed() {
            return false;
        }

        let mut inside = false;
        for (a, b) in self.edges() {
            if ray_crosses(point, &a, &b) {
                inside = !inside;
            }
        }

        inside
    }
}

/// PNPoly edge test: does a horizontal ray from `p` cross the edge `a`-`b`?
fn ray_crosses(p: &Point, a: &Point, b: &Point) -> bool {
    (a.lon > p.lon) != (b.lon > p.lon)
        && p.lat < (b.lat - a.lat) * (p.lon - a.lon) / (b.lon - a.lon) + a.lat
}
