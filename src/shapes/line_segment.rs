use crate::math::vec2::Vec2;

/// A polygon edge from `point_a` to `point_b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub point_a: Vec2,
    pub point_b: Vec2,
}

impl LineSegment {
    pub fn new(point_a: Vec2, point_b: Vec2) -> Self {
        Self { point_a, point_b }
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> f64 {
        self.point_a.distance(self.point_b)
    }

    /// Returns the direction vector of the line segment (from a to b).
    pub fn direction(&self) -> Vec2 {
        self.point_b - self.point_a
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.point_a + self.point_b) / 2.0
    }

    /// Rise over run. Infinite or NaN for vertical segments.
    pub fn slope(&self) -> f64 {
        let d = self.direction();
        d.y / d.x
    }

    /// Where the carrying line crosses x = 0. Undefined for vertical segments.
    pub fn y_intercept(&self) -> f64 {
        self.point_a.y - self.slope() * self.point_a.x
    }

    /// Unit vector perpendicular to the segment.
    pub fn normal(&self) -> Vec2 {
        self.direction().perpendicular().unit()
    }
}
