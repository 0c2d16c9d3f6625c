pub mod circle;
pub mod line_segment;
pub mod polygon;

pub use circle::Circle;
pub use line_segment::LineSegment;
pub use polygon::{sort_by_centroid_angle, Polygon};

use crate::collision::BoundingBox;
use crate::math::vec2::Vec2;

/// Geometry of a rigid body. Circles are positioned by their body's
/// center; polygons carry world-space vertices.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn bounding_box(&self, center: Vec2) -> BoundingBox {
        match self {
            Shape::Circle(circle) => circle.bounding_box(center),
            Shape::Polygon(polygon) => polygon.bounding_box(),
        }
    }

    pub fn project_on_axis(&self, center: Vec2, axis: Vec2) -> (f64, f64) {
        match self {
            Shape::Circle(circle) => circle.project(center, axis),
            Shape::Polygon(polygon) => polygon.project(axis),
        }
    }

    /// Separating-axis candidates this shape contributes when tested against
    /// `other`. A polygon offers its edge normals; a circle offers one axis
    /// from its center toward each vertex of a polygon partner and nothing
    /// against another circle.
    pub fn axes_against(&self, center: Vec2, other: &Shape) -> Vec<Vec2> {
        match (self, other) {
            (Shape::Polygon(polygon), _) => polygon.edge_normals(),
            (Shape::Circle(_), Shape::Polygon(polygon)) => polygon
                .vertices()
                .iter()
                .map(|v| (*v - center).unit())
                .collect(),
            (Shape::Circle(_), Shape::Circle(_)) => Vec::new(),
        }
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Shape::Polygon(_))
    }
}
