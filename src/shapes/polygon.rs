use std::f64::consts::{PI, TAU};

use crate::collision::BoundingBox;
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;

/// A convex polygon stored in world space.
///
/// The vertex ring is kept sorted by angle around the geometric centroid and
/// is closed implicitly: the last side runs from the final vertex back to the
/// first. `centroid` and `sides` are derived from the vertices and move with
/// them on every translation or rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    centroid: Vec2,
    sides: Vec<LineSegment>,
}

impl Polygon {
    /// Creates a polygon from at least three vertices, in any order.
    pub fn new(vertices: Vec<Vec2>) -> PhysicsResult<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::invalid_geometry(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        let vertices = sort_by_centroid_angle(vertices);
        let centroid = geometric_centroid(&vertices);
        let sides = build_sides(&vertices);
        Ok(Self { vertices, centroid, sides })
    }

    /// Regular `sides`-gon around `center`. Vertex k sits at angle
    /// `π/n + 2πk/n`, which makes a 4-gon axis-aligned.
    pub fn regular(center: Vec2, sides: usize, radius: f64) -> PhysicsResult<Self> {
        if sides < 3 {
            return Err(PhysicsError::invalid_geometry(format!(
                "regular polygon needs at least 3 sides, got {sides}"
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::invalid_geometry(format!(
                "regular polygon radius must be positive, got {radius}"
            )));
        }
        let n = sides as f64;
        let vertices = (0..sides)
            .map(|k| center + Vec2::from_polar(radius, PI / n + TAU * k as f64 / n))
            .collect();
        Self::new(vertices)
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Mean of the vertices.
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    pub fn sides(&self) -> &[LineSegment] {
        &self.sides
    }

    /// Unit normal of every side, in side order.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        self.sides.iter().map(LineSegment::normal).collect()
    }

    fn signed_area(&self) -> f64 {
        self.ring().map(|(v1, v2)| v1.cross(v2)).sum::<f64>() / 2.0
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Centroid of area (shoelace). Differs from [`Polygon::centroid`] for
    /// irregular shapes; zero-area rings yield NaN.
    pub fn center_of_mass(&self) -> Vec2 {
        let area = self.signed_area();
        let weighted: Vec2 = self
            .ring()
            .map(|(v1, v2)| (v1 + v2) * v1.cross(v2))
            .sum();
        weighted / (6.0 * area)
    }

    /// Mean distance from the vertices to `point`.
    pub fn mean_vertex_distance(&self, point: Vec2) -> f64 {
        let total: f64 = self.vertices.iter().map(|v| v.distance(point)).sum();
        total / self.vertices.len() as f64
    }

    /// `½ · mass · r²` with `r` the mean vertex distance to `center_of_mass`.
    pub fn rotational_inertia(&self, mass: f64, center_of_mass: Vec2) -> f64 {
        let r = self.mean_vertex_distance(center_of_mass);
        0.5 * mass * r * r
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// Min and max of the vertices' dot products with `axis`.
    pub fn project(&self, axis: Vec2) -> (f64, f64) {
        self.vertices
            .iter()
            .map(|v| v.dot(axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
                (min.min(p), max.max(p))
            })
    }

    pub fn translate(&mut self, offset: Vec2) {
        for v in &mut self.vertices {
            *v += offset;
        }
        self.centroid += offset;
        self.sides = build_sides(&self.vertices);
    }

    pub fn rotate(&mut self, angle: f64, origin: Vec2) {
        for v in &mut self.vertices {
            *v = v.rotate(angle, origin);
        }
        self.centroid = self.centroid.rotate(angle, origin);
        self.sides = build_sides(&self.vertices);
    }

    /// Consecutive vertex pairs, wrapping around.
    fn ring(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// Orders vertices by their angle around the geometric centroid.
pub fn sort_by_centroid_angle(mut vertices: Vec<Vec2>) -> Vec<Vec2> {
    let centroid = geometric_centroid(&vertices);
    vertices.sort_by(|a, b| (*a - centroid).angle().total_cmp(&(*b - centroid).angle()));
    vertices
}

fn geometric_centroid(vertices: &[Vec2]) -> Vec2 {
    Vec2::sum(vertices) / vertices.len() as f64
}

fn build_sides(vertices: &[Vec2]) -> Vec<LineSegment> {
    let n = vertices.len();
    (0..n)
        .map(|i| LineSegment::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}
