// Axis-aligned bounding boxes for the broad phase.

use crate::math::vec2::Vec2;

/// An axis-aligned box given by its top-left corner and its extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest box containing every point. An empty slice yields a box with
    /// infinite corners that overlaps nothing.
    pub fn from_points(points: &[Vec2]) -> Self {
        let (min, max) = points.iter().fold(
            (
                Vec2::new(f64::INFINITY, f64::INFINITY),
                Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            ),
            |(min, max), p| {
                (
                    Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                    Vec2::new(max.x.max(p.x), max.y.max(p.y)),
                )
            },
        );
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Strict overlap on both axes. Boxes that only share an edge or a corner
    /// do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let bb = BoundingBox::from_points(&[
            Vec2::new(1.0, 5.0),
            Vec2::new(-2.0, 3.0),
            Vec2::new(4.0, -1.0),
        ]);
        assert_eq!(bb, BoundingBox::new(-2.0, -1.0, 6.0, 6.0));
        assert_eq!(bb.right(), 4.0);
        assert_eq!(bb.bottom(), 5.0);
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = BoundingBox::new(0.0, 0.0, 2.0, 2.0);
        let b = BoundingBox::new(1.0, 1.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let inner = BoundingBox::new(4.0, 4.0, 1.0, 1.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 2.0, 2.0);
        let right = BoundingBox::new(2.0, 0.0, 2.0, 2.0);
        let below = BoundingBox::new(0.0, 2.0, 2.0, 2.0);
        let corner = BoundingBox::new(2.0, 2.0, 1.0, 1.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_disjoint_on_one_axis() {
        let a = BoundingBox::new(0.0, 0.0, 2.0, 2.0);
        let b = BoundingBox::new(1.0, 5.0, 2.0, 2.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_empty_point_set_overlaps_nothing() {
        let empty = BoundingBox::from_points(&[]);
        let a = BoundingBox::new(-1e9, -1e9, 2e9, 2e9);
        assert!(!empty.overlaps(&a));
    }
}
