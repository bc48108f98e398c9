use nalgebra::Point3;

use crate::util::Interval;

use itertools::izip;

/// The axis-aligned bounding volume a geometry's cells partition.
///
/// Corner order is normalized per axis by `Interval::new`, so the lower-left
/// corner is componentwise at most the upper-right one by construction.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub bounds: [Interval; 3],
}

impl BoundingBox {
    pub fn from_corners(a: Point3<f64>, b: Point3<f64>) -> Self {
        let mut result = BoundingBox {
            bounds: [Interval::degenerate(0.0); 3],
        };
        for (bounds_elem, a_elem, b_elem) in izip!(result.bounds.iter_mut(), a.iter(), b.iter()) {
            *bounds_elem = Interval::new(*a_elem, *b_elem);
        }
        result
    }

    pub fn lower_left(&self) -> Point3<f64> {
        Point3::new(
            self.bounds[0].get_min(),
            self.bounds[1].get_min(),
            self.bounds[2].get_min(),
        )
    }

    pub fn upper_right(&self) -> Point3<f64> {
        Point3::new(
            self.bounds[0].get_max(),
            self.bounds[1].get_max(),
            self.bounds[2].get_max(),
        )
    }

    pub fn contains_point(&self, p: Point3<f64>) -> bool {
        self.bounds
            .iter()
            .zip(p.iter())
            .all(|(interval, &value)| interval.contains_value(value))
    }
}
