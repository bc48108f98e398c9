use crate::cell::Cell;
use crate::ray::Ray;
use crate::tracking::{self, Crossing};
use crate::util::BoundingBox;

use nalgebra::Point3;

use tracing::trace;

/// A scene: cells partitioning an axis-aligned bounding volume.
///
/// The cell list order defines the ids returned by `find_cell_id`. The
/// geometry is immutable once built, so queries can run concurrently from any
/// number of threads.
pub struct Geometry {
    pub cells: Vec<Cell>,
    pub bounding_box: BoundingBox,
}

impl Geometry {
    /// The cells are trusted to tile the bounding box interior without
    /// overlap; no consistency check is performed.
    pub fn new(cells: Vec<Cell>, bounding_box: BoundingBox) -> Geometry {
        Geometry {
            cells,
            bounding_box,
        }
    }

    /// Id of the first cell containing `point`, or `None` when no cell
    /// matches (the point is outside the bounding volume, or the partition is
    /// incomplete there).
    pub fn find_cell_id(&self, point: &Point3<f64>) -> Option<usize> {
        let id = self.cells.iter().position(|cell| cell.contains(point));
        if id.is_none() {
            trace!(?point, "no cell contains point");
        }
        id
    }

    /// The first cell containing `point`.
    pub fn find_cell(&self, point: &Point3<f64>) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.contains(point))
    }

    /// Advance `ray` to the next surface of the cell containing its origin.
    ///
    /// `None` when the origin lies in no cell, or when its cell has no
    /// surface ahead of the ray.
    pub fn find_intersection(&self, ray: &Ray) -> Option<Crossing> {
        let cell = self.find_cell(&ray.origin)?;
        tracking::find_intersection(ray, &cell.regions)
    }
}
