use crate::surfaces::Surface;

use nalgebra::Point3;

use std::sync::Arc;

/// Which side of a surface a point lies on.
///
/// `Negative` is the closed inside: points exactly on the surface classify as
/// `Negative`, so the two senses of one surface tile space without a gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Negative,
    Positive,
}

impl Sense {
    /// Classify the sign of a surface evaluation.
    pub fn of(value: f64) -> Sense {
        if value > 0.0 {
            Sense::Positive
        } else {
            Sense::Negative
        }
    }
}

/// A half-space: the set of points on one side of a surface.
///
/// Regions share their surface by reference; one plane typically bounds the
/// cells on both of its sides.
#[derive(Clone, Debug)]
pub struct Region {
    pub surface: Arc<Surface>,
    pub sense: Sense,
}

impl Region {
    pub fn new(surface: Arc<Surface>, sense: Sense) -> Region {
        Region { surface, sense }
    }

    /// True when `point` lies on this region's side of the surface.
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        self.surface.halfspace(point) == self.sense
    }
}
